//! # XAdES Simple Report Adapter
//!
//! Normalizes the hierarchical, multi-layer "simple reports" of the
//! signature policy engine. Each layer reports any number of signatures;
//! nested containers produce further layers that re-report signatures with
//! refined conclusions.

use crate::domain::{
    AuditElement, AuditNode, IndicationRecord, ReportConfig, ReportError, ValidationIssue,
};
use crate::ports::ReportLayer;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{Indication, SignatureId, SignatureQualification, SubIndication};
use std::fmt;

/// Upper bound on layers pulled from a linked report provider.
pub const MAX_LINKED_LAYERS: usize = 64;

/// One "basic info" entry of a conclusion: an error, warning or info.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicInfo {
    /// Engine message key (e.g. `BBB_CV_IRDOI_ANS`)
    #[serde(default)]
    pub name_id: Option<String>,
    /// Human readable message
    pub value: String,
}

impl BasicInfo {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            name_id: None,
            value: value.into(),
        }
    }

    pub fn with_name_id(mut self, name_id: impl Into<String>) -> Self {
        self.name_id = Some(name_id.into());
        self
    }

    fn to_node(&self, element: &str) -> AuditElement {
        let node = AuditElement::new(element);
        let node = match &self.name_id {
            Some(name_id) => node.with_attribute("NameId", name_id.as_str()),
            None => node,
        };
        node.with_text(self.value.as_str())
    }
}

/// The canonical string form; the only source of issue messages.
impl fmt::Display for BasicInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name_id {
            Some(name_id) => write!(f, "{name_id}: {}", self.value),
            None => f.write_str(&self.value),
        }
    }
}

/// The engine's conclusion about one signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureConclusion {
    pub id: SignatureId,
    /// Format label, e.g. `XAdES-BASELINE-LT`
    pub signature_format: String,
    pub indication: Indication,
    #[serde(default)]
    pub sub_indication: Option<SubIndication>,
    #[serde(default)]
    pub qualification: SignatureQualification,
    #[serde(default)]
    pub signing_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub signed_by: Option<String>,
    #[serde(default)]
    pub errors: Vec<BasicInfo>,
    #[serde(default)]
    pub warnings: Vec<BasicInfo>,
    #[serde(default)]
    pub infos: Vec<BasicInfo>,
}

impl SignatureConclusion {
    /// A conclusion with no issues, qualification `NA`.
    pub fn new(
        id: impl Into<SignatureId>,
        signature_format: impl Into<String>,
        indication: Indication,
    ) -> Self {
        Self {
            id: id.into(),
            signature_format: signature_format.into(),
            indication,
            sub_indication: None,
            qualification: SignatureQualification::Na,
            signing_time: None,
            signed_by: None,
            errors: Vec::new(),
            warnings: Vec::new(),
            infos: Vec::new(),
        }
    }

    pub fn with_sub_indication(mut self, sub_indication: SubIndication) -> Self {
        self.sub_indication = Some(sub_indication);
        self
    }

    pub fn with_qualification(mut self, qualification: SignatureQualification) -> Self {
        self.qualification = qualification;
        self
    }

    pub fn with_signing_time(mut self, signing_time: DateTime<Utc>) -> Self {
        self.signing_time = Some(signing_time);
        self
    }

    pub fn with_signed_by(mut self, signer: impl Into<String>) -> Self {
        self.signed_by = Some(signer.into());
        self
    }

    pub fn with_error(mut self, error: BasicInfo) -> Self {
        self.errors.push(error);
        self
    }

    pub fn with_warning(mut self, warning: BasicInfo) -> Self {
        self.warnings.push(warning);
        self
    }

    pub fn with_info(mut self, info: BasicInfo) -> Self {
        self.infos.push(info);
        self
    }

    fn to_node(&self) -> AuditElement {
        let mut node = AuditElement::new("Signature")
            .with_attribute("Id", self.id.as_str())
            .with_attribute("SignatureFormat", self.signature_format.as_str());

        if let Some(signing_time) = &self.signing_time {
            node = node.with_child(AuditElement::leaf("SigningTime", format_time(signing_time)));
        }
        if let Some(signer) = &self.signed_by {
            node = node.with_child(AuditElement::leaf("SignedBy", signer.as_str()));
        }
        node = node.with_child(AuditElement::leaf("Indication", self.indication.as_str()));
        if let Some(sub_indication) = self.sub_indication {
            node = node.with_child(AuditElement::leaf("SubIndication", sub_indication.as_str()));
        }
        node = node.with_child(AuditElement::leaf(
            "SignatureLevel",
            self.qualification.as_str(),
        ));

        node.with_children(self.errors.iter().map(|e| AuditNode::from(e.to_node("Errors"))))
            .with_children(self.warnings.iter().map(|w| AuditNode::from(w.to_node("Warnings"))))
            .with_children(self.infos.iter().map(|i| AuditNode::from(i.to_node("Infos"))))
    }
}

/// One layer of the engine output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleReport {
    pub policy_name: Option<String>,
    pub validation_time: Option<DateTime<Utc>>,
    pub document_name: Option<String>,
    pub signatures: Vec<SignatureConclusion>,
    /// Additional engine detail appended verbatim to the native tree
    pub extra_nodes: Vec<AuditNode>,
}

impl SimpleReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy_name(mut self, name: impl Into<String>) -> Self {
        self.policy_name = Some(name.into());
        self
    }

    pub fn with_validation_time(mut self, time: DateTime<Utc>) -> Self {
        self.validation_time = Some(time);
        self
    }

    pub fn with_document_name(mut self, name: impl Into<String>) -> Self {
        self.document_name = Some(name.into());
        self
    }

    pub fn with_signature(mut self, conclusion: SignatureConclusion) -> Self {
        self.signatures.push(conclusion);
        self
    }

    pub fn with_extra_node(mut self, node: impl Into<AuditNode>) -> Self {
        self.extra_nodes.push(node.into());
        self
    }

    /// Conclusion for `signature_id`.
    pub fn conclusion(&self, signature_id: &str) -> Result<&SignatureConclusion, ReportError> {
        self.signatures
            .iter()
            .find(|conclusion| conclusion.id == signature_id)
            .ok_or_else(|| ReportError::MissingConclusion(signature_id.to_string()))
    }

    /// Number of signatures concluded `TOTAL_PASSED`.
    pub fn valid_signatures_count(&self) -> usize {
        self.signatures
            .iter()
            .filter(|conclusion| conclusion.indication == Indication::TotalPassed)
            .count()
    }

    /// The engine's native XML tree for this layer.
    pub fn root_element(&self) -> AuditElement {
        let mut root = AuditElement::new("SimpleReport");

        if let Some(policy) = &self.policy_name {
            root = root.with_child(
                AuditElement::new("Policy")
                    .with_child(AuditElement::leaf("PolicyName", policy.as_str())),
            );
        }
        if let Some(time) = &self.validation_time {
            root = root.with_child(AuditElement::leaf("ValidationTime", format_time(time)));
        }
        if let Some(document) = &self.document_name {
            root = root.with_child(AuditElement::leaf("DocumentName", document.as_str()));
        }

        root.with_children(self.signatures.iter().map(|s| AuditNode::from(s.to_node())))
            .with_child(AuditElement::leaf(
                "ValidSignaturesCount",
                self.valid_signatures_count().to_string(),
            ))
            .with_child(AuditElement::leaf(
                "SignaturesCount",
                self.signatures.len().to_string(),
            ))
            .with_children(self.extra_nodes.iter().cloned())
    }
}

fn format_time(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn issues(infos: &[BasicInfo], signature_id: &str) -> Vec<ValidationIssue> {
    infos
        .iter()
        .map(|info| ValidationIssue::for_signature(info.to_string(), signature_id))
        .collect()
}

impl ReportLayer for SimpleReport {
    fn signature_ids(&self) -> Vec<SignatureId> {
        self.signatures.iter().map(|c| c.id.clone()).collect()
    }

    fn errors_for(&self, signature_id: &str) -> Result<Vec<ValidationIssue>, ReportError> {
        Ok(issues(&self.conclusion(signature_id)?.errors, signature_id))
    }

    fn warnings_for(&self, signature_id: &str) -> Result<Vec<ValidationIssue>, ReportError> {
        Ok(issues(&self.conclusion(signature_id)?.warnings, signature_id))
    }

    fn indication_for(&self, signature_id: &str) -> Result<IndicationRecord, ReportError> {
        let conclusion = self.conclusion(signature_id)?;
        Ok(IndicationRecord {
            signature_id: conclusion.id.clone(),
            indication: conclusion.indication,
            sub_indication: conclusion.sub_indication,
            qualification: conclusion.qualification,
        })
    }

    /// Every child of the layer's native root, deep-copied.
    fn audit_fragment_for(
        &self,
        signature_id: &str,
        _config: &ReportConfig,
    ) -> Result<Vec<AuditNode>, ReportError> {
        self.conclusion(signature_id)?;
        Ok(self.root_element().children)
    }
}

/// A provider that exposes reports as a linked list of layers.
pub trait LinkedReports {
    /// The simple report of this layer.
    fn simple_report(&self) -> SimpleReport;

    /// The next (inner) layer, `None` at the end of the chain.
    fn next_reports(&self) -> Option<&Self>;
}

/// Explicit, finite, ordered list of report layers (outermost first).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportChain {
    layers: Vec<SimpleReport>,
}

impl ReportChain {
    pub fn new(layers: Vec<SimpleReport>) -> Self {
        Self { layers }
    }

    /// A chain of exactly one layer.
    pub fn single(layer: SimpleReport) -> Self {
        Self {
            layers: vec![layer],
        }
    }

    /// Eagerly walk a linked provider into an explicit chain.
    ///
    /// # Errors
    /// * `ReportError::ChainTooLong` - more than `MAX_LINKED_LAYERS` layers
    pub fn from_linked<R: LinkedReports>(head: &R) -> Result<Self, ReportError> {
        let mut layers = Vec::new();
        let mut current = Some(head);
        while let Some(reports) = current {
            if layers.len() == MAX_LINKED_LAYERS {
                return Err(ReportError::ChainTooLong {
                    max: MAX_LINKED_LAYERS,
                });
            }
            layers.push(reports.simple_report());
            current = reports.next_reports();
        }
        Ok(Self { layers })
    }

    /// Append an inner layer.
    pub fn push(&mut self, layer: SimpleReport) {
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[SimpleReport] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
