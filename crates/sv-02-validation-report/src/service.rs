//! # Validation Result Aggregator
//!
//! Application service that walks a finite sequence of report layers and
//! freezes the outcome into one `ValidationResult`.
//!
//! ## Algorithm
//!
//! For each layer, outermost first, and for each signature id of the layer
//! in report order:
//! 1. append the signature's errors and warnings to the cumulative lists
//! 2. insert its `IndicationRecord`; a later layer replaces an earlier
//!    record for the same id (inner layers carry refined conclusions)
//! 3. append a per-signature sub-tree holding a deep copy of the layer's
//!    native audit nodes
//!
//! Any contract violation aborts the whole aggregation. A partially built
//! result is never returned.

use crate::domain::{
    AuditDocument, AuditElement, AuditNode, IndicationRecord, ReportConfig, ReportError,
    ValidationIssue, ValidationResult,
};
use crate::metrics::{AggregationMetrics, RunCounts};
use crate::ports::ReportLayer;
use shared_types::SignatureId;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Aggregates report layers into immutable `ValidationResult`s.
///
/// Holds only configuration and counters, so one aggregator can be shared
/// across threads; every call builds an independent result.
#[derive(Debug, Clone)]
pub struct Aggregator {
    config: ReportConfig,
    metrics: Arc<AggregationMetrics>,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self {
            config: ReportConfig::default(),
            metrics: Arc::new(AggregationMetrics::new()),
        }
    }
}

impl Aggregator {
    /// Create an aggregator with a validated configuration.
    pub fn new(config: ReportConfig) -> Result<Self, ReportError> {
        Self::with_metrics(config, Arc::new(AggregationMetrics::new()))
    }

    /// Create an aggregator that records into shared metrics.
    pub fn with_metrics(
        config: ReportConfig,
        metrics: Arc<AggregationMetrics>,
    ) -> Result<Self, ReportError> {
        config.validate()?;
        Ok(Self { config, metrics })
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Arc<AggregationMetrics> {
        &self.metrics
    }

    /// Aggregate `layers` (outermost first) into one result.
    ///
    /// # Errors
    /// * `ReportError::Layer` - a layer violated the report contract; the
    ///   wrapped error names the violation
    pub fn aggregate<'a, L, I>(&self, layers: I) -> Result<ValidationResult, ReportError>
    where
        L: ReportLayer + ?Sized + 'a,
        I: IntoIterator<Item = &'a L>,
    {
        match self.build(layers) {
            Ok((result, run)) => {
                self.metrics.record_completed(&run);
                info!(
                    signatures = result.signature_order.len(),
                    errors = result.errors.len(),
                    warnings = result.warnings.len(),
                    "Validation result aggregated"
                );
                Ok(result)
            }
            Err(error) => {
                self.metrics.record_failed();
                warn!(error = %error, "Rejected malformed validation report");
                Err(error)
            }
        }
    }

    fn build<'a, L, I>(&self, layers: I) -> Result<(ValidationResult, RunCounts), ReportError>
    where
        L: ReportLayer + ?Sized + 'a,
        I: IntoIterator<Item = &'a L>,
    {
        let mut builder = ResultBuilder::new(&self.config);
        for (index, layer) in layers.into_iter().enumerate() {
            self.absorb_layer(&mut builder, layer, index)
                .map_err(|e| e.in_layer(index))?;
        }
        let run = builder.run;
        Ok((builder.freeze(&self.config)?, run))
    }

    fn absorb_layer<L>(
        &self,
        builder: &mut ResultBuilder,
        layer: &L,
        index: usize,
    ) -> Result<(), ReportError>
    where
        L: ReportLayer + ?Sized,
    {
        let signature_ids = layer.signature_ids();
        ensure_distinct(&signature_ids)?;

        debug!(layer = index, signatures = signature_ids.len(), "Processing report layer");
        builder.run.layer(signature_ids.len());

        for signature_id in &signature_ids {
            let errors = layer.errors_for(signature_id)?;
            let warnings = layer.warnings_for(signature_id)?;
            let record = layer.indication_for(signature_id)?;
            let fragment = layer.audit_fragment_for(signature_id, &self.config)?;
            for node in &fragment {
                if let AuditNode::Element(element) = node {
                    element.validate_names()?;
                }
            }

            for error in &errors {
                debug!(signature_id = %signature_id, message = %error, "Validation error");
            }
            for warning in &warnings {
                debug!(signature_id = %signature_id, message = %warning, "Validation warning");
            }
            builder.run.issues(errors.len(), warnings.len());

            builder.errors.extend(errors);
            builder.warnings.extend(warnings);
            if builder.insert_record(signature_id, record) {
                builder.run.overwrites += 1;
                debug!(
                    signature_id = %signature_id,
                    layer = index,
                    "Indication replaced by inner layer"
                );
            }
            builder.append_audit(&self.config, signature_id, fragment);
        }
        Ok(())
    }
}

fn ensure_distinct(signature_ids: &[SignatureId]) -> Result<(), ReportError> {
    let mut seen = HashSet::with_capacity(signature_ids.len());
    for id in signature_ids {
        if id.is_empty() {
            return Err(ReportError::EmptySignatureId);
        }
        if !seen.insert(id.as_str()) {
            return Err(ReportError::DuplicateSignatureId(id.clone()));
        }
    }
    Ok(())
}

/// Mutable state of one aggregation run. Never escapes `Aggregator::build`.
struct ResultBuilder {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
    signature_order: Vec<SignatureId>,
    indications: HashMap<SignatureId, IndicationRecord>,
    root: AuditElement,
    run: RunCounts,
}

impl ResultBuilder {
    fn new(config: &ReportConfig) -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            signature_order: Vec::new(),
            indications: HashMap::new(),
            root: AuditElement::new(config.root_element.as_str()),
            run: RunCounts::default(),
        }
    }

    /// Returns `true` when an earlier record was replaced.
    fn insert_record(&mut self, signature_id: &str, record: IndicationRecord) -> bool {
        let replaced = self
            .indications
            .insert(signature_id.to_string(), record)
            .is_some();
        if !replaced {
            self.signature_order.push(signature_id.to_string());
        }
        replaced
    }

    fn append_audit(&mut self, config: &ReportConfig, signature_id: &str, fragment: Vec<AuditNode>) {
        let subtree = AuditElement::new(config.signature_element.as_str())
            .with_attribute(config.signature_id_attribute.as_str(), signature_id)
            .with_children(fragment);
        self.root.children.push(subtree.into());
    }

    fn freeze(self, config: &ReportConfig) -> Result<ValidationResult, ReportError> {
        Ok(ValidationResult {
            errors: self.errors,
            warnings: self.warnings,
            signature_order: self.signature_order,
            indications: self.indications,
            audit: AuditDocument::new(self.root, config.render_options())?,
        })
    }
}

impl ValidationResult {
    /// Aggregate `layers` with the default configuration.
    pub fn from_layers<'a, L, I>(layers: I) -> Result<Self, ReportError>
    where
        L: ReportLayer + ?Sized + 'a,
        I: IntoIterator<Item = &'a L>,
    {
        Aggregator::default().aggregate(layers)
    }

    /// Aggregate `layers` with an explicit configuration.
    pub fn from_layers_with_config<'a, L, I>(
        layers: I,
        config: ReportConfig,
    ) -> Result<Self, ReportError>
    where
        L: ReportLayer + ?Sized + 'a,
        I: IntoIterator<Item = &'a L>,
    {
        Aggregator::new(config)?.aggregate(layers)
    }
}
