//! Report aggregation configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use sv_02_validation_report::ReportConfig;
//!
//! let config = ReportConfig::default()
//!     .with_indent(Some(2))
//!     .with_xml_declaration(false);
//! config.validate()?;
//! ```

use super::audit::{ensure_xml_name, RenderOptions};
use super::errors::ReportError;
use serde::{Deserialize, Serialize};

/// Widest pretty-print indent accepted by `validate`.
pub const MAX_INDENT: usize = 16;

/// Shape and formatting of the aggregated audit document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Name of the document root
    pub root_element: String,
    /// Name of each per-signature sub-tree
    pub signature_element: String,
    /// Attribute carrying the signature id on the sub-tree
    pub signature_id_attribute: String,
    /// Emit the XML declaration
    pub xml_declaration: bool,
    /// Pretty-print indent, compact output when `None`
    pub indent: Option<usize>,
    /// `SignatureFormat` written into legacy report fragments
    pub legacy_signature_format: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            root_element: "ValidationReport".to_string(),
            signature_element: "SignatureValidation".to_string(),
            signature_id_attribute: "ID".to_string(),
            xml_declaration: true,
            indent: None,
            legacy_signature_format: "DIGIDOC_XML_1.3".to_string(),
        }
    }
}

impl ReportConfig {
    /// Parse a JSON configuration and validate it.
    ///
    /// Missing fields take their default value.
    pub fn from_json_str(json: &str) -> Result<Self, ReportError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ReportError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate names and formatting options
    pub fn validate(&self) -> Result<(), ReportError> {
        ensure_xml_name(&self.root_element)?;
        ensure_xml_name(&self.signature_element)?;
        ensure_xml_name(&self.signature_id_attribute)?;

        if let Some(indent) = self.indent {
            if indent > MAX_INDENT {
                return Err(ReportError::InvalidConfig(format!(
                    "indent must be at most {MAX_INDENT}, got {indent}"
                )));
            }
        }

        if self.legacy_signature_format.trim().is_empty() {
            return Err(ReportError::InvalidConfig(
                "legacy_signature_format cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Builder-style method to set the root element name
    pub fn with_root_element(mut self, name: impl Into<String>) -> Self {
        self.root_element = name.into();
        self
    }

    /// Builder-style method to set the per-signature element name
    pub fn with_signature_element(mut self, name: impl Into<String>) -> Self {
        self.signature_element = name.into();
        self
    }

    /// Builder-style method to toggle the XML declaration
    pub fn with_xml_declaration(mut self, enabled: bool) -> Self {
        self.xml_declaration = enabled;
        self
    }

    /// Builder-style method to set the indent
    pub fn with_indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    /// Builder-style method to set the legacy signature format label
    pub fn with_legacy_signature_format(mut self, format: impl Into<String>) -> Self {
        self.legacy_signature_format = format.into();
        self
    }

    pub(crate) fn render_options(&self) -> RenderOptions {
        RenderOptions {
            xml_declaration: self.xml_declaration,
            indent: self.indent,
        }
    }
}
