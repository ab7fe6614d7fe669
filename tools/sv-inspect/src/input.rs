//! Input documents accepted by the inspector.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use sv_02_validation_report::{LegacyReport, ReportChain, ReportConfig};
use sv_03_signature::{LegacySignature, SignatureService, XadesSignature};

/// Shape of the input JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Array of simple reports, outermost layer first
    Chain,
    /// A single legacy DigiDoc report
    Legacy,
    /// A container: `{"signatures": [...]}` with a `backend` tag per signature
    Container,
}

/// One signature of a container document.
#[derive(Debug, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum SignatureInput {
    Xades(XadesSignature),
    Legacy(LegacySignature),
}

#[derive(Debug, Deserialize)]
pub struct ContainerInput {
    pub signatures: Vec<SignatureInput>,
}

/// A parsed input document.
#[derive(Debug)]
pub enum Document {
    Chain(ReportChain),
    Legacy(LegacyReport),
    Container(ContainerInput),
}

impl Document {
    pub fn parse(json: &str, format: InputFormat) -> Result<Self> {
        let document = match format {
            InputFormat::Chain => Document::Chain(
                serde_json::from_str(json).context("Failed to parse report chain")?,
            ),
            InputFormat::Legacy => Document::Legacy(
                serde_json::from_str(json).context("Failed to parse legacy report")?,
            ),
            InputFormat::Container => Document::Container(
                serde_json::from_str(json).context("Failed to parse container")?,
            ),
        };
        Ok(document)
    }
}

impl ContainerInput {
    /// Load every signature into a service.
    pub fn into_service(self, service: &mut SignatureService) -> Result<()> {
        for signature in self.signatures {
            match signature {
                SignatureInput::Xades(s) => service.add(Box::new(s))?,
                SignatureInput::Legacy(s) => {
                    service.add(Box::new(LegacySignature::new(s.metadata, s.report)))?
                }
            }
        }
        Ok(())
    }
}

/// Read a file, or stdin when `path` is `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

/// Load and validate a report configuration file.
pub fn load_config(path: Option<&Path>) -> Result<ReportConfig> {
    match path {
        Some(path) => {
            let json = read_source(path)?;
            ReportConfig::from_json_str(&json)
                .with_context(|| format!("Invalid report configuration in {}", path.display()))
        }
        None => Ok(ReportConfig::default()),
    }
}
