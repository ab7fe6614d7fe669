//! Human and JSON renderings of a validation result.

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;
use sv_02_validation_report::{ValidationResult, ValidationResultApi, ValidationSummary};

/// Trusted signing time per signature id; only known for container input.
pub type TrustedTimes = BTreeMap<String, Option<DateTime<Utc>>>;

#[derive(Serialize)]
struct JsonOutput {
    #[serde(flatten)]
    summary: ValidationSummary,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    trusted_signing_times: TrustedTimes,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<String>,
}

pub fn render_json(
    result: &ValidationResult,
    trusted_times: &TrustedTimes,
    with_report: bool,
) -> Result<String> {
    let output = JsonOutput {
        summary: result.summary(),
        trusted_signing_times: trusted_times.clone(),
        report: with_report.then(|| result.report()),
    };
    serde_json::to_string_pretty(&output).context("Failed to serialize summary")
}

pub fn render_text(
    result: &ValidationResult,
    trusted_times: &TrustedTimes,
    with_report: bool,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Signatures: {}", result.signature_ids().len());
    for id in result.signature_ids() {
        let Some(record) = result.indication_record(Some(id.as_str())) else {
            continue;
        };
        let _ = write!(out, "  {id}: {}", record.indication);
        if let Some(sub_indication) = record.sub_indication {
            let _ = write!(out, " / {sub_indication}");
        }
        let _ = write!(out, " (qualification: {})", record.qualification.label());
        if let Some(time) = trusted_times.get(id.as_str()) {
            match time {
                Some(time) => {
                    let _ = write!(
                        out,
                        " trusted time: {}",
                        time.to_rfc3339_opts(SecondsFormat::Secs, true)
                    );
                }
                None => out.push_str(" trusted time: none"),
            }
        }
        out.push('\n');
    }

    let _ = writeln!(out, "Errors: {}", result.errors().len());
    for issue in result.errors() {
        let _ = writeln!(out, "  [{}] {}", issue.signature_id.as_deref().unwrap_or("-"), issue);
    }
    let _ = writeln!(out, "Warnings: {}", result.warnings().len());
    for issue in result.warnings() {
        let _ = writeln!(out, "  [{}] {}", issue.signature_id.as_deref().unwrap_or("-"), issue);
    }
    let _ = writeln!(out, "Valid: {}", result.is_valid());

    if with_report {
        out.push('\n');
        out.push_str(&result.report());
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }

    out
}
