//! # Report Fixtures
//!
//! Report shapes seen from the two validation engines, shared by the
//! integration scenarios and the benchmarks.

use chrono::{DateTime, TimeZone, Utc};
use shared_types::{Indication, SignatureProfile, SignatureQualification, SubIndication};
use sv_02_validation_report::{
    BasicInfo, LegacyIssue, LegacyReport, ReportChain, SignatureConclusion, SimpleReport,
};
use sv_03_signature::{
    LegacySignature, ProductionPlace, SignatureMetadata, SubjectName, X509Cert, XadesSignature,
};

pub const BASELINE_LT: &str = "XAdES-BASELINE-LT";
pub const BASELINE_LTA: &str = "XAdES-BASELINE-LTA";

pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

/// Outer layer of a two-signature BDOC: S1 fails its chain check.
pub fn outer_layer() -> SimpleReport {
    SimpleReport::new()
        .with_policy_name("QES AdESQC TL based")
        .with_validation_time(utc(2016, 3, 11, 9, 45, 0))
        .with_document_name("test.txt")
        .with_signature(
            SignatureConclusion::new("S0", BASELINE_LT, Indication::Indeterminate)
                .with_sub_indication(SubIndication::TryLater)
                .with_signed_by("ESTEID-SK 2011"),
        )
        .with_signature(
            SignatureConclusion::new("S1", BASELINE_LT, Indication::Indeterminate)
                .with_error(
                    BasicInfo::new("The certificate chain for signature is not trusted")
                        .with_name_id("BBB_XCV_CCCBB_SIG_ANS"),
                ),
        )
}

/// Inner layer: refined conclusions, no further errors.
pub fn inner_layer() -> SimpleReport {
    SimpleReport::new()
        .with_signature(
            SignatureConclusion::new("S0", BASELINE_LT, Indication::TotalPassed)
                .with_qualification(SignatureQualification::QeSig)
                .with_signing_time(utc(2016, 3, 11, 9, 41, 7)),
        )
        .with_signature(
            SignatureConclusion::new("S1", BASELINE_LT, Indication::Indeterminate)
                .with_sub_indication(SubIndication::NoCertificateChainFound),
        )
}

/// Single-signature layer concluding S0 as qualified and passed.
pub fn lt_layer() -> SimpleReport {
    SimpleReport::new().with_signature(
        SignatureConclusion::new("S0", BASELINE_LT, Indication::TotalPassed)
            .with_qualification(SignatureQualification::QeSig),
    )
}

pub fn two_layer_chain() -> ReportChain {
    ReportChain::new(vec![outer_layer(), inner_layer()])
}

/// Legacy DDOC report with four coded errors.
pub fn legacy_report_with_four_errors() -> LegacyReport {
    LegacyReport::default()
        .with_error(LegacyIssue::new(79, "Bad digest for DataFile: D0"))
        .with_error(LegacyIssue::new(81, "Invalid signature value!"))
        .with_error(LegacyIssue::new(90, "Signers cert does not have non-repudiation bit set!"))
        .with_error(LegacyIssue::new(91, "Signature has no OCSP confirmation!"))
}

/// A layer of `signatures` conclusions, each carrying `errors_per_signature` errors.
pub fn wide_layer(signatures: usize, errors_per_signature: usize) -> SimpleReport {
    let mut layer = SimpleReport::new();
    for i in 0..signatures {
        let mut conclusion =
            SignatureConclusion::new(format!("S{i}"), BASELINE_LTA, Indication::TotalPassed);
        for e in 0..errors_per_signature {
            conclusion = conclusion.with_error(BasicInfo::new(format!("error {e} <&>")));
        }
        layer = layer.with_signature(conclusion);
    }
    layer
}

pub fn signer_certificate() -> X509Cert {
    X509Cert::new(vec![0x30, 0x82, 0x04, 0xb2, 0x30, 0x82])
        .with_subject(SubjectName::SerialNumber, "38211015222")
        .with_subject(SubjectName::GivenName, "MARY ÄNN")
        .with_subject(SubjectName::Surname, "O’CONNEŽ-ŠUSLIK")
        .with_subject(SubjectName::CommonName, "O’CONNEŽ-ŠUSLIK,MARY ÄNN,38211015222")
        .with_subject(SubjectName::Country, "EE")
}

/// Two signatures of one BDOC, both carrying the container's report chain.
pub fn two_signature_container_members() -> Vec<XadesSignature> {
    ["S0", "S1"]
        .into_iter()
        .map(|id| {
            let metadata = SignatureMetadata::new(id, SignatureProfile::Lt)
                .with_timestamp(None, utc(2016, 3, 11, 9, 41, 7));
            XadesSignature::new(metadata, two_layer_chain())
        })
        .collect()
}

/// A time-stamped BDOC signature.
pub fn lt_signature() -> XadesSignature {
    let metadata = SignatureMetadata::new("S0", SignatureProfile::Lt)
        .with_claimed_signing_time(utc(2016, 3, 11, 9, 41, 0))
        .with_signature_method("http://www.w3.org/2001/04/xmldsig-more#ecdsa-sha256")
        .with_signing_certificate(signer_certificate())
        .with_timestamp(None, utc(2016, 3, 11, 9, 41, 7))
        .with_ocsp_response(None, utc(2016, 3, 11, 9, 41, 9))
        .with_signer_role("Direktorius")
        .with_production_place(ProductionPlace::new("Tallinn", "Harjumaa", "13456", "Estonia"));
    XadesSignature::with_report(metadata, lt_layer())
}

/// A time-marked DDOC signature.
pub fn time_mark_signature(report: LegacyReport) -> LegacySignature {
    let metadata = SignatureMetadata::new("S0", SignatureProfile::LtTm)
        .with_claimed_signing_time(utc(2014, 7, 2, 8, 1, 20))
        .with_ocsp_response(None, utc(2014, 7, 2, 8, 1, 31))
        .with_ocsp_nonce(vec![0x04, 0x10, 0x5d, 0x3e]);
    LegacySignature::new(metadata, report)
}
