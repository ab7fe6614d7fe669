//! # Trusted Signing Time Scenarios
//!
//! The trusted time depends only on the profile and the evidence embedded
//! in the signature, never on the signer's claimed time.

#[cfg(test)]
mod tests {
    use crate::fixtures::{lt_signature, time_mark_signature, utc};
    use shared_types::SignatureProfile;
    use sv_01_trust_time::{
        resolve_trusted_signing_time, trust_time_source, TimeEvidence, TrustTimeSource,
    };
    use sv_02_validation_report::{LegacyReport, ReportChain};
    use sv_03_signature::{Signature, SignatureMetadata, XadesSignature};

    fn full_evidence() -> TimeEvidence {
        TimeEvidence::none()
            .with_ocsp_response(utc(2016, 3, 11, 9, 41, 9))
            .with_timestamp(utc(2016, 3, 11, 9, 41, 7))
    }

    /// Test: the decision table, row by row
    #[test]
    fn test_decision_table() {
        let evidence = full_evidence();

        assert_eq!(resolve_trusted_signing_time(SignatureProfile::BBes, &evidence), None);
        assert_eq!(
            resolve_trusted_signing_time(SignatureProfile::LtTm, &evidence),
            Some(utc(2016, 3, 11, 9, 41, 9))
        );
        assert_eq!(
            resolve_trusted_signing_time(SignatureProfile::Lt, &evidence),
            Some(utc(2016, 3, 11, 9, 41, 7))
        );
        assert_eq!(
            resolve_trusted_signing_time(SignatureProfile::Lta, &evidence),
            Some(utc(2016, 3, 11, 9, 41, 7))
        );
        assert_eq!(trust_time_source(SignatureProfile::Lta), TrustTimeSource::TimestampToken);
    }

    /// Test: LT signature through the facade uses the timestamp
    #[test]
    fn test_lt_signature_uses_timestamp() {
        let signature = lt_signature();
        assert_eq!(signature.trusted_signing_time(), Some(utc(2016, 3, 11, 9, 41, 7)));
        assert_eq!(signature.claimed_signing_time(), Some(utc(2016, 3, 11, 9, 41, 0)));
    }

    /// Test: LT_TM signature through the facade uses the OCSP response
    #[test]
    fn test_time_mark_signature_uses_ocsp() {
        let signature = time_mark_signature(LegacyReport::default());
        assert_eq!(signature.trusted_signing_time(), Some(utc(2014, 7, 2, 8, 1, 31)));
        assert_eq!(signature.ocsp_nonce(), Some(&[0x04, 0x10, 0x5d, 0x3e][..]));
    }

    /// Test: B_BES never has a trusted time, even with a timestamp present
    #[test]
    fn test_b_bes_has_no_trusted_time() {
        let metadata = SignatureMetadata::new("S0", SignatureProfile::BBes)
            .with_timestamp(None, utc(2016, 3, 11, 9, 41, 7));
        let signature = XadesSignature::new(metadata, ReportChain::default());
        assert_eq!(signature.trusted_signing_time(), None);
    }

    /// Test: LTA awaiting its archive timestamp has no trusted time
    #[test]
    fn test_missing_evidence_is_not_an_error() {
        let signature = XadesSignature::new(
            SignatureMetadata::new("S0", SignatureProfile::Lta)
                .with_ocsp_response(None, utc(2016, 3, 11, 9, 41, 9)),
            ReportChain::default(),
        );
        assert_eq!(signature.trusted_signing_time(), None);
    }
}
