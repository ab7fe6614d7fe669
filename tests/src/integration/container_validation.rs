//! # Container Validation Scenarios
//!
//! Several signatures of one container, validated one by one and as a whole
//! through `SignatureService`.

#[cfg(test)]
mod tests {
    use crate::fixtures::{
        legacy_report_with_four_errors, lt_signature, signer_certificate, time_mark_signature,
        two_signature_container_members,
    };
    use shared_types::{Indication, SignatureProfile, SubIndication};
    use sv_02_validation_report::{Aggregator, ReportConfig, ValidationResultApi};
    use sv_03_signature::{
        LegacySignature, Signature, SignatureError, SignatureMetadata, SignatureService,
        SubjectName,
    };

    fn bdoc_container() -> SignatureService {
        let mut service = SignatureService::default();
        for signature in two_signature_container_members() {
            service.add(Box::new(signature)).unwrap();
        }
        service
    }

    /// Test: two signatures, one invalid, sharing one report chain
    #[test]
    fn test_two_signatures_one_invalid() {
        let service = bdoc_container();

        let first = service.validate("S0").unwrap();
        assert!(first.errors().is_empty());
        assert_eq!(first.signature_ids(), &["S0"]);
        assert_eq!(first.indication(None), Some(Indication::TotalPassed));

        let second = service.validate("S1").unwrap();
        assert_eq!(second.errors().len(), 1);
        assert_eq!(second.indication(None), Some(Indication::Indeterminate));
        assert_eq!(
            second.sub_indication(None),
            Some(SubIndication::NoCertificateChainFound)
        );

        let container = service.validate_all().unwrap();
        assert_eq!(container.errors().len(), 1);
        let report = container.report();
        assert!(report.contains("Id=\"S0\" SignatureFormat=\"XAdES-BASELINE-LT\""));
        assert!(report.contains("Id=\"S1\" SignatureFormat=\"XAdES-BASELINE-LT\""));
        assert!(report.contains("<Indication>TOTAL_PASSED</Indication>"));
        assert!(report.contains("<Indication>INDETERMINATE</Indication>"));
    }

    /// Test: metadata is exposed unchanged
    #[test]
    fn test_signature_metadata() {
        let signature = lt_signature();
        let metadata = signature.metadata();

        assert_eq!(signature.id(), "S0");
        assert_eq!(signature.profile(), SignatureProfile::Lt);
        assert_eq!(metadata.signer_roles, vec!["Direktorius".to_string()]);
        assert_eq!(metadata.production_place.city, "Tallinn");
        assert_eq!(metadata.production_place.country_name, "Estonia");

        let cert = signature.signing_certificate().unwrap();
        assert_eq!(cert, &signer_certificate());
        assert_eq!(cert.subject_name(SubjectName::SerialNumber), Some("38211015222"));
        assert_eq!(cert.subject_name(SubjectName::OrganizationalUnit), None);
    }

    /// Test: mixed-backend container, results concatenated in signature order
    #[test]
    fn test_mixed_container() {
        let mut service = SignatureService::default();
        service.add(Box::new(lt_signature())).unwrap();
        service
            .add(Box::new(LegacySignature::new(
                SignatureMetadata::new("S1", SignatureProfile::LtTm),
                legacy_report_with_four_errors(),
            )))
            .unwrap();

        let result = service.validate_all().unwrap();
        assert_eq!(result.signature_ids(), &["S0", "S1"]);
        assert_eq!(result.errors().len(), 4);
        assert!(result.errors().iter().all(|e| e.signature_id.as_deref() == Some("S1")));
        assert_eq!(result.indication(Some("S0")), Some(Indication::TotalPassed));
        assert_eq!(result.indication(Some("S1")), Some(Indication::TotalFailed));
        assert_eq!(result.primary_signature_id(), Some("S0"));
    }

    /// Test: legacy signature keeps its own id on every issue
    #[test]
    fn test_legacy_signature_rekeys_report() {
        let mut signature = time_mark_signature(legacy_report_with_four_errors());
        signature.metadata.id = "S3".to_string();
        let signature = LegacySignature::new(signature.metadata, signature.report);

        let result = signature.validate_signature().unwrap();
        assert_eq!(result.signature_ids(), &["S3"]);
        assert_eq!(result.errors_for("S3").len(), 4);
    }

    /// Test: the service's aggregator configuration shapes every report
    #[test]
    fn test_service_config() {
        let config = ReportConfig::default()
            .with_root_element("ContainerValidation")
            .with_xml_declaration(false);
        let mut service = SignatureService::new(Aggregator::new(config).unwrap());
        service.add(Box::new(lt_signature())).unwrap();

        let report = service.validate_all().unwrap().report();
        assert!(report.starts_with("<ContainerValidation><SignatureValidation ID=\"S0\">"));
    }

    /// Test: unknown and duplicate ids
    #[test]
    fn test_lookup_errors() {
        let mut service = bdoc_container();
        assert_eq!(
            service.validate("S9").err(),
            Some(SignatureError::UnknownSignature("S9".to_string()))
        );
        assert_eq!(
            service.add(Box::new(lt_signature())),
            Err(SignatureError::DuplicateSignature("S0".to_string()))
        );
    }
}
