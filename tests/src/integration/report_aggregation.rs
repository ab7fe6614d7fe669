//! # Report Aggregation Scenarios
//!
//! Engine reports in, one `ValidationResult` out:
//!
//! 1. **Layered XAdES chain**: issues accumulate, inner conclusions win
//! 2. **Legacy report**: coded errors become issues one-to-one
//! 3. **Empty container**: lookups yield nothing, report is a bare root
//! 4. **Malformed input**: aggregation fails as a whole

#[cfg(test)]
mod tests {
    use crate::fixtures::{
        inner_layer, legacy_report_with_four_errors, outer_layer, two_layer_chain, wide_layer,
    };
    use proptest::prelude::*;
    use shared_types::{Indication, SignatureQualification, SubIndication};
    use sv_02_validation_report::{
        Aggregator, LinkedReports, ReportChain, ReportConfig, ReportError, SignatureConclusion,
        SimpleReport, ValidationResult, ValidationResultApi,
    };

    // =============================================================================
    // LAYERED CHAIN
    // =============================================================================

    /// Test: two layers, S1 failed its chain in the outer layer
    #[test]
    fn test_two_layer_chain_indications() {
        let result = ValidationResult::from_layers(two_layer_chain().layers()).unwrap();

        assert_eq!(result.errors().len(), 1);
        assert!(!result.is_valid());
        assert_eq!(result.indication(Some("S0")), Some(Indication::TotalPassed));
        assert_eq!(result.indication(Some("S1")), Some(Indication::Indeterminate));
        assert_eq!(
            result.sub_indication(Some("S1")),
            Some(SubIndication::NoCertificateChainFound)
        );
        assert_eq!(result.indication(None), Some(Indication::TotalPassed));
        assert_eq!(result.qualification(None), Some(SignatureQualification::QeSig));
    }

    /// Test: error messages are the engine's string form of each entry
    #[test]
    fn test_error_message_is_engine_string_form() {
        let result = ValidationResult::from_layers(two_layer_chain().layers()).unwrap();
        let error = &result.errors()[0];

        assert_eq!(
            error.message,
            "BBB_XCV_CCCBB_SIG_ANS: The certificate chain for signature is not trusted"
        );
        assert_eq!(error.signature_id.as_deref(), Some("S1"));
        assert_eq!(result.errors_for("S0").len(), 0);
    }

    /// Test: report contains the per-signature engine fragments
    #[test]
    fn test_report_literals() {
        let report = ValidationResult::from_layers(two_layer_chain().layers())
            .unwrap()
            .report();

        assert!(report.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?><ValidationReport>"));
        assert!(report.contains("Id=\"S0\" SignatureFormat=\"XAdES-BASELINE-LT\""));
        assert!(report.contains("<Indication>TOTAL_PASSED</Indication>"));
        assert!(report.contains("<SubIndication>NO_CERTIFICATE_CHAIN_FOUND</SubIndication>"));
        assert!(report.contains("<SignatureLevel>QESIG</SignatureLevel>"));
        assert!(report.contains("<DocumentName>test.txt</DocumentName>"));
        assert!(report.ends_with("</ValidationReport>"));
    }

    /// Test: same input, byte-identical report
    #[test]
    fn test_report_is_deterministic() {
        let chain = two_layer_chain();
        let first = ValidationResult::from_layers(chain.layers()).unwrap().report();
        let second = ValidationResult::from_layers(chain.layers()).unwrap().report();
        assert_eq!(first, second);
    }

    /// Test: pretty printing through configuration
    #[test]
    fn test_indented_report() {
        let config = ReportConfig::from_json_str(r#"{"indent": 2}"#).unwrap();
        let report = ValidationResult::from_layers_with_config(two_layer_chain().layers(), config)
            .unwrap()
            .report();

        assert!(report.contains("\n  <SignatureValidation ID=\"S0\">\n"));
        assert!(report.ends_with("</ValidationReport>\n"));
    }

    /// Test: layers from a linked provider, walked eagerly
    #[test]
    fn test_linked_provider() {
        struct Linked {
            report: SimpleReport,
            next: Option<Box<Linked>>,
        }

        impl LinkedReports for Linked {
            fn simple_report(&self) -> SimpleReport {
                self.report.clone()
            }

            fn next_reports(&self) -> Option<&Self> {
                self.next.as_deref()
            }
        }

        let head = Linked {
            report: outer_layer(),
            next: Some(Box::new(Linked {
                report: inner_layer(),
                next: None,
            })),
        };
        let chain = ReportChain::from_linked(&head).unwrap();
        assert_eq!(chain, two_layer_chain());
    }

    // =============================================================================
    // LEGACY ENGINE
    // =============================================================================

    /// Test: four native errors, four issues, same order and text
    #[test]
    fn test_legacy_four_errors() {
        let report = legacy_report_with_four_errors();
        let result = ValidationResult::from_layers(std::slice::from_ref(&report)).unwrap();

        assert_eq!(result.errors().len(), 4);
        let messages: Vec<_> = result.errors().iter().map(|e| e.message.clone()).collect();
        let native: Vec<_> = report.errors.iter().map(ToString::to_string).collect();
        assert_eq!(messages, native);
        assert_eq!(result.indication(None), Some(Indication::TotalFailed));
        assert_eq!(result.qualification(None), Some(SignatureQualification::Na));
    }

    // =============================================================================
    // EMPTY AND MALFORMED INPUT
    // =============================================================================

    /// Test: zero signatures, no failure anywhere
    #[test]
    fn test_zero_signatures() {
        let result = ValidationResult::from_layers(ReportChain::single(SimpleReport::new()).layers())
            .unwrap();

        assert!(result.errors().is_empty());
        assert!(result.warnings().is_empty());
        assert!(result.is_valid());
        assert_eq!(result.indication(None), None);
        assert_eq!(result.sub_indication(None), None);
        assert_eq!(result.qualification(None), None);
        assert_eq!(
            result.report(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><ValidationReport/>"
        );
    }

    /// Test: duplicate id in a layer rejects the whole chain
    #[test]
    fn test_duplicate_id_rejected() {
        let broken = inner_layer()
            .with_signature(SignatureConclusion::new("S1", "XAdES-BASELINE-B", Indication::Failed));
        let chain = ReportChain::new(vec![outer_layer(), broken]);

        let aggregator = Aggregator::default();
        let error = aggregator.aggregate(chain.layers()).unwrap_err();
        assert_eq!(
            error,
            ReportError::Layer {
                layer: 1,
                source: Box::new(ReportError::DuplicateSignatureId("S1".to_string())),
            }
        );
        assert_eq!(aggregator.metrics().snapshot().aggregations_failed, 1);
    }

    /// Test: issue counts scale with the input
    #[test]
    fn test_wide_layer_counts() {
        let aggregator = Aggregator::default();
        let result = aggregator
            .aggregate(ReportChain::single(wide_layer(50, 2)).layers())
            .unwrap();

        assert_eq!(result.signature_ids().len(), 50);
        assert_eq!(result.errors().len(), 100);
        assert_eq!(result.errors_for("S49").len(), 2);
        let snapshot = aggregator.metrics().snapshot();
        assert_eq!(snapshot.signatures_seen, 50);
        assert_eq!(snapshot.errors_collected, 100);
    }

    proptest! {
        /// Validity never depends on warnings.
        #[test]
        fn prop_validity_is_absence_of_errors(signatures in 0usize..8, errors in 0usize..3) {
            let chain = ReportChain::single(wide_layer(signatures, errors));
            let result = ValidationResult::from_layers(chain.layers()).unwrap();
            prop_assert_eq!(result.is_valid(), !result.has_errors());
            prop_assert_eq!(result.is_valid(), signatures == 0 || errors == 0);
        }
    }
}
