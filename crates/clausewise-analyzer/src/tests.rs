//! Integration tests for the Analyzer

#[cfg(test)]
mod tests {
    use crate::{AnalyzerConfig, AnalyzerError, AskRequest, ContractAnalyzer, MISSING_FIELDS_MESSAGE};
    use clausewise_domain::Severity;
    use clausewise_llm::MockProvider;

    const CONTRACT: &str = "This Lease Agreement is effective March 15, 2024 between Landlord and Tenant.";

    /// Single-page PDF with correct xref offsets, drawing `text` in Helvetica
    fn minimal_pdf(text: &str) -> Vec<u8> {
        let content = format!("BT /F1 12 Tf 72 712 Td ({}) Tj ET", text);
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >>".to_string(),
            format!("<< /Length {} >>\nstream\n{}\nendstream", content.len(), content),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>".to_string(),
        ];

        let mut pdf = String::from("%PDF-1.4\n");
        let mut offsets = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
        }

        let xref_offset = pdf.len();
        pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
        for offset in offsets {
            pdf.push_str(&format!("{:010} 00000 n \n", offset));
        }
        pdf.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        ));
        pdf.into_bytes()
    }

    fn scripted_provider() -> MockProvider {
        let mut llm = MockProvider::default();
        llm.add_response("Summarize this contract", "  A one-year residential lease.  \n");
        llm.add_response(
            "key risks",
            "high: Termination clause is ambiguous\nlow: Minor typo in section 3\nmaybe: irrelevant",
        );
        llm.add_response(
            "Extract important dates",
            "Effective Date: 2024-03-15\nDeadline: 2024-13-40\nno colon here\nTermination Date: 2025-03-14",
        );
        llm
    }

    #[tokio::test]
    async fn test_full_analysis_flow() {
        let llm = scripted_provider();
        let analyzer = ContractAnalyzer::new(llm.clone(), AnalyzerConfig::default());

        let result = analyzer.analyze_text(CONTRACT).await.unwrap();

        assert_eq!(result.summary, "A one-year residential lease.");

        assert_eq!(result.risks.len(), 2);
        assert_eq!(result.risks[0].severity, Severity::High);
        assert_eq!(result.risks[0].description, "Termination clause is ambiguous");
        assert_eq!(result.risks[1].severity, Severity::Low);

        assert_eq!(result.dates.len(), 2);
        assert_eq!(result.dates[0].kind, "Effective Date");
        assert_eq!(result.dates[0].date, "2024-03-15");
        assert_eq!(result.dates[1].date, "2025-03-14");

        assert_eq!(llm.call_count(), 3);
    }

    #[tokio::test]
    async fn test_requests_use_fixed_temperatures_and_model() {
        let llm = scripted_provider();
        let config = AnalyzerConfig {
            model: "gpt-test".to_string(),
            ..AnalyzerConfig::default()
        };
        let analyzer = ContractAnalyzer::new(llm.clone(), config);

        analyzer.analyze_text(CONTRACT).await.unwrap();

        let requests = llm.requests();
        assert!(requests.iter().all(|r| r.model() == "gpt-test"));

        let temperature_of = |needle: &str| {
            requests
                .iter()
                .find(|r| r.user_prompt().contains(needle))
                .map(|r| r.temperature())
                .unwrap()
        };
        assert_eq!(temperature_of("Summarize"), 0.3);
        assert_eq!(temperature_of("key risks"), 0.2);
        assert_eq!(temperature_of("important dates"), 0.1);
    }

    #[tokio::test]
    async fn test_any_gateway_failure_aborts_analysis() {
        let mut llm = MockProvider::default();
        llm.add_response("Summarize this contract", "summary");
        llm.add_response("key risks", "high: x");
        llm.add_error("Extract important dates", "Rate limit exceeded: quota");

        let analyzer = ContractAnalyzer::new(llm, AnalyzerConfig::default());
        let result = analyzer.analyze_text(CONTRACT).await;

        match result {
            Err(AnalyzerError::Gateway(msg)) => assert!(msg.contains("quota")),
            other => panic!("Expected gateway error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_pdf_never_reaches_provider() {
        let llm = scripted_provider();
        let analyzer = ContractAnalyzer::new(llm.clone(), AnalyzerConfig::default());

        let result = analyzer.analyze(b"definitely not a pdf".to_vec()).await;

        assert!(matches!(result, Err(AnalyzerError::Extraction(_))));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_analyze_pdf_document() {
        let llm = scripted_provider();
        let analyzer = ContractAnalyzer::new(llm.clone(), AnalyzerConfig::default());

        let result = analyzer.analyze(minimal_pdf("Lease between Alice and Bob")).await.unwrap();

        assert_eq!(result.risks.len(), 2);
        assert_eq!(llm.call_count(), 3);
        let prompt = llm.requests()[0].user_prompt().to_string();
        assert!(prompt.contains("Lease"), "extracted text should reach the prompt: {:?}", prompt);
    }

    #[tokio::test]
    async fn test_ask_returns_raw_answer() {
        let llm = MockProvider::new("  The tenant pays.\n");
        let analyzer = ContractAnalyzer::new(llm.clone(), AnalyzerConfig::default());

        let answer = analyzer
            .ask(AskRequest::new("Who pays for repairs?", CONTRACT))
            .await
            .unwrap();

        // Answers are passed through untouched
        assert_eq!(answer, "  The tenant pays.\n");
        assert_eq!(llm.call_count(), 1);

        let request = &llm.requests()[0];
        assert_eq!(request.temperature(), 0.3);
        assert_eq!(
            request.user_prompt(),
            format!("Contract text: {}\n\nQuestion: Who pays for repairs?", CONTRACT)
        );
        assert!(request.system_instruction().contains("answers questions about contracts"));
    }

    #[tokio::test]
    async fn test_ask_validation_happens_before_gateway() {
        let llm = MockProvider::default();
        let analyzer = ContractAnalyzer::new(llm.clone(), AnalyzerConfig::default());

        let err = analyzer.ask(AskRequest::new("", "abc")).await.unwrap_err();
        assert!(matches!(err, AnalyzerError::Validation(ref m) if m == MISSING_FIELDS_MESSAGE));

        let err = analyzer
            .ask(AskRequest {
                question: Some("q".to_string()),
                text: None,
            })
            .await
            .unwrap_err();
        assert!(err.is_client_error());

        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_ask_gateway_error() {
        let llm = MockProvider::failing("Authentication failed: bad key");
        let analyzer = ContractAnalyzer::new(llm, AnalyzerConfig::default());

        let err = analyzer.ask(AskRequest::new("q", "t")).await.unwrap_err();
        assert!(matches!(err, AnalyzerError::Gateway(_)));
        assert!(err.to_string().contains("bad key"));
    }

    #[tokio::test]
    async fn test_text_limit_applies_to_prompts() {
        let llm = MockProvider::default();
        let config = AnalyzerConfig {
            max_text_chars: 10,
            ..AnalyzerConfig::default()
        };
        let analyzer = ContractAnalyzer::new(llm.clone(), config);

        analyzer.analyze_text("0123456789ABCDEF").await.unwrap();

        for request in llm.requests() {
            assert!(request.user_prompt().ends_with("0123456789"));
        }
    }
}
