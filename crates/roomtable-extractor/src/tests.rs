//! Integration tests for the extraction pipeline

#[cfg(test)]
mod tests {
    use crate::{Pipeline, PipelineConfig, PipelineError};
    use roomtable_domain::{FieldKind, ROOM_FIELDS};
    use roomtable_llm::{BackendRegistry, Credentials, MockProvider};
    use serde_json::{json, Map, Value};
    use std::time::Duration;

    fn filled_room() -> Value {
        let mut fields = Map::new();
        for (name, kind) in ROOM_FIELDS {
            let value = match kind {
                FieldKind::Text => json!("x"),
                FieldKind::Integer => json!(1),
                FieldKind::Number => json!(1.0),
                FieldKind::Flag => json!(true),
            };
            fields.insert((*name).to_string(), value);
        }
        Value::Object(fields)
    }

    fn pipeline_with(
        provider: MockProvider,
        context_limit: usize,
        config: PipelineConfig,
    ) -> Pipeline<MockProvider> {
        Pipeline::new(provider, "Mock", context_limit, config).unwrap()
    }

    #[tokio::test]
    async fn test_full_extraction_flow() {
        let mut room = filled_room();
        room.as_object_mut()
            .unwrap()
            .insert("property".to_string(), json!("Airlie Beach Cabin"));
        let provider = MockProvider::new("Cabin 1 sleeps 4, $165 per night. ")
            .with_table_response(json!({ "rooms": [room] }).to_string());

        let pipeline = pipeline_with(provider.clone(), 1000, PipelineConfig::default());
        let text = "Room A: Queen bed, $100/night\nRoom B: King bed, $150/night";

        let outcome = pipeline.extract(text).await.unwrap();

        assert_eq!(outcome.table.len(), 1);
        assert_eq!(outcome.table.rooms[0].property, "Airlie Beach Cabin");
        assert_eq!(outcome.metadata.chunk_count, 1);
        assert_eq!(outcome.metadata.backend_id, "Mock");
        assert_eq!(outcome.condensed_text, "Cabin 1 sleeps 4, $165 per night. ");
        assert_eq!(provider.complete_call_count(), 1);
        assert_eq!(provider.structured_call_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_backend_fails_before_any_call() {
        let result = Pipeline::for_backend(
            "Unknown-Model",
            &BackendRegistry::default(),
            &Credentials::default(),
            PipelineConfig::default(),
        );

        match result {
            Err(PipelineError::UnknownBackend(id)) => assert_eq!(id, "Unknown-Model"),
            other => panic!("Expected UnknownBackend, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_missing_credentials_is_configuration_error() {
        let result = Pipeline::for_backend(
            "OpenAI-GPT4",
            &BackendRegistry::default(),
            &Credentials::default(),
            PipelineConfig::default(),
        );

        assert!(matches!(result, Err(PipelineError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_empty_document_skips_backends() {
        let provider = MockProvider::default();
        let pipeline = pipeline_with(provider.clone(), 1000, PipelineConfig::default());

        let outcome = pipeline.extract("").await.unwrap();

        assert!(outcome.table.is_empty());
        assert!(outcome.condensed_text.is_empty());
        assert_eq!(outcome.metadata.chunk_count, 0);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_whitespace_document_skips_backends() {
        let provider = MockProvider::default();
        let pipeline = pipeline_with(provider.clone(), 1000, PipelineConfig::default());

        let outcome = pipeline.extract("\n  \n").await.unwrap();

        assert!(outcome.table.is_empty());
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_zero_rooms_is_a_valid_outcome() {
        let provider = MockProvider::new("Nothing about lodging here.");
        let pipeline = pipeline_with(provider, 1000, PipelineConfig::default());

        let outcome = pipeline.extract("Quarterly revenue was up 4%.").await.unwrap();

        assert!(outcome.table.is_empty());
        assert_eq!(outcome.metadata.chunk_count, 1);
    }

    #[tokio::test]
    async fn test_missing_required_field_is_validation_error() {
        let mut room = filled_room();
        room.as_object_mut().unwrap().remove("property_id");
        let provider = MockProvider::new("condensed. ")
            .with_table_response(json!({ "rooms": [room] }).to_string());

        let pipeline = pipeline_with(provider, 1000, PipelineConfig::default());
        let result = pipeline.extract("Room A: Queen bed").await;

        match result {
            Err(PipelineError::Validation(violation)) => {
                assert!(violation.to_string().contains("property_id"));
            }
            other => panic!("Expected Validation, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_malformed_table_response_is_backend_error() {
        let provider = MockProvider::new("condensed. ").with_table_response("not json at all");
        let pipeline = pipeline_with(provider, 1000, PipelineConfig::default());

        let result = pipeline.extract("Room A: Queen bed").await;
        assert!(matches!(result, Err(PipelineError::Backend(_))));
    }

    #[tokio::test]
    async fn test_chunk_failure_aborts_run() {
        let text = format!("{}\n{}", "a".repeat(40), "b".repeat(40));
        let mut provider = MockProvider::new("summary ");
        provider.add_error("b".repeat(40));

        let pipeline = pipeline_with(provider.clone(), 50, PipelineConfig::default());
        let result = pipeline.extract(&text).await;

        assert!(matches!(result, Err(PipelineError::Backend(_))));
        // The structuring call never happens after a condensation failure
        assert_eq!(provider.structured_call_count(), 0);
    }

    #[tokio::test]
    async fn test_summaries_reassemble_in_chunk_order() {
        // Three chunks; the first is slowest, so completion order inverts
        let text = format!("{}\n{}\n{}", "a".repeat(40), "b".repeat(40), "c".repeat(40));
        let mut provider = MockProvider::new("unused");
        provider.add_delayed_response("a".repeat(40), "S1", Duration::from_millis(30));
        provider.add_delayed_response("b".repeat(40), "S2", Duration::from_millis(15));
        provider.add_delayed_response("c".repeat(40), "S3", Duration::from_millis(1));

        let pipeline = pipeline_with(provider.clone(), 50, PipelineConfig::default());
        let outcome = pipeline.extract(&text).await.unwrap();

        assert_eq!(outcome.metadata.chunk_count, 3);
        assert_eq!(outcome.condensed_text, "S1S2S3");
        assert_eq!(provider.complete_call_count(), 3);
    }

    #[tokio::test]
    async fn test_serial_config_preserves_order_too() {
        let text = format!("{}\n{}\n{}", "a".repeat(40), "b".repeat(40), "c".repeat(40));
        let mut provider = MockProvider::new("unused");
        provider.add_response("a".repeat(40), "S1");
        provider.add_response("b".repeat(40), "S2");
        provider.add_response("c".repeat(40), "S3");

        let pipeline = pipeline_with(provider, 50, PipelineConfig::serial());
        let outcome = pipeline.extract(&text).await.unwrap();

        assert_eq!(outcome.condensed_text, "S1S2S3");
    }

    #[tokio::test]
    async fn test_condensed_text_over_limit_is_rejected() {
        // Summary longer than the 50-char context budget
        let provider = MockProvider::new("x".repeat(80));
        let pipeline = pipeline_with(provider.clone(), 50, PipelineConfig::default());

        let result = pipeline.extract(&"a".repeat(40)).await;

        match result {
            Err(PipelineError::CondensedTooLarge { length, limit }) => {
                assert_eq!(length, 80);
                assert_eq!(limit, 50);
            }
            other => panic!("Expected CondensedTooLarge, got {:?}", other.err()),
        }
        assert_eq!(provider.structured_call_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_chunk_call_times_out() {
        let text = "a".repeat(40);
        let mut provider = MockProvider::new("unused");
        provider.add_delayed_response(text.clone(), "late", Duration::from_secs(5));

        let mut config = PipelineConfig::default();
        config.request_timeout_secs = 1;

        let pipeline = pipeline_with(provider, 1000, config);
        let result = pipeline.extract(&text).await;

        assert!(matches!(result, Err(PipelineError::Timeout)));
    }

    #[tokio::test]
    async fn test_large_document_chunks_and_reassembles() {
        let paragraphs: Vec<String> = (0..10).map(|i| format!("paragraph number {:02}", i)).collect();
        let text = paragraphs.join("\n");

        let mut provider = MockProvider::new("unused").with_table_response(r#"{"rooms": []}"#);
        for (i, _) in paragraphs.iter().enumerate() {
            provider.add_response(format!("paragraph number {:02}", i), format!("[{:02}]", i));
        }

        // 20-char budget: every paragraph (19 chars) becomes its own chunk
        let pipeline = pipeline_with(provider, 20, PipelineConfig::default());
        let outcome = pipeline.extract(&text).await.unwrap();

        assert_eq!(outcome.metadata.chunk_count, 10);
        let expected: String = (0..10).map(|i| format!("[{:02}]", i)).collect();
        assert_eq!(outcome.condensed_text, expected);
    }
}
