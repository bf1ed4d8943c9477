//! Core extraction pipeline

use crate::chunking::TextChunker;
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::types::{ExtractionMetadata, ExtractionOutcome};
use roomtable_domain::{CompletionFailure, CompletionProvider, RoomTable};
use roomtable_llm::{BackendRegistry, Credentials, Provider};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{debug, info};

/// Drives a document through condensation and structuring against one
/// backend.
///
/// Each extraction run is independent: the pipeline holds no mutable state,
/// so one instance can serve documents concurrently.
pub struct Pipeline<P> {
    provider: Arc<P>,
    backend_id: String,
    context_limit: usize,
    config: PipelineConfig,
}

impl Pipeline<Provider> {
    /// Build a pipeline for a configured backend.
    ///
    /// Fails before any network activity if the backend identifier is not in
    /// the registry, or if its driver cannot be constructed.
    pub fn for_backend(
        backend_id: &str,
        registry: &BackendRegistry,
        credentials: &Credentials,
        config: PipelineConfig,
    ) -> Result<Self, PipelineError> {
        let spec = registry
            .get(backend_id)
            .ok_or_else(|| PipelineError::UnknownBackend(backend_id.to_string()))?;
        let provider = Provider::for_spec(spec, credentials)
            .map_err(|e| PipelineError::Configuration(e.to_string()))?;

        Pipeline::new(provider, backend_id, spec.context_limit, config)
    }
}

impl<P> Pipeline<P>
where
    P: CompletionProvider + Send + Sync + 'static,
{
    /// Create a pipeline around an already-constructed provider.
    pub fn new(
        provider: P,
        backend_id: impl Into<String>,
        context_limit: usize,
        config: PipelineConfig,
    ) -> Result<Self, PipelineError> {
        config.validate().map_err(PipelineError::Configuration)?;
        if context_limit == 0 {
            return Err(PipelineError::Configuration(
                "context limit must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            provider: Arc::new(provider),
            backend_id: backend_id.into(),
            context_limit,
            config,
        })
    }

    /// Extract a validated room table from document text.
    ///
    /// A document with no extractable text yields an empty table without any
    /// backend call. Any call failure aborts the run; partial output is
    /// discarded, never returned.
    pub async fn extract(&self, text: &str) -> Result<ExtractionOutcome, PipelineError> {
        let started = Instant::now();

        if text.trim().is_empty() {
            info!(backend = %self.backend_id, "document has no extractable text");
            return Ok(ExtractionOutcome {
                table: RoomTable::default(),
                condensed_text: String::new(),
                metadata: self.metadata(0, 0, started),
            });
        }

        let chunks = TextChunker::new(self.context_limit).chunk(text);
        let chunk_count = chunks.len();
        info!(backend = %self.backend_id, chunks = chunk_count, "condensing document");

        let condensed = self.condense(chunks).await?;
        debug!(condensed_chars = condensed.len(), "condensation complete");

        // The structuring call is a single non-chunked request; a condensed
        // text that still overflows the budget is an explicit error.
        if condensed.len() > self.context_limit {
            return Err(PipelineError::CondensedTooLarge {
                length: condensed.len(),
                limit: self.context_limit,
            });
        }

        let table = self.tabulate(&condensed).await?;
        info!(
            backend = %self.backend_id,
            rooms = table.len(),
            "extraction complete"
        );

        let metadata = self.metadata(chunk_count, condensed.len(), started);
        Ok(ExtractionOutcome { table, condensed_text: condensed, metadata })
    }

    /// Condense every chunk and reassemble the summaries in document order.
    async fn condense(&self, chunks: Vec<String>) -> Result<String, PipelineError> {
        let chunk_count = chunks.len();
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_requests));
        let mut calls = JoinSet::new();

        for (index, chunk) in chunks.into_iter().enumerate() {
            let provider = Arc::clone(&self.provider);
            let semaphore = Arc::clone(&semaphore);
            let instruction = self.config.condense_instruction.clone();
            let per_call = self.config.request_timeout();

            calls.spawn(async move {
                let _permit = semaphore.acquire_owned().await.expect("semaphore closed");
                debug!(chunk = index, chars = chunk.len(), "condensing chunk");
                let result = timeout(per_call, provider.complete(&instruction, &chunk)).await;
                (index, result)
            });
        }

        // Summaries land by index no matter which calls finish first.
        // Dropping the set on the first failure aborts calls still in flight.
        let mut summaries: Vec<Option<String>> = vec![None; chunk_count];
        while let Some(joined) = calls.join_next().await {
            let (index, result) = joined.map_err(|e| PipelineError::Backend(e.to_string()))?;
            match result {
                Err(_) => return Err(PipelineError::Timeout),
                Ok(Err(error)) => return Err(classify(error)),
                Ok(Ok(summary)) => summaries[index] = Some(summary),
            }
        }

        Ok(summaries.into_iter().flatten().collect())
    }

    /// One schema-constrained call over the condensed text.
    async fn tabulate(&self, condensed: &str) -> Result<RoomTable, PipelineError> {
        timeout(
            self.config.request_timeout(),
            self.provider
                .complete_structured(&self.config.tabulate_instruction, condensed),
        )
        .await
        .map_err(|_| PipelineError::Timeout)?
        .map_err(classify)
    }

    fn metadata(
        &self,
        chunk_count: usize,
        condensed_chars: usize,
        started: Instant,
    ) -> ExtractionMetadata {
        ExtractionMetadata {
            backend_id: self.backend_id.clone(),
            chunk_count,
            condensed_chars,
            processing_time_ms: started.elapsed().as_millis() as u64,
        }
    }
}

fn classify<E: Into<CompletionFailure>>(error: E) -> PipelineError {
    match error.into() {
        CompletionFailure::Call(message) => PipelineError::Backend(message),
        CompletionFailure::Schema(violation) => PipelineError::Validation(violation),
    }
}
