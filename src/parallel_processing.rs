// Batch analysis of independent sentences on blocking worker tasks.
// Sentences share no state, so workers need no synchronisation beyond the
// read-only annotator.

use anyhow::Result;
use futures::stream::{self, Stream, StreamExt};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{info, warn};

use crate::annotation::{Annotator, TaggingError};
use crate::features::{FeatureExtractor, SentenceFeatures};
use crate::matchers::ConversationBoundary;

/// Configuration for batch processing
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Maximum number of sentences analysed concurrently
    pub workers: usize,
    /// Abort the batch on the first tagging error
    pub fail_fast: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            fail_fast: false,
        }
    }
}

/// Result of analysing one sentence of a batch
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SentenceOutcome {
    /// 0-based position in the input
    pub index: usize,
    pub sentence: String,
    pub features: Option<SentenceFeatures>,
    /// Tagging error message if analysis failed
    pub error: Option<String>,
}

impl SentenceOutcome {
    fn new(index: usize, sentence: String, result: Result<SentenceFeatures, TaggingError>) -> Self {
        match result {
            Ok(features) => Self {
                index,
                sentence,
                features: Some(features),
                error: None,
            },
            Err(e) => Self {
                index,
                sentence,
                features: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.features.is_some()
    }
}

/// Analyse sentences concurrently, yielding outcomes in input order
pub fn process_sentences_stream<A>(
    extractor: Arc<FeatureExtractor<A>>,
    sentences: Vec<String>,
    config: &BatchConfig,
) -> impl Stream<Item = Result<SentenceOutcome>>
where
    A: Annotator + Send + Sync + 'static,
{
    let workers = config.workers.max(1);

    stream::iter(sentences.into_iter().enumerate())
        .map(move |(index, sentence)| {
            let extractor = Arc::clone(&extractor);
            async move {
                let outcome = tokio::task::spawn_blocking(move || {
                    let result = extractor.analyze(&sentence);
                    SentenceOutcome::new(index, sentence, result)
                })
                .await?;
                Ok::<_, anyhow::Error>(outcome)
            }
        })
        .buffered(workers)
}

/// Analyse a whole batch, calling `on_outcome` as each sentence completes.
///
/// Without `fail_fast`, tagging errors are kept in the outcomes; with it, the
/// first one aborts the batch.
pub async fn process_sentences_parallel<A, F>(
    extractor: Arc<FeatureExtractor<A>>,
    sentences: Vec<String>,
    config: &BatchConfig,
    mut on_outcome: F,
) -> Result<Vec<SentenceOutcome>>
where
    A: Annotator + Send + Sync + 'static,
    F: FnMut(&SentenceOutcome),
{
    let total = sentences.len();
    info!("Analysing {} sentences with {} workers", total, config.workers.max(1));

    let mut outcomes = Vec::with_capacity(total);
    let mut stream = std::pin::pin!(process_sentences_stream(extractor, sentences, config));

    while let Some(outcome) = stream.next().await {
        let outcome = outcome?;
        on_outcome(&outcome);

        if let Some(ref error) = outcome.error {
            if config.fail_fast {
                anyhow::bail!("Analysis failed for sentence {}: {}", outcome.index, error);
            }
            warn!("Analysis failed for sentence {} (continuing): {}", outcome.index, error);
        }
        outcomes.push(outcome);
    }

    info!("Completed analysis of {} sentences", outcomes.len());
    Ok(outcomes)
}

/// Write the features of successful outcomes as JSON Lines
pub async fn write_features_jsonl(output_path: &Path, outcomes: &[SentenceOutcome]) -> Result<usize> {
    let file = tokio::fs::File::create(output_path).await?;
    let mut writer = BufWriter::new(file);
    let mut written = 0;

    for features in outcomes.iter().filter_map(|outcome| outcome.features.as_ref()) {
        let line = serde_json::to_string(features)?;
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        written += 1;
    }

    writer.flush().await?;
    Ok(written)
}

/// Totals for one run
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    pub sentences_total: u64,
    pub sentences_analysed: u64,
    pub sentences_failed: u64,
    pub self_intros: u64,
    pub other_intros: u64,
    pub direct_addresses: u64,
    pub conversation_starters: u64,
    pub conversation_enders: u64,
    /// Sum of per-sentence profanity counts
    pub profanity_total: u64,
    pub processing_time_ms: u64,
    pub sentences_per_sec: f64,
}

impl RunStats {
    pub fn from_outcomes(outcomes: &[SentenceOutcome], elapsed: Duration) -> Self {
        let mut stats = RunStats {
            sentences_total: outcomes.len() as u64,
            processing_time_ms: elapsed.as_millis() as u64,
            ..Default::default()
        };

        for outcome in outcomes {
            let Some(features) = &outcome.features else {
                stats.sentences_failed += 1;
                continue;
            };
            stats.sentences_analysed += 1;
            stats.self_intros += u64::from(features.self_intro.is_some());
            stats.other_intros += u64::from(features.other_intro.is_some());
            stats.direct_addresses += u64::from(features.direct_address.is_some());
            match features.boundary {
                Some(ConversationBoundary::Starter) => stats.conversation_starters += 1,
                Some(ConversationBoundary::Ender) => stats.conversation_enders += 1,
                None => {}
            }
            stats.profanity_total += features.profanity as u64;
        }

        let secs = elapsed.as_secs_f64();
        stats.sentences_per_sec = if secs > 0.0 {
            stats.sentences_total as f64 / secs
        } else {
            0.0
        };
        stats
    }
}

/// Write run statistics as pretty-printed JSON
pub async fn write_run_stats(stats_path: &Path, stats: &RunStats) -> Result<()> {
    let content = serde_json::to_string_pretty(stats)?;
    tokio::fs::write(stats_path, content).await?;
    Ok(())
}
