// Annotation provider backed by tagger output exported ahead of time.
// One JSON object per line: {"sentence": "...", "tokens": [{"text","lemma","pos","tag"}, ...]}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use super::{AnnotatedToken, Annotator, TaggingError};

/// A sentence together with the tokens the external tagger produced for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedRecord {
    pub sentence: String,
    pub tokens: Vec<AnnotatedToken>,
}

/// In-memory annotator keyed by sentence text (surrounding whitespace ignored)
#[derive(Debug, Clone, Default)]
pub struct PretaggedAnnotator {
    records: Vec<TaggedRecord>,
    index: HashMap<String, usize>,
}

impl PretaggedAnnotator {
    /// Build from records in file order. A repeated sentence keeps its first annotation.
    pub fn from_records(records: Vec<TaggedRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            index.entry(record.sentence.trim().to_string()).or_insert(position);
        }
        Self { records, index }
    }

    /// Parse JSON Lines content; blank lines are skipped
    pub fn from_jsonl_str(content: &str) -> Result<Self, TaggingError> {
        let mut records = Vec::new();
        for (line_index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record: TaggedRecord =
                serde_json::from_str(line).map_err(|e| TaggingError::MalformedInput {
                    line: line_index + 1,
                    reason: e.to_string(),
                })?;
            records.push(record);
        }
        debug!("Parsed {} tagged records", records.len());
        Ok(Self::from_records(records))
    }

    /// Load a JSON Lines file of tagged sentences
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read tagged sentences from {}", path.display()))?;
        let annotator = Self::from_jsonl_str(&content)
            .with_context(|| format!("Invalid tagged sentences in {}", path.display()))?;
        info!(
            "Loaded {} tagged sentences from {}",
            annotator.len(),
            path.display()
        );
        Ok(annotator)
    }

    /// Sentences in file order, repeats included
    pub fn sentences(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.sentence.as_str())
    }

    pub fn records(&self) -> &[TaggedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Annotator for PretaggedAnnotator {
    fn annotate(&self, sentence: &str) -> Result<Vec<AnnotatedToken>, TaggingError> {
        self.index
            .get(sentence.trim())
            .map(|&position| self.records[position].tokens.clone())
            .ok_or_else(|| TaggingError::UnknownSentence(sentence.to_string()))
    }
}
