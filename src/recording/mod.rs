//! Recording index: the seed data a recorded backend starts from.
//!
//! Recording files are JSON documents. Only `metadata.insights` is read here;
//! other sections are ignored. Each entry maps a recording key to a wrapper:
//!
//! ```json
//! { "metadata": { "insights": {
//!     "i_rev": { "obj": { "identifier": "rev", "title": "Revenue" } }
//! } } }
//! ```

use crate::core::{Insight, RecordWrapper};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

pub type RecordingResult<T> = Result<T, RecordingError>;

#[derive(Debug, Error)]
pub enum RecordingError {
    #[error("Failed to read recording index: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid recording index: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type InsightRecordings = BTreeMap<String, RecordWrapper<Insight>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordingIndex {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<RecordingMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordingMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<InsightRecordings>,
}

impl RecordingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> RecordingResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> RecordingResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> RecordingResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let index = Self::from_reader(BufReader::new(file))?;

        tracing::info!(
            path = %path.display(),
            insights = index.insight_count(),
            "recording index loaded"
        );
        Ok(index)
    }

    /// Add an insight recording under `key`.
    pub fn with_insight(mut self, key: impl Into<String>, insight: Insight) -> Self {
        self.metadata
            .get_or_insert_with(RecordingMetadata::default)
            .insights
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), RecordWrapper::new(insight));
        self
    }

    pub fn insight_count(&self) -> usize {
        self.metadata
            .as_ref()
            .and_then(|m| m.insights.as_ref())
            .map_or(0, BTreeMap::len)
    }

    /// Consume the index, yielding its insight recordings; missing sections yield none.
    pub fn into_insights(self) -> InsightRecordings {
        self.metadata
            .and_then(|m| m.insights)
            .unwrap_or_default()
    }
}
