use super::keys::RECORDING_KEY_PREFIX;
use serde::{Deserialize, Serialize};

/// Record store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    /// Page size used when a list query gives no limit
    pub default_limit: usize,

    /// Prefix of identifiers generated by `create`
    pub id_prefix: String,

    /// Namespace tag of recording keys used by reads
    pub recording_prefix: String,

    /// Noun used in not-found messages
    pub record_kind: String,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self {
            default_limit: 50,
            id_prefix: "adHocInsight_".to_string(),
            recording_prefix: RECORDING_KEY_PREFIX.to_string(),
            record_kind: "insight".to_string(),
        }
    }

    pub fn default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn id_prefix(mut self, prefix: &str) -> Self {
        self.id_prefix = prefix.to_string();
        self
    }

    pub fn recording_prefix(mut self, prefix: &str) -> Self {
        self.recording_prefix = prefix.to_string();
        self
    }

    pub fn record_kind(mut self, kind: &str) -> Self {
        self.record_kind = kind.to_string();
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}
