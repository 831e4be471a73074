use super::service::InsightsService;
use crate::core::{Insight, InsightDefinition, ObjRef, Result};
use crate::query::QueryOptions;
use crate::recording::RecordingIndex;
use crate::result::RecordingPager;
use crate::storage::{IdSequence, RecordStore, StoreConfig};
use async_trait::async_trait;

/// Recorded backend for insights, backed by an in-memory [`RecordStore`].
///
/// Seeded from the `metadata.insights` section of a recording index. Created
/// insights draw identifiers (`adHocInsight_<n>`) from the process-wide
/// sequence unless a sequence is injected.
pub struct RecordedInsights {
    store: RecordStore<Insight>,
}

impl RecordedInsights {
    pub fn new(recordings: RecordingIndex) -> Self {
        Self::with_config(recordings, StoreConfig::default(), IdSequence::shared())
    }

    pub fn with_config(recordings: RecordingIndex, config: StoreConfig, ids: IdSequence) -> Self {
        Self {
            store: RecordStore::with_parts(recordings.into_insights(), config, ids),
        }
    }

    /// Underlying store
    pub fn store(&self) -> &RecordStore<Insight> {
        &self.store
    }
}

impl Default for RecordedInsights {
    fn default() -> Self {
        Self::new(RecordingIndex::default())
    }
}

#[async_trait]
impl InsightsService for RecordedInsights {
    async fn create_insight(&self, definition: InsightDefinition) -> Result<Insight> {
        Ok(self.store.create(definition).await)
    }

    async fn get_insight(&self, reference: &ObjRef) -> Result<Insight> {
        self.store.get(reference).await
    }

    async fn get_insights(&self, query: Option<QueryOptions>) -> Result<RecordingPager<Insight>> {
        Ok(self.store.list(query.as_ref()).await)
    }

    async fn update_insight(&self, insight: Insight) -> Result<Insight> {
        self.store.update(insight).await
    }

    async fn delete_insight(&self, reference: &ObjRef) -> Result<()> {
        self.store.delete(reference).await
    }
}
