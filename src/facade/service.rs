use crate::core::{Insight, InsightDefinition, ObjRef, Result};
use crate::query::QueryOptions;
use crate::result::RecordingPager;
use async_trait::async_trait;

/// Insight operations of an analytical backend.
///
/// A networked client and the in-memory recorded store both implement this, so
/// callers can swap one for the other. Failures arrive as `StoreError` values.
#[async_trait]
pub trait InsightsService: Send + Sync {
    /// Save a new insight; the backend assigns its identifier.
    async fn create_insight(&self, definition: InsightDefinition) -> Result<Insight>;

    async fn get_insight(&self, reference: &ObjRef) -> Result<Insight>;

    /// List insights one page at a time.
    async fn get_insights(&self, query: Option<QueryOptions>) -> Result<RecordingPager<Insight>>;

    /// Replace an existing insight. Fails if it does not exist.
    async fn update_insight(&self, insight: Insight) -> Result<Insight>;

    async fn delete_insight(&self, reference: &ObjRef) -> Result<()>;
}
