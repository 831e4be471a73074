// ============================================================================
// insightstore - recorded insight backend
// ============================================================================
//
// In-memory stand-in for an analytical backend's insight API: create, get by
// reference, paged and ordered listing, update and delete. Seeded from
// recording files, async on the outside, synchronous on the inside.
//
// ============================================================================

pub mod core;
pub mod facade;
pub mod query;
pub mod recording;
pub mod result;
pub mod storage;

pub use crate::core::{
    Insight, InsightDefinition, ObjRef, Record, RecordWrapper, Result, StoreError,
};
pub use facade::{InsightsService, RecordedInsights};
pub use query::{OrderBy, QueryOptions};
pub use recording::{RecordingError, RecordingIndex};
pub use result::RecordingPager;
pub use storage::{IdSequence, KeyDerivation, RecordStore, StoreConfig};
