pub mod error;
pub mod insight;
pub mod types;

pub use error::{NOT_FOUND_STATUS, Result, StoreError};
pub use insight::{Insight, InsightDefinition};
pub use types::{ObjRef, Record, RecordWrapper};
