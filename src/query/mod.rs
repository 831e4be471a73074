// ============================================================================
// List Query Module
// ============================================================================
//
// Query options accepted by list operations and the ordering policy that turns
// an ordering key into a record comparator.
//
// ============================================================================

pub mod options;
pub mod ordering;

pub use options::{OrderBy, QueryOptions};
pub use ordering::{Comparator, comparator, locale_compare};
