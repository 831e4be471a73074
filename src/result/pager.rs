// ============================================================================
// Recording Pager
// ============================================================================
//
// Read-only cursor over a fully materialized, already ordered sequence.
// The window is computed once at construction; navigation produces new pagers
// over the same shared sequence and never re-queries the source.
//
// ============================================================================

use std::fmt;
use std::sync::Arc;

/// One page of a fixed result set.
///
/// `total_count` is the length of the whole sequence, captured before windowing.
/// `items` holds at most `limit` elements starting at `offset`; an offset at or
/// past the end yields an empty page.
pub struct RecordingPager<T> {
    all: Arc<[T]>,
    limit: usize,
    offset: usize,
    start: usize,
    end: usize,
}

impl<T> RecordingPager<T> {
    pub fn new(all: Vec<T>, limit: usize, offset: usize) -> Self {
        Self::over(Arc::from(all), limit, offset)
    }

    /// Pager with no data, still reporting the requested window.
    pub fn empty(limit: usize, offset: usize) -> Self {
        Self::new(Vec::new(), limit, offset)
    }

    fn over(all: Arc<[T]>, limit: usize, offset: usize) -> Self {
        let total = all.len();
        let start = offset.min(total);
        let end = offset.saturating_add(limit).min(total);

        Self {
            all,
            limit,
            offset,
            start,
            end,
        }
    }

    /// Items of the current window
    pub fn items(&self) -> &[T] {
        &self.all[self.start..self.end]
    }

    pub fn total_count(&self) -> usize {
        self.all.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `next()` would move to further items.
    ///
    /// An empty window cannot advance, so it never has a next page.
    pub fn has_next(&self) -> bool {
        !self.is_empty() && self.end < self.all.len()
    }

    /// Pager for the window that follows this one.
    ///
    /// An empty window has nowhere to advance to and returns an equivalent pager.
    pub fn next(&self) -> Self {
        if self.is_empty() {
            return self.clone();
        }

        Self::over(Arc::clone(&self.all), self.limit, self.offset + self.len())
    }

    /// Pager for the zero-based `page`, using this pager's limit as the page size.
    pub fn go_to(&self, page: usize) -> Self {
        Self::over(
            Arc::clone(&self.all),
            self.limit,
            page.saturating_mul(self.limit),
        )
    }

    /// The complete sequence this pager windows over.
    pub fn all(&self) -> &[T] {
        &self.all
    }
}

impl<T: Clone> RecordingPager<T> {
    pub fn to_items(&self) -> Vec<T> {
        self.items().to_vec()
    }
}

impl<T> Clone for RecordingPager<T> {
    fn clone(&self) -> Self {
        Self {
            all: Arc::clone(&self.all),
            limit: self.limit,
            offset: self.offset,
            start: self.start,
            end: self.end,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RecordingPager<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingPager")
            .field("items", &self.items())
            .field("total_count", &self.total_count())
            .field("limit", &self.limit)
            .field("offset", &self.offset)
            .finish()
    }
}
