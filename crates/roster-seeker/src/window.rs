//! Offset/limit windows over ordered results.

/// A contiguous slice of an ordered result set.
///
/// Windows never fail: an offset past the end yields an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Window {
    /// Number of leading items to skip.
    pub offset: usize,
    /// Maximum number of items to keep, or `None` for all remaining.
    pub limit: Option<usize>,
}

impl Window {
    /// Creates a window that skips `offset` items and keeps at most `limit`.
    pub fn new(offset: usize, limit: Option<usize>) -> Self {
        Window { offset, limit }
    }

    /// Returns the `[start, end)` bounds of this window clamped to `len`.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let start = self.offset.min(len);
        let end = match self.limit {
            Some(limit) => start.saturating_add(limit).min(len),
            None => len,
        };
        (start, end)
    }

    /// Applies the window to an owned vector.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let (start, end) = self.bounds(items.len());
        items.into_iter().skip(start).take(end - start).collect()
    }
}
