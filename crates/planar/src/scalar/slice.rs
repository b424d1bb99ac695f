use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Half-open index range `start..end`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slice {
    pub start: usize,
    pub end: usize,
}

impl Slice {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of selected indices; zero when `end <= start`.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Range<usize>> for Slice {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Slice> for Range<usize> {
    fn from(slice: Slice) -> Self {
        slice.start..slice.end
    }
}
