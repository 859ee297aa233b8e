//! Chunk partitioning

use crate::utils::error::{Result, SeederError};
use std::ops::Range;

/// Partition of `len` records into consecutive chunks of `batch_size`.
///
/// Every chunk but the last holds exactly `batch_size` records; the last
/// holds the remainder, or a full chunk when the division is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPlan {
    len: usize,
    batch_size: usize,
}

impl ChunkPlan {
    pub fn new(len: usize, batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(SeederError::config("Batch size must be greater than 0"));
        }
        Ok(Self { len, batch_size })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// ceil(len / batch_size)
    pub fn total_batches(&self) -> usize {
        self.len.div_ceil(self.batch_size)
    }

    /// Index range of the zero-based batch `index`
    pub fn batch_range(&self, index: usize) -> Option<Range<usize>> {
        if index >= self.total_batches() {
            return None;
        }
        let start = index * self.batch_size;
        let end = (start + self.batch_size).min(self.len);
        Some(start..end)
    }

    /// All batch ranges in order
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.total_batches()).filter_map(move |i| self.batch_range(i))
    }
}
