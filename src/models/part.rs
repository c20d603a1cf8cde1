//! Part descriptors produced by the planner.

use serde::{Deserialize, Serialize};

use super::range::UnpackedRange;

/// One contiguous slice of a payload, transferred as an independent unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileChunk {
    /// 1-based part number.
    pub number: u32,
    /// Byte offset of the part in the payload.
    pub offset: u64,
    /// Part length in bytes.
    pub size: u64,
}

impl FileChunk {
    pub fn new(number: u32, offset: u64, size: u64) -> Self {
        Self {
            number,
            offset,
            size,
        }
    }

    /// Offset one past the last byte of the part.
    pub fn end(&self) -> u64 {
        self.offset + self.size
    }

    /// Inclusive byte range covering this part, for a ranged download.
    ///
    /// Returns `None` for an empty part, which has no byte to address.
    pub fn range(&self) -> Option<UnpackedRange> {
        if self.size == 0 {
            return None;
        }
        Some(UnpackedRange::new(
            self.offset as i64,
            (self.end() - 1) as i64,
        ))
    }
}
