//! Parsed, not-yet-resolved byte ranges.

use std::fmt;
use std::str::FromStr;

use http::HeaderValue;

use crate::error::TransferError;

/// A range request as parsed from `bytes=...`, before it is resolved
/// against an object size.
///
/// `start` and `end` are only meaningful when the matching flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnpackedRange {
    pub has_start: bool,
    pub has_end: bool,
    pub start: i64,
    pub end: i64,
}

impl UnpackedRange {
    /// `START-END`, both inclusive.
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            has_start: true,
            has_end: true,
            start,
            end,
        }
    }

    /// `START-`: from `start` to the end of the object.
    pub fn from_start(start: i64) -> Self {
        Self {
            has_start: true,
            has_end: false,
            start,
            end: 0,
        }
    }

    /// `-LEN`: the last `len` bytes of the object.
    pub fn suffix(len: i64) -> Self {
        Self {
            has_start: false,
            has_end: true,
            start: 0,
            end: len,
        }
    }

    /// Renders the range spec without the unit: `S-E`, `S-`, `-E` or `""`.
    pub fn to_range_string(&self) -> String {
        match (self.has_start, self.has_end) {
            (true, true) => format!("{}-{}", self.start, self.end),
            (true, false) => format!("{}-", self.start),
            (false, true) => format!("-{}", self.end),
            (false, false) => String::new(),
        }
    }

    /// `Range` header value for this range, or `None` when the header
    /// should be omitted.
    pub fn header_value(&self) -> Option<HeaderValue> {
        let spec = self.to_range_string();
        if spec.is_empty() {
            return None;
        }
        HeaderValue::from_str(&format!("bytes={}", spec)).ok()
    }
}

impl fmt::Display for UnpackedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_range_string())
    }
}

impl FromStr for UnpackedRange {
    type Err = TransferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::range::parse_range(s)
    }
}
