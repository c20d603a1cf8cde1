//! HTTP byte-range parsing and resolution.
//!
//! Parsing is strict and fails on anything it does not understand.
//! Resolution never fails: a range that cannot be satisfied against the
//! object size resolves to the whole object.

use crate::error::{ErrorCode, TransferError, TransferResult};
use crate::models::UnpackedRange;

fn invalid_range(value: &str) -> TransferError {
    TransferError::with_message(ErrorCode::InvalidRange, format!("InvalidRange {}", value))
}

/// Parses a non-empty run of ASCII digits.
fn parse_offset(digits: &str) -> Option<i64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Parses a `Range` header value like `"bytes=0-1023"`, `"bytes=1024-"` or
/// `"bytes=-500"`.
///
/// Only the first comma-separated range is parsed; the rest are ignored.
pub fn parse_range(value: &str) -> TransferResult<UnpackedRange> {
    let spec = match value.split_once('=') {
        Some(("bytes", rest)) if !rest.contains('=') => rest,
        _ => return Err(invalid_range(value)),
    };

    let spec = spec.split(',').next().unwrap_or_default();

    if let Some(start) = spec.strip_suffix('-') {
        let start = parse_offset(start).ok_or_else(|| invalid_range(value))?;
        Ok(UnpackedRange::from_start(start))
    } else if let Some(len) = spec.strip_prefix('-') {
        match parse_offset(len) {
            Some(len) if len > 0 => Ok(UnpackedRange::suffix(len)),
            _ => Err(invalid_range(value)),
        }
    } else {
        let (start, end) = spec.split_once('-').ok_or_else(|| invalid_range(value))?;
        let start = parse_offset(start).ok_or_else(|| invalid_range(value))?;
        let end = parse_offset(end).ok_or_else(|| invalid_range(value))?;
        Ok(UnpackedRange::new(start, end))
    }
}

/// Resolves a parsed range against an object of `size` bytes.
///
/// Returns `(start, end)` with `end` one past the last byte to read.
/// `None`, and any range that cannot be satisfied, resolve to `(0, size)`.
pub fn adjust_range(range: Option<&UnpackedRange>, size: i64) -> (i64, i64) {
    let whole = (0, size);
    let Some(range) = range else {
        return whole;
    };

    match (range.has_start, range.has_end) {
        (true, true) => {
            let (start, end) = (range.start, range.end);
            if start < 0 || start > end || end >= size {
                whole
            } else {
                (start, end + 1)
            }
        }
        (true, false) => {
            if range.start < 0 || range.start >= size {
                whole
            } else {
                (range.start, size)
            }
        }
        (false, true) => {
            if range.end < 0 || range.end > size {
                whole
            } else {
                (size - range.end, size)
            }
        }
        (false, false) => whole,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_offset() {
        assert_eq!(parse_offset("1024"), Some(1024));
        assert_eq!(parse_offset(""), None);
        assert_eq!(parse_offset("+1"), None);
        assert_eq!(parse_offset("99999999999999999999"), None);
    }

    #[test]
    fn test_parse_only_first_spec() {
        let range = parse_range("bytes=0-1,-5").unwrap();
        assert_eq!(range, UnpackedRange::new(0, 1));
    }

    #[test]
    fn test_adjust_open_start_past_end() {
        let range = UnpackedRange::from_start(8192);
        assert_eq!(adjust_range(Some(&range), 8192), (0, 8192));
    }

    #[test]
    fn test_adjust_end_at_size() {
        let range = UnpackedRange::new(0, 8192);
        assert_eq!(adjust_range(Some(&range), 8192), (0, 8192));

        let range = UnpackedRange::new(1, i64::MAX);
        assert_eq!(adjust_range(Some(&range), i64::MAX), (0, i64::MAX));

        let range = UnpackedRange::new(0, 8191);
        assert_eq!(adjust_range(Some(&range), 8192), (0, 8192));
    }

    #[test]
    fn test_adjust_no_flags() {
        let range = UnpackedRange::default();
        assert_eq!(adjust_range(Some(&range), 100), (0, 100));
    }
}
