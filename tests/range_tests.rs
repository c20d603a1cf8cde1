//! Range parsing, resolution and rendering tests.

use oss_transfer::{adjust_range, parse_range, ErrorCode, UnpackedRange};

#[test]
fn test_parse_range_invalid() {
    for value in [
        "bytes==M-N",
        "ranges=M-N",
        "bytes=M-N",
        "bytes=M-",
        "bytes=-N",
        "bytes=-0",
        "bytes=1-2-3",
        "bytes=1-N",
        "bytes=",
        "bytes=-",
        "bytes=5",
        "Bytes=0-1",
        "0-1",
        "bytes=+1-2",
    ] {
        let err = parse_range(value).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRange, "{}", value);
        assert_eq!(err.to_string(), format!("InvalidRange {}", value));
    }
}

#[test]
fn test_parse_range_valid() {
    let range = parse_range("bytes=1024-4096").unwrap();
    assert_eq!(range.start, 1024);
    assert_eq!(range.end, 4096);
    assert!(range.has_start);
    assert!(range.has_end);

    let range = parse_range("bytes=1024-4096,2048-4096").unwrap();
    assert_eq!(range, UnpackedRange::new(1024, 4096));

    let range = parse_range("bytes=1024-").unwrap();
    assert_eq!(range.start, 1024);
    assert_eq!(range.end, 0);
    assert!(range.has_start);
    assert!(!range.has_end);

    let range = parse_range("bytes=-4096").unwrap();
    assert_eq!(range.start, 0);
    assert_eq!(range.end, 4096);
    assert!(!range.has_start);
    assert!(range.has_end);
}

#[test]
fn test_parse_render_round_trip() {
    for spec in ["1024-4096", "1024-", "-4096"] {
        let range: UnpackedRange = format!("bytes={},0-1", spec).parse().unwrap();
        assert_eq!(range.to_string(), spec);
        assert_eq!(range.header_value().unwrap(), format!("bytes={}", spec).as_str());
    }
}

#[test]
fn test_adjust_range() {
    assert_eq!(adjust_range(None, 8192), (0, 8192));
    assert_eq!(adjust_range(None, 0), (0, 0));

    let range = UnpackedRange::new(1024, 4095);
    assert_eq!(adjust_range(Some(&range), 8192), (1024, 4096));

    let range = UnpackedRange {
        has_start: true,
        has_end: false,
        start: 1024,
        end: 4096,
    };
    assert_eq!(adjust_range(Some(&range), 8192), (1024, 8192));

    let range = UnpackedRange {
        has_start: false,
        has_end: true,
        start: 1024,
        end: 4096,
    };
    assert_eq!(adjust_range(Some(&range), 8192), (4096, 8192));
}

#[test]
fn test_adjust_range_falls_back_to_whole_object() {
    // 4096-1024
    let range = UnpackedRange::new(4096, 1024);
    assert_eq!(adjust_range(Some(&range), 8192), (0, 8192));

    // -1-
    let range = UnpackedRange::from_start(-1);
    assert_eq!(adjust_range(Some(&range), 8192), (0, 8192));

    // -9999
    let range = UnpackedRange::suffix(9999);
    assert_eq!(adjust_range(Some(&range), 8192), (0, 8192));

    // Negative start with an end.
    let range = UnpackedRange::new(-5, 10);
    assert_eq!(adjust_range(Some(&range), 8192), (0, 8192));
}

#[test]
fn test_parse_then_adjust() {
    let range = parse_range("bytes=-8192").unwrap();
    assert_eq!(adjust_range(Some(&range), 8192), (0, 8192));

    let range = parse_range("bytes=0-0").unwrap();
    assert_eq!(adjust_range(Some(&range), 10), (0, 1));

    let range = parse_range("bytes=9-").unwrap();
    assert_eq!(adjust_range(Some(&range), 10), (9, 10));
}

#[test]
fn test_adjust_range_end_past_last_byte() {
    let range = parse_range("bytes=0-8192").unwrap();
    assert_eq!(adjust_range(Some(&range), 8192), (0, 8192));

    let range = parse_range("bytes=100-8192").unwrap();
    assert_eq!(adjust_range(Some(&range), 8192), (0, 8192));

    let range = parse_range("bytes=100-8191").unwrap();
    assert_eq!(adjust_range(Some(&range), 8192), (100, 8192));

    let range = UnpackedRange::new(0, i64::MAX);
    assert_eq!(adjust_range(Some(&range), i64::MAX), (0, i64::MAX));
}
