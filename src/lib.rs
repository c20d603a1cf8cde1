//! oss-transfer: planning and range arithmetic for object storage transfers.
//!
//! This crate decides how a payload is cut into parts for a multipart
//! transfer, what byte range a partial request resolves to, and how many
//! bytes are left in a reader, before any request goes out. It also carries
//! the bucket/object name checks and XML escaping the request layer needs.
//!
//! # Example
//!
//! ```no_run
//! use oss_transfer::{adjust_range, parse_range, split_file_by_part_size};
//!
//! # fn main() -> Result<(), oss_transfer::TransferError> {
//! let parts = split_file_by_part_size("video.mp4", 8 * 1024 * 1024)?;
//! for part in &parts {
//!     println!("part {} at {} ({} bytes)", part.number, part.offset, part.size);
//! }
//!
//! let range = parse_range("bytes=1024-")?;
//! let (start, end) = adjust_range(Some(&range), 8192);
//! assert_eq!((start, end), (1024, 8192));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod headers;
pub mod models;
pub mod planner;
pub mod range;
pub mod stream;
pub mod validate;
pub mod xml;

// Re-exports for convenience
pub use config::{is_verify_object_strict, AuthVersion, Config, ResolvedConfig};
pub use error::{ErrorCode, TransferError, TransferResult};
pub use headers::{format_http_date, now_gmt, now_nano_sec, now_sec, type_by_extension};
pub use models::{FileChunk, UnpackedRange};
pub use planner::{
    content_md5, get_part_end, part_content_md5, split_by_part_num, split_by_part_size,
    split_file_by_part_num, split_file_by_part_num_async, split_file_by_part_size,
    split_file_by_part_size_async, MAX_PART_COUNT,
};
pub use range::{adjust_range, parse_range};
pub use stream::{
    reader_len, reader_len_async, seek_len, ContentLength, DiscardReadCloser, LimitedReadCloser,
    ReaderCapability, SeekableReader,
};
pub use validate::{check_bucket_name, check_object_name, check_object_name_ex};
pub use xml::escape_xml;
