//! Splitting a payload into parts by count or by size.

use std::path::Path;

use crate::error::{ErrorCode, TransferError, TransferResult};
use crate::models::FileChunk;

/// Maximum number of parts in one multipart transfer.
pub const MAX_PART_COUNT: usize = 10000;

fn check_part_count(count: u64) -> TransferResult<()> {
    if count > MAX_PART_COUNT as u64 {
        return Err(TransferError::with_message(
            ErrorCode::InvalidArgument,
            format!("too many parts: {} exceeds {}", count, MAX_PART_COUNT),
        ));
    }
    Ok(())
}

fn check_part_num(part_num: usize) -> TransferResult<()> {
    if part_num == 0 || part_num > MAX_PART_COUNT {
        return Err(TransferError::with_message(
            ErrorCode::InvalidArgument,
            format!("part number must be between 1 and {}", MAX_PART_COUNT),
        ));
    }
    Ok(())
}

fn check_part_size(part_size: u64) -> TransferResult<()> {
    if part_size == 0 {
        return Err(TransferError::with_message(
            ErrorCode::InvalidArgument,
            "part size must be greater than 0",
        ));
    }
    Ok(())
}

fn regular_file_size(path: &Path, metadata: std::fs::Metadata) -> TransferResult<u64> {
    if !metadata.is_file() {
        return Err(TransferError::with_message(
            ErrorCode::InvalidArgument,
            format!("{} is not a regular file", path.display()),
        ));
    }
    Ok(metadata.len())
}

fn file_size(path: &Path) -> TransferResult<u64> {
    let metadata = std::fs::metadata(path)?;
    regular_file_size(path, metadata)
}

async fn file_size_async(path: &Path) -> TransferResult<u64> {
    let metadata = tokio::fs::metadata(path).await?;
    regular_file_size(path, metadata)
}

/// Splits `total_size` bytes into exactly `part_num` parts.
///
/// The remainder of the division is spread one byte at a time over the
/// first parts, so sizes differ by at most one and never grow.
pub fn split_by_part_num(total_size: u64, part_num: usize) -> TransferResult<Vec<FileChunk>> {
    check_part_num(part_num)?;

    let n = part_num as u64;
    let base = total_size / n;
    let remainder = total_size % n;

    let mut parts = Vec::with_capacity(part_num);
    let mut offset = 0;
    for i in 0..n {
        let size = if i < remainder { base + 1 } else { base };
        parts.push(FileChunk::new(i as u32 + 1, offset, size));
        offset += size;
    }
    Ok(parts)
}

/// Splits `total_size` bytes into parts of `part_size`; the last part holds
/// whatever is left.
pub fn split_by_part_size(total_size: u64, part_size: u64) -> TransferResult<Vec<FileChunk>> {
    check_part_size(part_size)?;

    let count = total_size.div_ceil(part_size);
    check_part_count(count)?;

    let parts = (0..count)
        .map(|i| {
            let offset = i * part_size;
            let size = part_size.min(total_size - offset);
            FileChunk::new(i as u32 + 1, offset, size)
        })
        .collect();
    Ok(parts)
}

/// Splits the file at `path` into `part_num` parts.
pub fn split_file_by_part_num(
    path: impl AsRef<Path>,
    part_num: usize,
) -> TransferResult<Vec<FileChunk>> {
    check_part_num(part_num)?;
    let total_size = file_size(path.as_ref())?;
    split_by_part_num(total_size, part_num)
}

/// Splits the file at `path` into parts of `part_size` bytes.
pub fn split_file_by_part_size(
    path: impl AsRef<Path>,
    part_size: u64,
) -> TransferResult<Vec<FileChunk>> {
    check_part_size(part_size)?;
    let total_size = file_size(path.as_ref())?;
    split_by_part_size(total_size, part_size)
}

/// Async variant of [`split_file_by_part_num`].
pub async fn split_file_by_part_num_async(
    path: impl AsRef<Path>,
    part_num: usize,
) -> TransferResult<Vec<FileChunk>> {
    check_part_num(part_num)?;
    let total_size = file_size_async(path.as_ref()).await?;
    split_by_part_num(total_size, part_num)
}

/// Async variant of [`split_file_by_part_size`].
pub async fn split_file_by_part_size_async(
    path: impl AsRef<Path>,
    part_size: u64,
) -> TransferResult<Vec<FileChunk>> {
    check_part_size(part_size)?;
    let total_size = file_size_async(path.as_ref()).await?;
    split_by_part_size(total_size, part_size)
}

/// Inclusive end offset of the part starting at `begin`, with nominal size
/// `per`, in an object of `total` bytes.
///
/// A zero `per` yields the byte before `begin`, saturating at 0.
pub fn get_part_end(begin: u64, total: u64, per: u64) -> u64 {
    begin.saturating_add(per).min(total).saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_part_end() {
        assert_eq!(get_part_end(3, 10, 3), 5);
        assert_eq!(get_part_end(9, 10, 3), 9);
        assert_eq!(get_part_end(7, 10, 3), 9);
    }

    #[test]
    fn test_get_part_end_degenerate_inputs() {
        assert_eq!(get_part_end(0, 0, 0), 0);
        assert_eq!(get_part_end(0, 10, 0), 0);
        assert_eq!(get_part_end(4, 10, 0), 3);
        assert_eq!(get_part_end(u64::MAX - 1, u64::MAX, u64::MAX), u64::MAX - 1);
    }

    #[test]
    fn test_split_by_num_spreads_remainder() {
        let parts = split_by_part_num(10, 3).unwrap();
        let sizes: Vec<u64> = parts.iter().map(|p| p.size).collect();
        assert_eq!(sizes, vec![4, 3, 3]);
        let offsets: Vec<u64> = parts.iter().map(|p| p.offset).collect();
        assert_eq!(offsets, vec![0, 4, 7]);
    }

    #[test]
    fn test_split_empty_payload() {
        let parts = split_by_part_num(0, 4).unwrap();
        assert_eq!(parts.len(), 4);
        assert!(parts.iter().all(|p| p.offset == 0 && p.size == 0));

        assert!(split_by_part_size(0, 1024).unwrap().is_empty());
    }

    #[test]
    fn test_split_by_size_even() {
        let parts = split_by_part_size(4096, 1024).unwrap();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts.last().unwrap().size, 1024);
    }

    #[test]
    fn test_limits() {
        assert_eq!(
            split_by_part_num(100, 0).unwrap_err().code,
            ErrorCode::InvalidArgument
        );
        assert!(split_by_part_num(100, MAX_PART_COUNT).is_ok());
        assert!(split_by_part_num(100, MAX_PART_COUNT + 1).is_err());
        assert!(split_by_part_size(100, 0).is_err());
        assert!(split_by_part_size(10001, 1).is_err());
        assert!(split_by_part_size(10000, 1).is_ok());
    }
}
