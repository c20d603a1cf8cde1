//! Per-part content digests.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use md5::{Digest, Md5};

use crate::error::{ErrorCode, TransferError, TransferResult};
use crate::models::FileChunk;
use crate::stream::LimitedReadCloser;

/// Base64-encoded MD5 of everything `reader` yields, as sent in `Content-MD5`.
pub fn content_md5<R: Read>(mut reader: R) -> TransferResult<(String, u64)> {
    let mut hasher = Md5::new();
    let mut buf = [0u8; 8192];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        hasher.update(&buf[..n]);
        total += n as u64;
    }
    Ok((BASE64.encode(hasher.finalize()), total))
}

/// `Content-MD5` value for the bytes `chunk` covers in the file at `path`.
pub fn part_content_md5(path: impl AsRef<Path>, chunk: &FileChunk) -> TransferResult<String> {
    let mut file = File::open(path.as_ref())?;
    file.seek(SeekFrom::Start(chunk.offset))?;

    let (digest, read) = content_md5(LimitedReadCloser::new(&mut file, chunk.size))?;
    if read != chunk.size {
        return Err(TransferError::with_message(
            ErrorCode::IoError,
            format!(
                "part {} expected {} bytes at offset {}, file provided {}",
                chunk.number, chunk.size, chunk.offset, read
            ),
        ));
    }
    Ok(digest)
}
