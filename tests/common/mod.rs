//! Common test utilities.

#![allow(dead_code)]

use std::io::Write;

use rand::distributions::Alphanumeric;
use rand::Rng;
use tempfile::NamedTempFile;

/// Installs a test-writer subscriber so `tracing` output shows up on failure.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("oss_transfer=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Random alphanumeric string of `len` characters.
pub fn rand_str(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Random lowercase string of `len` characters.
pub fn rand_low_str(len: usize) -> String {
    rand_str(len).to_lowercase()
}

/// Random bytes.
pub fn rand_bytes(len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    rand::thread_rng().fill(&mut data[..]);
    data
}

/// Writes `data` to a fresh temporary file.
pub fn temp_file_with(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

/// Temporary file of `len` random bytes.
pub fn temp_file_of_len(len: usize) -> (NamedTempFile, Vec<u8>) {
    let data = rand_bytes(len);
    let file = temp_file_with(&data);
    (file, data)
}
