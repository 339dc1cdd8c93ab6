use std::fs::{self, metadata};
use std::io;
use std::path::Path;

use crate::error::PatchError;

const MAX_FILE_SIZE: u64 = 32 * 1024 * 1024; //32MB

/// Reads the whole manifest as UTF-8 text.
pub fn read_file(path: &Path) -> Result<String, PatchError> {
    let unreadable = |source| PatchError::ManifestUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let metadata = metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PatchError::ManifestMissing {
            path: path.to_path_buf(),
        },
        _ => unreadable(e),
    })?;
    //check size
    if metadata.len() > MAX_FILE_SIZE {
        return Err(unreadable(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "file size too large: {} bytes (max: {} bytes)",
                metadata.len(),
                MAX_FILE_SIZE
            ),
        )));
    }

    // invalid UTF-8 surfaces as ErrorKind::InvalidData
    fs::read_to_string(path).map_err(unreadable)
}
