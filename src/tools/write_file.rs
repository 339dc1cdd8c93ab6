use std::fs;
use std::path::Path;

use crate::error::PatchError;

pub fn write_file(path: &Path, content: &str) -> Result<(), PatchError> {
    fs::write(path, content).map_err(|source| PatchError::Write {
        path: path.to_path_buf(),
        source,
    })
}
