// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use std::io;
use std::path::Path;

/// Refuse to clobber an existing file unless `force` is set.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    Err(AppError::from(io::Error::other(format!(
        "Export cancelled: '{}' already exists (use --force to overwrite)",
        path.display()
    ))))
}
