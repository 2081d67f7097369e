//! Moving processed inputs to the archive or error directory

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{Error, Result};

/// Move `source` into `dir`, keeping its file name.
///
/// Falls back to copy-and-remove when a plain rename fails, which is the
/// case when `dir` lives on another filesystem.
pub fn move_into(source: &Path, dir: &Path) -> Result<PathBuf> {
    let name = source
        .file_name()
        .ok_or_else(|| Error::moving(source, dir, "source has no file name"))?;
    let target = dir.join(name);

    if let Err(rename_err) = fs::rename(source, &target) {
        warn!(
            from = %source.display(),
            to = %target.display(),
            error = %rename_err,
            "Rename failed, falling back to copy"
        );
        fs::copy(source, &target)
            .and_then(|_| fs::remove_file(source))
            .map_err(|e| Error::moving(source, &target, format!("{rename_err}; copy: {e}")))?;
    }

    debug!(from = %source.display(), to = %target.display(), "Moved file");
    Ok(target)
}
