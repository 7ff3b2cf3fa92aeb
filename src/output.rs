use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::Path,
};

use log::debug;

use crate::error::{ManifestError, Result};

/// Replaces whatever is at `output_path` with `contents`.
pub(crate) fn save_manifest(output_path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating {parent:?}");
            std::fs::create_dir_all(parent).map_err(|e| ManifestError::fs(parent, e))?;
        }
    }

    let fd = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(output_path)
        .map_err(|e| ManifestError::fs(output_path, e))?;
    let mut writer = BufWriter::new(fd);
    writer
        .write_all(contents.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| ManifestError::fs(output_path, e))?;

    Ok(())
}
