//! Folder enumeration for the clipgraph binary.
//!
//! The core never touches the filesystem; this module turns a folder of
//! animation files into the ordered name list it consumes.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// Failure to obtain the clip collection — the only fatal error in the tool.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to walk animation folder {path}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Collect clip names under `folder`: every file, recursively, with the
/// extension stripped. Entries are visited in lexical order so the collection
/// order (and with it lookup tie-breaking) is stable across platforms.
pub fn scan_clip_names(folder: &Path) -> Result<Vec<String>, ScanError> {
    let mut names = Vec::new();
    for entry in WalkDir::new(folder).sort_by_file_name() {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: folder.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        match entry.path().file_stem().and_then(|stem| stem.to_str()) {
            Some(stem) => names.push(stem.to_string()),
            None => log::warn!("skipping non-UTF-8 file name {:?}", entry.path()),
        }
    }
    log::info!("found {} clips under {}", names.len(), folder.display());
    Ok(names)
}
