//! Candidate discovery: the immediate, non-hidden subdirectories of the root

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use crate::cli::SortOrder;
use crate::consts::HIDDEN_PREFIX;
use crate::error::AppError;
use crate::utils::debug_log;

use super::types::Candidate;

pub(crate) fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().starts_with(&[HIDDEN_PREFIX])
}

/// List the subdirectories of `root` eligible for renaming.
///
/// Regular files, hidden entries and (when `filter` is set) every entry not
/// named exactly `filter` are dropped. Any failure to read `root` itself is
/// fatal for the run.
pub(crate) fn list_candidates(
    root: &Path,
    filter: Option<&OsStr>,
    order: SortOrder,
) -> Result<Vec<Candidate>, AppError> {
    let invalid_root = |source: std::io::Error| AppError::InvalidRootPath {
        path: root.to_path_buf(),
        source,
    };

    let mut candidates = Vec::new();
    for entry in fs::read_dir(root).map_err(invalid_root)? {
        let entry = entry.map_err(invalid_root)?;
        let name = entry.file_name();

        // Follows symlinks, matching a plain `is_dir` check on the path
        if !entry.path().is_dir() {
            continue;
        }
        if let Some(wanted) = filter
            && name.as_os_str() != wanted
        {
            continue;
        }
        if is_hidden(&name) {
            debug_log!("skipping hidden entry {}", name.to_string_lossy());
            continue;
        }
        candidates.push(Candidate { name });
    }

    match order {
        SortOrder::Asc => candidates.sort_by(|a, b| a.name.cmp(&b.name)),
        SortOrder::Desc => candidates.sort_by(|a, b| b.name.cmp(&a.name)),
        SortOrder::Listing => {}
    }

    Ok(candidates)
}
