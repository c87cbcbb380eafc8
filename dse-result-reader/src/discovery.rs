//! Result file discovery
//!
//! Scans a directory (non-recursively) for the final result files of one
//! decision model.

use crate::config::DecisionModel;
use crate::types::{ReportError, Result};
use std::fs;
use std::path::Path;

/// List the result files in `dir` that belong to `model`
///
/// Names are returned relative to `dir`, sorted lexicographically so that
/// repeated runs report in the same order. An empty result is an error:
/// a silent empty report would hide a wrong directory or tag.
pub fn discover_result_files(dir: &Path, model: &DecisionModel) -> Result<Vec<String>> {
    log::debug!("Scanning {:?} for tag {}", dir, model.tag);

    let entries = fs::read_dir(dir).map_err(|source| ReportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ReportError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        // Non UTF-8 names can't contain the tag anyway
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };

        let file_type = entry.file_type().map_err(|source| ReportError::Io {
            path: entry.path(),
            source,
        })?;
        if !file_type.is_file() {
            log::trace!("Skipping non-file entry {}", name);
            continue;
        }

        if model.matches_file_name(&name) {
            files.push(name);
        } else {
            log::trace!("Skipping {}", name);
        }
    }

    if files.is_empty() {
        return Err(ReportError::NotFound {
            dir: dir.to_path_buf(),
            tag: model.tag.clone(),
        });
    }

    files.sort();
    log::info!("Found {} result file(s) in {:?}", files.len(), dir);
    Ok(files)
}
