//! Renaming a candidate after the modification date of its evaluation file

use std::ffi::{OsStr, OsString};
use std::fs;

use crate::error::{AppError, RenameError};
use crate::utils::{date_prefix, debug_log};

use super::scan::list_candidates;
use super::types::{Candidate, Outcome, RenameOptions, Renamed, RunReport};

/// Build `<date><separator><name>`
pub(crate) fn stamped_name(date: &str, separator: &str, name: &OsStr) -> OsString {
    let mut stamped = OsString::with_capacity(date.len() + separator.len() + name.len());
    stamped.push(date);
    stamped.push(separator);
    stamped.push(name);
    stamped
}

/// Rename one candidate directory, or only plan it in dry-run mode.
pub(crate) fn rename_candidate(
    candidate: &Candidate,
    options: &RenameOptions,
) -> Result<Renamed, RenameError> {
    let dir = options.root.join(&candidate.name);
    let eval_path = dir.join(&options.eval);

    let metadata = match fs::metadata(&eval_path) {
        Ok(m) if m.is_file() => m,
        _ => return Err(RenameError::MissingEvalFile { path: eval_path }),
    };
    let modified = match metadata.modified() {
        Ok(t) => t,
        Err(source) => {
            return Err(RenameError::Timestamp {
                path: eval_path,
                source,
            });
        }
    };

    let date = date_prefix(modified);
    let new_name = stamped_name(&date, &options.separator, &candidate.name);
    let target = options.root.join(&new_name);

    // Never replace an existing entry, not even an empty directory
    if fs::symlink_metadata(&target).is_ok() {
        return Err(RenameError::TargetExists { path: eval_path });
    }
    if !options.dry_run
        && let Err(source) = fs::rename(&dir, &target)
    {
        return Err(RenameError::Rename {
            path: eval_path,
            source,
        });
    }

    Ok(Renamed { new_name, date })
}

/// Process every candidate under the root once, in the configured order.
///
/// Only a root that cannot be listed fails the run; per-directory problems
/// are recorded in the report. `on_outcome` sees each result as soon as it
/// is produced.
pub(crate) fn run(
    options: &RenameOptions,
    mut on_outcome: impl FnMut(&Outcome),
) -> Result<RunReport, AppError> {
    let candidates = list_candidates(&options.root, options.filter.as_deref(), options.order)?;
    debug_log!(
        "{} candidate(s) in {}",
        candidates.len(),
        options.root.display()
    );

    let outcomes = candidates
        .into_iter()
        .map(|candidate| {
            let result = rename_candidate(&candidate, options);
            match &result {
                Ok(renamed) => debug_log!(
                    "{} -> {}",
                    candidate.name.to_string_lossy(),
                    renamed.new_name.to_string_lossy()
                ),
                Err(e) => debug_log!("{}: {}", candidate.name.to_string_lossy(), e.status()),
            }
            let outcome = Outcome {
                name: candidate.name,
                result,
            };
            on_outcome(&outcome);
            outcome
        })
        .collect();

    Ok(RunReport {
        root: options.root.clone(),
        eval: options.eval.clone(),
        dry_run: options.dry_run,
        outcomes,
    })
}
