//! Core data types for a rename run

use std::ffi::OsString;
use std::path::PathBuf;

use crate::cli::SortOrder;
use crate::error::RenameError;

/// Immutable settings for one run, built once from the command line
#[derive(Debug, Clone)]
pub(crate) struct RenameOptions {
    pub(crate) root: PathBuf,
    /// Path of the evaluation file, relative to each subdirectory
    pub(crate) eval: PathBuf,
    /// Restrict the run to the subdirectory with exactly this name
    pub(crate) filter: Option<OsString>,
    pub(crate) order: SortOrder,
    pub(crate) separator: String,
    pub(crate) dry_run: bool,
}

/// A subdirectory of the root that will be considered for renaming
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub(crate) name: OsString,
}

/// A successful (or, in dry-run mode, planned) rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Renamed {
    pub(crate) new_name: OsString,
    /// `YYYYMMDD` prefix taken from the evaluation file
    pub(crate) date: String,
}

/// Result for a single candidate
#[derive(Debug)]
pub(crate) struct Outcome {
    pub(crate) name: OsString,
    pub(crate) result: Result<Renamed, RenameError>,
}

/// Everything a run produced, in processing order
#[derive(Debug)]
pub(crate) struct RunReport {
    pub(crate) root: PathBuf,
    pub(crate) eval: PathBuf,
    pub(crate) dry_run: bool,
    pub(crate) outcomes: Vec<Outcome>,
}

impl RunReport {
    pub(crate) fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub(crate) fn failure_count(&self) -> usize {
        self.outcomes.len() - self.success_count()
    }

    #[cfg(test)]
    pub(crate) fn failures(&self) -> impl Iterator<Item = &RenameError> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().err())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_partition_outcomes() {
        let report = RunReport {
            root: PathBuf::from("/saves"),
            eval: PathBuf::from("level.dat"),
            dry_run: false,
            outcomes: vec![
                Outcome {
                    name: "World1".into(),
                    result: Ok(Renamed {
                        new_name: "20140326_World1".into(),
                        date: "20140326".to_string(),
                    }),
                },
                Outcome {
                    name: "World3".into(),
                    result: Err(RenameError::MissingEvalFile {
                        path: PathBuf::from("/saves/World3/level.dat"),
                    }),
                },
            ],
        };
        assert_eq!(report.success_count(), 1);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(
            report.success_count() + report.failure_count(),
            report.outcomes.len()
        );
        assert_eq!(report.failures().count(), 1);
    }
}
