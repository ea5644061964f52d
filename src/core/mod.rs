//! Core module - candidate discovery and renaming

mod renamer;
mod scan;
mod types;

pub(crate) use renamer::run;
pub(crate) use types::{Outcome, RenameOptions, RunReport};
#[cfg(test)]
pub(crate) use types::Renamed;
