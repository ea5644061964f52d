//! CLI argument definitions
//!
//! Command-line options, config-file merging and validation into
//! [`RenameOptions`].

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigSortOrder};
use crate::consts::DEFAULT_SEPARATOR;
use crate::core::RenameOptions;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortOrder {
    /// Process subdirectories by name, A to Z (default)
    #[default]
    Asc,
    /// Process subdirectories by name, Z to A
    Desc,
    /// Keep the order returned by the directory listing
    Listing,
}

impl From<ConfigSortOrder> for SortOrder {
    fn from(order: ConfigSortOrder) -> Self {
        match order {
            ConfigSortOrder::Asc => SortOrder::Asc,
            ConfigSortOrder::Desc => SortOrder::Desc,
            ConfigSortOrder::Listing => SortOrder::Listing,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "dirstamp")]
#[command(
    about = "Prefix subdirectories with the modification date of a file inside them",
    version
)]
pub(crate) struct Cli {
    /// Folder containing the subdirectories to rename
    #[arg(short, long, value_name = "PATH")]
    pub(crate) path: Option<PathBuf>,

    /// File path, relative to each subdirectory, whose modification time is used
    #[arg(short, long, value_name = "RELPATH")]
    pub(crate) eval: Option<OsString>,

    /// Only rename the subdirectory with exactly this name
    #[arg(short, long, value_name = "NAME")]
    pub(crate) file: Option<OsString>,

    /// Show the planned renames without touching the filesystem
    #[arg(short = 'n', long)]
    pub(crate) dry_run: bool,

    /// Output the run report as JSON
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Order in which subdirectories are processed
    #[arg(short, long, value_enum, default_value = "asc")]
    pub(crate) order: SortOrder,

    /// Text placed between the date prefix and the original name [default: _]
    #[arg(long, value_name = "SEP")]
    pub(crate) separator: Option<String>,

    /// Enable debug output (show processing details)
    #[arg(long)]
    pub(crate) debug: bool,

    /// Ignore the config file
    #[arg(long)]
    pub(crate) no_config: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Boolean flags: config only applies if CLI left them off
        if !self.dry_run && config.dry_run {
            self.dry_run = true;
        }
        if !self.json && config.json {
            self.json = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        // Only override the order if CLI is at default
        if let Some(order) = config.order
            && self.order == SortOrder::Asc
        {
            self.order = order.into();
        }

        if self.separator.is_none() {
            self.separator = config.separator.clone();
        }

        self
    }

    /// Validate the invocation into the immutable options used for the run
    pub(crate) fn into_options(self) -> Result<RenameOptions, AppError> {
        let (Some(root), Some(eval)) = (self.path, self.eval) else {
            return Err(AppError::MissingArguments);
        };

        if eval.is_empty() {
            return Err(AppError::EmptyEvalPath);
        }
        let eval = PathBuf::from(eval);
        if eval.has_root() {
            return Err(AppError::AbsoluteEvalPath { path: eval });
        }

        let separator = self
            .separator
            .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string());
        if separator.is_empty() || separator.contains(std::path::is_separator) {
            return Err(AppError::InvalidSeparator { input: separator });
        }

        Ok(RenameOptions {
            root,
            eval,
            filter: self.file,
            order: self.order,
            separator,
            dry_run: self.dry_run,
        })
    }
}
