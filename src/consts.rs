/// Date prefix format prepended to directory names: "20140326"
pub(crate) const DATE_PREFIX_FORMAT: &str = "%Y%m%d";

/// Default text placed between the date prefix and the original name
pub(crate) const DEFAULT_SEPARATOR: &str = "_";

/// Entries starting with this character are treated as hidden and never touched
pub(crate) const HIDDEN_PREFIX: u8 = b'.';

pub(crate) const USAGE_HINT: &str = "Please specify a path (-p/--path) and eval file (-e/--eval)";
