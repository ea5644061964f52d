pub(crate) mod date;
pub(crate) mod debug;

pub(crate) use date::date_prefix;
pub(crate) use debug::{debug_enabled, debug_log, set_debug};
