use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG: AtomicBool = AtomicBool::new(false);

pub(crate) fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

pub(crate) fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

/// Print a `[debug]` line on stderr when `--debug` is on
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::utils::debug_enabled() {
            eprintln!("[debug] {}", format_args!($($arg)*));
        }
    }
}

pub(crate) use debug_log;
