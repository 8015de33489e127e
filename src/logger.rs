// Leveled, colored log output for `jetsetter`.
// Everything goes to stderr so stdout stays free for prompts.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// `log_info!` for normal progress messages.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => (eprintln!("{} {}", ::colored::Colorize::bright_green("[INFO]"), format!($($arg)*)));
}

/// `log_warn!` for conditions the user should notice but that do not stop the run.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => (eprintln!("{} {}", ::colored::Colorize::bright_yellow("[WARN]"), format!($($arg)*)));
}

/// `log_error!` for fatal conditions, printed right before the process exits.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => (eprintln!("{} {}", ::colored::Colorize::bright_red("[ERROR]"), format!($($arg)*)));
}

/// `log_debug!` is silent unless `--debug` was passed.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::is_debug_enabled() {
            eprintln!("{} {}", ::colored::Colorize::dimmed("[DEBUG]"), format!($($arg)*));
        }
    };
}

static DEBUG_ENABLED: OnceLock<AtomicBool> = OnceLock::new();

/// Sets the global debug switch. Call once from `main`.
pub fn init(debug: bool) {
    DEBUG_ENABLED
        .get_or_init(|| AtomicBool::new(debug))
        .store(debug, Ordering::Relaxed);

    log_debug!("Logger initialized in DEBUG mode");
}

/// Whether `log_debug!` output is enabled. Defaults to `false` if `init` was never called.
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED
        .get()
        .map(|f| f.load(Ordering::Relaxed))
        .unwrap_or(false)
}
