// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Console output for the CLI, gated by a global verbosity flag.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::scoring::Severity;

/// Whether per-frame and summary lines are printed.
static VERBOSE: AtomicBool = AtomicBool::new(true);

/// Turn per-frame output on or off, usually from `--verbose`.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

/// Whether `verbose!` and `section!` print anything.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Colorize a feedback line according to its severity.
#[must_use]
pub fn paint(severity: Severity, text: &str) -> String {
    use colored::Colorize;
    match severity {
        Severity::Success => text.green().bold().to_string(),
        Severity::Info => text.cyan().to_string(),
        Severity::Warning => text.yellow().to_string(),
        Severity::Error => text.red().to_string(),
    }
}

/// Plain line on stdout, printed regardless of verbosity.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    }
}

/// Recoverable problem on stderr, such as a style fallback or a missing window.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        use colored::Colorize;
        eprintln!("{} {}", "WARNING ⚠️".yellow().bold(), format!($($arg)*));
    }
}

/// Fatal input or output problem on stderr.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        use colored::Colorize;
        eprintln!("{} {}", "Error:".red().bold(), format!($($arg)*));
    }
}

/// Completed action, such as saved reference outlines.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        use colored::Colorize;
        println!("{} {}", "✅".green(), format!($($arg)*));
    }
}

/// Highlighted line for a matched pose, printed regardless of verbosity.
#[macro_export]
macro_rules! celebrate {
    ($($arg:tt)*) => {
        use colored::Colorize;
        println!("{} {}", "🎉".magenta(), format!($($arg)*).magenta().bold());
    }
}

/// Line on stdout that only prints in verbose mode.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::cli::logging::is_verbose() {
            println!("{}", format!($($arg)*));
        }
    }
}

/// Blank line plus a cyan heading, verbose mode only.
#[macro_export]
macro_rules! section {
    ($($arg:tt)*) => {
        use colored::Colorize;
        if $crate::cli::logging::is_verbose() {
            println!();
            println!("{}", format!($($arg)*).cyan().bold());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_toggle() {
        set_verbose(true);
        assert!(is_verbose());

        set_verbose(false);
        assert!(!is_verbose());

        set_verbose(true);
        assert!(is_verbose());
    }

    #[test]
    fn test_paint_keeps_text() {
        colored::control::set_override(false);
        assert_eq!(paint(Severity::Warning, "Getting there"), "Getting there");
        colored::control::unset_override();
    }
}
