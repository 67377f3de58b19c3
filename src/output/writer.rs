//! Output abstraction layer
//!
//! Command handlers print through [`OutputWriter`] so that quiet mode and
//! tests can swap the destination.

use super::notices::{MessageLevel, Notice};
use colored::Colorize;

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use mediashelf::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new(false);
/// output.write("Normal message");
/// output.success("Operation completed!");
/// output.error("Something went wrong");
/// ```
pub trait OutputWriter {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);

    /// Route a notice to the writer method matching its level
    fn notice(&self, notice: &Notice) {
        match notice.level {
            MessageLevel::Success => self.success(&notice.message),
            MessageLevel::Error => self.error(&notice.message),
            MessageLevel::Warning => self.warning(&notice.message),
            MessageLevel::Info => self.info(&notice.message),
        }
    }
}

/// CLI implementation - writes to stdout/stderr
///
/// In quiet mode only results and errors are printed.
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "⚠️".yellow(), message);
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.dimmed());
        }
    }
}
