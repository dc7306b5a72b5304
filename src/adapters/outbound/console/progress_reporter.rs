use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with rendered output on stdout.
pub struct StderrProgressReporter {
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// Reporter that drops progress chatter but still prints warnings
    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_warning(&self, message: &str) {
        eprintln!("{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    fn report_completion(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "✅".green(), message);
        }
    }
}
