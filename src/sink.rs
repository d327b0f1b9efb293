//! Message sink for human-readable progress and error output.
//!
//! The workflow reports through an injected sink rather than a process-global
//! logger so tests can capture output without touching stdout/stderr.

/// Destination for leveled, human-readable message lines.
pub trait MessageSink {
    /// Report a progress message.
    fn info(&mut self, message: &str);

    /// Report an error or warning message.
    fn error(&mut self, message: &str);
}

/// Sink that renders info lines to stdout and error lines to stderr.
pub struct ConsoleSink;

impl MessageSink for ConsoleSink {
    fn info(&mut self, message: &str) {
        println!("{}", message);
    }

    fn error(&mut self, message: &str) {
        eprintln!("Error: {}", message);
    }
}
