//! Logger front end: per-level methods, sink fan-out, and the `log` facade
//! bridge.

use crate::record::{Metadata, Record};
use crate::Level;

/// Destination for log records.
///
/// Implementations must never propagate failures to the caller: `log`
/// returns the completion signal, which is `true` even when the underlying
/// write failed. Delivery is attempted exactly once per record.
pub trait Sink: Send + Sync {
    fn log(&self, record: &Record) -> bool;
}

/// Forwards each record to every registered sink, in registration order.
///
/// Sinks are injected explicitly at construction; there is no process-wide
/// registry. The logger itself is stateless — each call builds one
/// [`Record`], hands it to the sinks, and reports completion.
#[derive(Default)]
pub struct Logger {
    sinks: Vec<Box<dyn Sink>>,
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    pub fn new(sinks: Vec<Box<dyn Sink>>) -> Self {
        Self { sinks }
    }

    /// Dispatch one record to all sinks. Always reports completion
    /// (`true`); logging never raises to the caller.
    pub fn log(
        &self,
        level: Level,
        message: impl Into<String>,
        metadata: impl Into<Option<Metadata>>,
    ) -> bool {
        let mut record = Record::new(level, message);
        if let Some(metadata) = metadata.into() {
            record = record.with_metadata(metadata);
        }
        for sink in &self.sinks {
            sink.log(&record);
        }
        true
    }

    /// Diagnostic output, hidden from stdout by default.
    pub fn debug(&self, message: impl Into<String>, metadata: impl Into<Option<Metadata>>) -> bool {
        self.log(Level::Debug, message, metadata)
    }

    /// Chatty progress output.
    pub fn verbose(
        &self,
        message: impl Into<String>,
        metadata: impl Into<Option<Metadata>>,
    ) -> bool {
        self.log(Level::Verbose, message, metadata)
    }

    pub fn info(&self, message: impl Into<String>, metadata: impl Into<Option<Metadata>>) -> bool {
        self.log(Level::Info, message, metadata)
    }

    /// A completed operation worth celebrating with a checkmark.
    pub fn success(
        &self,
        message: impl Into<String>,
        metadata: impl Into<Option<Metadata>>,
    ) -> bool {
        self.log(Level::Success, message, metadata)
    }

    pub fn warn(&self, message: impl Into<String>, metadata: impl Into<Option<Metadata>>) -> bool {
        self.log(Level::Warn, message, metadata)
    }

    /// Errors; pair with [`Metadata::with_stack`] to print a stack trace in
    /// place of the message.
    pub fn error(&self, message: impl Into<String>, metadata: impl Into<Option<Metadata>>) -> bool {
        self.log(Level::Error, message, metadata)
    }
}

/// Assembles a [`Logger`] from an ordered list of sinks.
#[derive(Default)]
pub struct LoggerBuilder {
    sinks: Vec<Box<dyn Sink>>,
}

impl LoggerBuilder {
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn build(self) -> Logger {
        Logger::new(self.sinks)
    }
}

/// Bridge to the `log` facade, so a [`Logger`] can back the `log::info!`
/// family an application already uses.
///
/// `log` has no success level; trace maps to verbose, and success stays
/// reachable only through the native API.
impl log::Log for Logger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let level = match record.level() {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug => Level::Debug,
            log::Level::Trace => Level::Verbose,
        };
        self.log(level, record.args().to_string(), None);
    }

    fn flush(&self) {
        // Sinks write whole lines and flush as they go.
    }
}
