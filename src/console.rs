//! Console sink: line assembly, colorization, and stdout/stderr routing.

use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::record::Record;
use crate::timestamp::Timestamp;
use crate::{Level, Sink};

/// A color function: raw text in, decorated text out (typically wrapped in
/// ANSI escapes).
pub type ColorFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Colorizers keyed by name.
///
/// Symbol colorization looks up the level name (`"error"`, `"warn"`, ...);
/// timestamps look up `"gray"`. A missing entry means the text passes
/// through unstyled — absence is the "no colorizer" signal, there is no
/// error path for an unconfigured color.
#[derive(Default)]
pub struct ColorMap {
    entries: HashMap<String, ColorFn>,
}

impl ColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a colorizer under `key`, replacing any previous entry.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        color: impl Fn(&str) -> String + Send + Sync + 'static,
    ) {
        self.entries.insert(key.into(), Box::new(color));
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(
        mut self,
        key: impl Into<String>,
        color: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.set(key, color);
        self
    }

    /// Apply the colorizer registered under `key`, or return the text
    /// unchanged when there is none.
    pub fn apply(&self, key: &str, text: &str) -> String {
        match self.entries.get(key) {
            Some(color) => color(text),
            None => text.to_string(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl fmt::Debug for ColorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("ColorMap").field("keys", &keys).finish()
    }
}

/// Construction options for a [`ConsoleSink`].
///
/// Immutable once the sink is built, except `silent`, which stays togglable
/// through [`ConsoleSink::set_silent`].
#[derive(Debug, Default)]
pub struct ConsoleOptions {
    /// Timestamp prefix mode. Defaults to the stock format.
    pub timestamp: Timestamp,
    /// Colorizers for symbols and timestamps.
    pub colors: ColorMap,
    /// Sink-level label, bracketed on every line.
    pub label: Option<String>,
    /// Start muted.
    pub silent: bool,
    /// Route debug records to stdout instead of stderr.
    pub debug_stdout: bool,
}

impl ConsoleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<Timestamp>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    pub fn with_colors(mut self, colors: ColorMap) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn with_debug_stdout(mut self, debug_stdout: bool) -> Self {
        self.debug_stdout = debug_stdout;
        self
    }
}

/// Which stream a record lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Stdout,
    Stderr,
}

/// The stream pair sits behind one mutex so concurrent callers cannot
/// interleave partial lines.
struct Streams {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
}

/// Writes one formatted line per record to stdout or stderr.
///
/// Line shape: `timestamp  symbol  [sink label]  [record label]  body`,
/// with absent parts skipped and the survivors joined by single spaces.
/// Warn and error records go to stderr; debug goes to stderr unless
/// `debug_stdout` was set; everything else goes to stdout.
///
/// Write failures are swallowed. Logging is best-effort and must never
/// become a source of process failure, so [`Sink::log`] reports completion
/// (`true`) no matter what the streams did.
pub struct ConsoleSink {
    timestamp: Timestamp,
    colors: ColorMap,
    label: Option<String>,
    silent: AtomicBool,
    debug_stdout: bool,
    streams: Mutex<Streams>,
    on_logged: Option<Box<dyn Fn(&Record) + Send + Sync>>,
}

impl ConsoleSink {
    /// Build a sink bound to the process stdout/stderr.
    pub fn new(options: ConsoleOptions) -> Self {
        Self::with_streams(options, Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Build a sink bound to explicit streams. Tests use this to capture
    /// output; embedders can use it to redirect the console elsewhere.
    pub fn with_streams(
        options: ConsoleOptions,
        out: Box<dyn Write + Send>,
        err: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            timestamp: options.timestamp,
            colors: options.colors,
            label: options.label,
            silent: AtomicBool::new(options.silent),
            debug_stdout: options.debug_stdout,
            streams: Mutex::new(Streams { out, err }),
            on_logged: None,
        }
    }

    /// Register an observer invoked after each successful write. Muted
    /// records do not notify.
    pub fn on_logged(mut self, observer: impl Fn(&Record) + Send + Sync + 'static) -> Self {
        self.on_logged = Some(Box::new(observer));
        self
    }

    /// Mute or unmute the sink.
    pub fn set_silent(&self, silent: bool) {
        self.silent.store(silent, Ordering::Relaxed);
    }

    pub fn is_silent(&self) -> bool {
        self.silent.load(Ordering::Relaxed)
    }

    fn target(&self, level: Level) -> Target {
        match level {
            Level::Warn | Level::Error => Target::Stderr,
            Level::Debug if !self.debug_stdout => Target::Stderr,
            _ => Target::Stdout,
        }
    }

    /// Assemble the output line for a record, without the trailing newline.
    fn format_line(&self, record: &Record) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(5);
        if let Some(timestamp) = self.timestamp.render() {
            parts.push(self.colors.apply("gray", &timestamp));
        }
        parts.push(
            self.colors
                .apply(record.level.as_str(), record.level.symbol()),
        );
        if let Some(label) = &self.label {
            parts.push(format!("[{label}]"));
        }
        if let Some(label) = record.metadata.as_ref().and_then(|m| m.label.as_deref()) {
            parts.push(format!("[{label}]"));
        }
        if let Some(body) = message_body(record) {
            parts.push(body);
        }
        parts.join(" ")
    }
}

impl Sink for ConsoleSink {
    fn log(&self, record: &Record) -> bool {
        if self.is_silent() {
            return true;
        }
        let line = self.format_line(record);
        {
            let mut streams = self.streams.lock();
            let stream = match self.target(record.level) {
                Target::Stdout => &mut streams.out,
                Target::Stderr => &mut streams.err,
            };
            // Best effort: a failed console write never fails the caller.
            let _ = writeln!(stream, "{line}");
            let _ = stream.flush();
        }
        if let Some(observer) = &self.on_logged {
            observer(record);
        }
        true
    }
}

impl fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("timestamp", &self.timestamp)
            .field("colors", &self.colors)
            .field("label", &self.label)
            .field("silent", &self.is_silent())
            .field("debug_stdout", &self.debug_stdout)
            .finish_non_exhaustive()
    }
}

/// Pick the message body for a record.
///
/// An error-level stack replaces the message outright. An empty message
/// falls back to the metadata rendering; with neither, the record has no
/// body slot at all.
fn message_body(record: &Record) -> Option<String> {
    if record.level == Level::Error
        && let Some(stack) = record.metadata.as_ref().and_then(|m| m.stack.as_ref())
    {
        return Some(stack.to_string());
    }
    if !record.message.is_empty() {
        return Some(record.message.clone());
    }
    match &record.metadata {
        Some(meta) if !meta.is_empty() => Some(meta.to_string()),
        _ => None,
    }
}
