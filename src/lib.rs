//! Leveled console logging with colorized, symbol-prefixed line output.
//!
//! This crate formats one line per log call — timestamp, level symbol,
//! optional bracketed label(s), message or stack trace — and routes it to
//! stdout or stderr by level. It includes:
//!
//! - Six levels (debug, verbose, info, success, warn, error), each with a
//!   fixed-width display symbol
//! - Pluggable colorization via caller-supplied color functions
//! - dateformat-style timestamp tokens (`"dd mmm HH:MM:ss"`)
//! - A [`Logger`] that fans records out to injected [`Sink`]s and doubles
//!   as a backend for the `log` facade
//!
//! Logging never raises: write failures are swallowed and every call
//! reports completion, so the logger cannot become a source of process
//! failure.
//!
//! # Example
//!
//! ```
//! use glyph_log::{ConsoleOptions, ConsoleSink, Logger, Metadata};
//!
//! let sink = ConsoleSink::new(ConsoleOptions::new().with_label("app"));
//! let logger = Logger::builder().sink(sink).build();
//!
//! logger.info("starting up", None);
//! logger.success("listening on :8080", None);
//! logger.error("request failed", Metadata::new().with_label("http"));
//! ```

pub mod console;
pub mod level;
pub mod logger;
pub mod record;
pub mod timestamp;

// Re-export the public surface for convenience
pub use console::{ColorFn, ColorMap, ConsoleOptions, ConsoleSink};
pub use level::{Level, ParseLevelError};
pub use logger::{Logger, LoggerBuilder, Sink};
pub use record::{Metadata, Record, Stack};
pub use timestamp::{Timestamp, to_chrono_format};
