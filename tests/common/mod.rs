//! Shared helpers for integration tests.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use glyph_log::{ConsoleOptions, ConsoleSink};

/// Shared in-memory stream standing in for stdout/stderr.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("captured output was not UTF-8")
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Build a sink whose streams are captures instead of the real console.
pub fn capture_sink(options: ConsoleOptions) -> (ConsoleSink, Capture, Capture) {
    let out = Capture::default();
    let err = Capture::default();
    let sink = ConsoleSink::with_streams(options, Box::new(out.clone()), Box::new(err.clone()));
    (sink, out, err)
}
