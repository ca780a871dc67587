//! Per-call log records and their optional metadata.

use std::fmt;

use crate::Level;

/// One log call: level, message, optional metadata.
///
/// Records are built per call and handed to each sink by reference; nothing
/// is retained after the call returns.
#[derive(Debug, Clone)]
pub struct Record {
    pub level: Level,
    pub message: String,
    pub metadata: Option<Metadata>,
}

impl Record {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Optional structured data accompanying a log call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Extra bracketed label, shown after the sink's own label.
    pub label: Option<String>,
    /// Stack trace. For error-level records it replaces the message body.
    pub stack: Option<Stack>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_stack(mut self, stack: impl Into<Stack>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.stack.is_none()
    }
}

/// Fallback rendering used when a record carries metadata but no message:
/// `key=value` pairs for whichever fields are present.
impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        if let Some(label) = &self.label {
            write!(f, "label={label}")?;
            wrote = true;
        }
        if let Some(stack) = &self.stack {
            if wrote {
                f.write_str(" ")?;
            }
            write!(f, "stack={stack}")?;
        }
        Ok(())
    }
}

/// A stack trace: either preformatted text or individual frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stack {
    Text(String),
    Frames(Vec<String>),
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stack::Text(s) => f.write_str(s),
            Stack::Frames(frames) => f.write_str(&frames.join("\n")),
        }
    }
}

impl From<String> for Stack {
    fn from(s: String) -> Self {
        Stack::Text(s)
    }
}

impl From<&str> for Stack {
    fn from(s: &str) -> Self {
        Stack::Text(s.to_string())
    }
}

impl From<Vec<String>> for Stack {
    fn from(frames: Vec<String>) -> Self {
        Stack::Frames(frames)
    }
}

impl From<Vec<&str>> for Stack {
    fn from(frames: Vec<&str>) -> Self {
        Stack::Frames(frames.into_iter().map(String::from).collect())
    }
}
