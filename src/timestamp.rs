//! Timestamp prefixes for console lines.

use chrono::Local;

/// Stock format: "05 Mar 14:21:09".
const DEFAULT_FORMAT: &str = "dd mmm HH:MM:ss";

/// Whether and how a sink prefixes each line with the current local time.
///
/// Custom formats use the token vocabulary of [`to_chrono_format`], not
/// chrono's `%`-directives, so existing format strings like `"yyyy-mm-dd"`
/// keep their meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Timestamp {
    /// No timestamp part.
    Disabled,
    /// The stock `"dd mmm HH:MM:ss"` rendering.
    #[default]
    Default,
    /// A custom token format string.
    Format(String),
}

impl Timestamp {
    /// Render the current local time, or `None` when disabled.
    pub fn render(&self) -> Option<String> {
        let tokens = match self {
            Timestamp::Disabled => return None,
            Timestamp::Default => DEFAULT_FORMAT,
            Timestamp::Format(tokens) => tokens.as_str(),
        };
        Some(
            Local::now()
                .format(&to_chrono_format(tokens))
                .to_string(),
        )
    }
}

impl From<&str> for Timestamp {
    fn from(tokens: &str) -> Self {
        Timestamp::Format(tokens.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(tokens: String) -> Self {
        Timestamp::Format(tokens)
    }
}

/// Translate a dateformat-style token string into a chrono format string.
///
/// Recognized tokens: `yyyy` `yy` `mmm` `mm` `dd` `HH` `MM` `ss`. Longer
/// tokens win over their prefixes (`yyyy` before `yy`, `mmm` before `mm`).
/// Anything unrecognized passes through literally, with `%` escaped so it
/// cannot smuggle a chrono directive.
pub fn to_chrono_format(tokens: &str) -> String {
    const TABLE: [(&str, &str); 8] = [
        ("yyyy", "%Y"),
        ("yy", "%y"),
        ("mmm", "%b"),
        ("mm", "%m"),
        ("dd", "%d"),
        ("HH", "%H"),
        ("MM", "%M"),
        ("ss", "%S"),
    ];

    let mut out = String::with_capacity(tokens.len() * 2);
    let mut rest = tokens;
    'scan: while !rest.is_empty() {
        for (token, directive) in TABLE {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(directive);
                rest = tail;
                continue 'scan;
            }
        }
        let mut chars = rest.chars();
        let Some(ch) = chars.next() else { break };
        if ch == '%' {
            out.push_str("%%");
        } else {
            out.push(ch);
        }
        rest = chars.as_str();
    }
    out
}
