//! The properties-file codec: `key=value` lines with `#` comments.
//!
//! Built atop the table container and rendered through the string buffer.
//! The format is bit-exact: every comment becomes a `# text` line, emitted
//! before one `key=value` line per entry.
use alloc::{
    borrow::ToOwned,
    string::{String, ToString},
    vec::Vec,
};

use crate::{
    strbuf::StringBuffer,
    table::Table,
    value::{Key, Value},
};

/// A parsed properties file: string-keyed data plus its comment lines.
///
/// # Examples
///
/// ```
/// use tabula::Properties;
///
/// let props = Properties::parse("# generated\nhost = example.com\nport=80\n");
/// assert_eq!(props.get("host"), Some("example.com"));
/// assert_eq!(props.get("port"), Some("80"));
/// assert_eq!(props.comments()[0], "generated");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Properties {
    data: Table,
    comments: Vec<String>,
}

impl Properties {
    /// Creates an empty properties set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses properties text.
    ///
    /// `#`-prefixed lines are collected as comments in order; blank lines
    /// are skipped; every other line splits on its first `=` with both
    /// sides trimmed, and a line without `=` maps the whole line to the
    /// empty value. Handles CRLF input because each line is trimmed.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut props = Self::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(comment) = line.strip_prefix('#') {
                props.comments.push(comment.trim().to_owned());
                continue;
            }
            let (key, value) = match line.split_once('=') {
                Some((key, value)) => (key.trim(), value.trim()),
                None => (line, ""),
            };
            props.data.set(Key::from(key), Value::from(value));
        }
        props
    }

    /// Renders the properties text: comments first, then one `key=value`
    /// line per entry.
    ///
    /// Keys are stripped of internal whitespace; values are trimmed and
    /// stripped of embedded newlines, so every entry stays on one line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut buf = StringBuffer::new();
        for comment in &self.comments {
            buf.append("# ").append(comment.as_str()).append("\n");
        }
        for (key, value) in self.data.iter() {
            let key: String = key.to_string().split_whitespace().collect();
            let value = value.to_string();
            let value = value.trim().replace(['\r', '\n'], "");
            buf.append(key).append("=").append(value).append("\n");
        }
        buf.render()
    }

    /// Looks up a property value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        match self.data.get(&Key::from(key)) {
            Some(Value::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Sets a property, preserving the entry's position when it already
    /// exists.
    pub fn set(&mut self, key: &str, value: &str) {
        self.data.set(Key::from(key), Value::from(value));
    }

    /// Removes a property; `true` if it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.data.remove(&Key::from(key)).is_some()
    }

    /// The comment lines, in file order, without their `#` markers.
    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Appends a comment line.
    pub fn add_comment(&mut self, comment: &str) {
        self.comments.push(comment.to_owned());
    }

    /// The backing table of entries, in file order.
    #[must_use]
    pub fn data(&self) -> &Table {
        &self.data
    }

    /// The number of data entries (comments not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if there are no data entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reads and parses a properties file; `None` when the file cannot be
    /// read.
    #[cfg(feature = "fs")]
    #[must_use]
    pub fn load(path: &str) -> Option<Self> {
        crate::fs::read_all(path).map(|text| Self::parse(&text))
    }

    /// Renders and writes the properties file; `false` on any I/O failure.
    #[cfg(feature = "fs")]
    pub fn store(&self, path: &str) -> bool {
        crate::fs::write(path, &self.render())
    }
}
