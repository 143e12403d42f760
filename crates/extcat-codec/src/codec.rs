//! Paired encoder/decoder for one document syntax
//!
//! Every codec applies the same normalization on output:
//!
//! - object properties and map entries are sorted alphabetically, at every
//!   nesting level, so output is deterministic
//! - output is indented for humans
//! - values are routed through `serde_json::Value` before being written, so
//!   number formatting never depends on the host locale and timestamps keep
//!   whatever UTC form their `Serialize` impl produced
//!
//! On input a codec is tolerant: unknown fields are left to the target type
//! (document types in this workspace never deny them), comments are
//! accepted, and an empty document is rejected instead of decoding to a
//! default.

use std::io::{Read, Write};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{Error, Result, Syntax};

/// A stateless codec for one [`Syntax`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    syntax: Syntax,
}

impl Codec {
    pub const fn new(syntax: Syntax) -> Self {
        Self { syntax }
    }

    pub const fn json() -> Self {
        Self::new(Syntax::Json)
    }

    pub const fn yaml() -> Self {
        Self::new(Syntax::Yaml)
    }

    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    /// Encode a document to normalized text.
    pub fn to_string<T: Serialize + ?Sized>(&self, document: &T) -> Result<String> {
        let value = serde_json::to_value(document)
            .map_err(|e| Error::serialize(self.syntax, e.to_string()))?;
        let value = sort_value(&value);

        match self.syntax {
            Syntax::Json => {
                let mut text = serde_json::to_string_pretty(&value)
                    .map_err(|e| Error::serialize(self.syntax, e.to_string()))?;
                text.push('\n');
                Ok(text)
            }
            Syntax::Yaml => serde_yaml::to_string(&value)
                .map_err(|e| Error::serialize(self.syntax, e.to_string())),
        }
    }

    /// Encode a document into an open writer.
    ///
    /// The text is fully encoded before the first byte is written, so an
    /// encoding failure never reaches the sink.
    pub fn to_writer<T, W>(&self, document: &T, mut writer: W) -> Result<()>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        let text = self.to_string(document)?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Decode a document from text.
    pub fn from_str<T: DeserializeOwned>(&self, text: &str) -> Result<T> {
        if text.trim().is_empty() {
            return Err(Error::parse(self.syntax, "empty document"));
        }

        match self.syntax {
            Syntax::Json => {
                let stripped = strip_json_comments(text);
                if stripped.trim().is_empty() {
                    return Err(Error::parse(self.syntax, "empty document"));
                }
                Ok(serde_json::from_str(&stripped)?)
            }
            Syntax::Yaml => {
                if !yaml_has_content(text) {
                    return Err(Error::parse(self.syntax, "empty document"));
                }
                Ok(serde_yaml::from_str(text)?)
            }
        }
    }

    /// Decode a document from a reader.
    ///
    /// The reader is drained to completion before decoding.
    pub fn from_reader<T, R>(&self, mut reader: R) -> Result<T>
    where
        T: DeserializeOwned,
        R: Read,
    {
        let mut text = String::new();
        reader.read_to_string(&mut text).map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                Error::parse(self.syntax, "invalid UTF-8")
            } else {
                Error::Stream(e)
            }
        })?;
        self.from_str(&text)
    }
}

/// Whether YAML text holds anything besides comments, blank lines and
/// document markers.
fn yaml_has_content(text: &str) -> bool {
    text.lines().any(|line| {
        let line = line.trim();
        let rest = line
            .strip_prefix("---")
            .or_else(|| line.strip_prefix("..."))
            .map(str::trim_start)
            .unwrap_or(line);
        !(rest.is_empty() || rest.starts_with('#'))
    })
}

/// Recursively rebuild objects with their keys in alphabetical order.
fn sort_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut sorted = Map::new();
            for key in keys {
                if let Some(v) = map.get(key) {
                    sorted.insert(key.clone(), sort_value(v));
                }
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_value).collect()),
        other => other.clone(),
    }
}

/// Blank out `//` and `/* */` comments that sit outside string literals.
///
/// Newlines inside comments are kept so parser positions still line up
/// with the original text.
fn strip_json_comments(text: &str) -> String {
    #[derive(Clone, Copy, PartialEq)]
    enum State {
        Code,
        Str,
        StrEscape,
        Line,
        Block,
        BlockStar,
    }

    let mut out = String::with_capacity(text.len());
    let mut state = State::Code;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        state = match state {
            State::Code => match (c, chars.peek()) {
                ('"', _) => {
                    out.push(c);
                    State::Str
                }
                ('/', Some('/')) => {
                    chars.next();
                    out.push_str("  ");
                    State::Line
                }
                ('/', Some('*')) => {
                    chars.next();
                    out.push_str("  ");
                    State::Block
                }
                _ => {
                    out.push(c);
                    State::Code
                }
            },
            State::Str => {
                out.push(c);
                match c {
                    '\\' => State::StrEscape,
                    '"' => State::Code,
                    _ => State::Str,
                }
            }
            State::StrEscape => {
                out.push(c);
                State::Str
            }
            State::Line => {
                if c == '\n' {
                    out.push('\n');
                    State::Code
                } else {
                    out.push(' ');
                    State::Line
                }
            }
            State::Block | State::BlockStar => {
                out.push(if c == '\n' { '\n' } else { ' ' });
                match c {
                    '/' if state == State::BlockStar => State::Code,
                    '*' => State::BlockStar,
                    _ => State::Block,
                }
            }
        };
    }

    out
}
