//! Error types for extcat-codec

use std::path::PathBuf;

use crate::Syntax;

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing catalog documents
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File {path} does not exist")]
    NotFound { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error on stream: {0}")]
    Stream(#[from] std::io::Error),

    #[error("Failed to parse {syntax} document{}: {message}", location(.line, .column))]
    Parse {
        syntax: Syntax,
        line: Option<usize>,
        column: Option<usize>,
        message: String,
    },

    #[error("Failed to serialize {syntax} document: {message}")]
    Serialize { syntax: Syntax, message: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(syntax: Syntax, message: impl Into<String>) -> Self {
        Self::Parse {
            syntax,
            line: None,
            column: None,
            message: message.into(),
        }
    }

    pub fn serialize(syntax: Syntax, message: impl Into<String>) -> Self {
        Self::Serialize {
            syntax,
            message: message.into(),
        }
    }

    /// Whether this error means the source document was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

fn location(line: &Option<usize>, column: &Option<usize>) -> String {
    match (*line, *column) {
        (Some(line), Some(column)) => format!(" at line {line} column {column}"),
        (Some(line), None) => format!(" at line {line}"),
        _ => String::new(),
    }
}

/// Parser messages end with their own position suffix; it is reported
/// separately through `line`/`column`.
fn strip_location(mut message: String) -> String {
    if let Some(idx) = message.rfind(" at line ") {
        message.truncate(idx);
    }
    message
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            return Self::Stream(e.into());
        }
        let (line, column) = if e.line() == 0 {
            (None, None)
        } else {
            (Some(e.line()), Some(e.column()))
        };
        Self::Parse {
            syntax: Syntax::Json,
            line,
            column,
            message: strip_location(e.to_string()),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        let location = e.location();
        Self::Parse {
            syntax: Syntax::Yaml,
            line: location.as_ref().map(|l| l.line()),
            column: location.as_ref().map(|l| l.column()),
            message: strip_location(e.to_string()),
        }
    }
}
