//! Text syntax selection for catalog documents

use std::fmt;
use std::path::Path;

/// The two interchangeable document syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syntax {
    Json,
    Yaml,
}

impl Syntax {
    /// Pick the syntax for a document path.
    ///
    /// A file name ending in the literal `json` selects [`Syntax::Json`];
    /// every other path, including one without a file name, selects
    /// [`Syntax::Yaml`]. The match is case-sensitive.
    pub fn for_path(path: &Path) -> Self {
        match path.file_name() {
            Some(name) if name.to_string_lossy().ends_with("json") => Syntax::Json,
            _ => Syntax::Yaml,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Syntax::Json => "JSON",
            Syntax::Yaml => "YAML",
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
