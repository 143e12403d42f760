//! Path- and stream-level document persistence

use std::io::{Read, Write};
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{Codec, Result, Syntax, io};

/// Holds the JSON and YAML codecs for the lifetime of a process.
///
/// Build one at startup and pass it by reference to everything that reads
/// or writes catalog documents. Both codecs share the same normalization
/// rules, so a document written through either decodes to the same value.
#[derive(Debug, Clone)]
pub struct SerializationContext {
    json: Codec,
    yaml: Codec,
}

impl Default for SerializationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SerializationContext {
    pub fn new() -> Self {
        Self {
            json: Codec::json(),
            yaml: Codec::yaml(),
        }
    }

    /// The JSON codec, also the default for unnamed streams.
    pub fn json(&self) -> &Codec {
        &self.json
    }

    pub fn yaml(&self) -> &Codec {
        &self.yaml
    }

    /// The codec selected by a document path's file name.
    pub fn codec_for(&self, path: &Path) -> &Codec {
        match Syntax::for_path(path) {
            Syntax::Json => &self.json,
            Syntax::Yaml => &self.yaml,
        }
    }

    /// Write a document to `path`, choosing the syntax from its file name.
    pub fn serialize<T: Serialize + ?Sized>(&self, document: &T, path: &Path) -> Result<()> {
        self.serialize_with(self.codec_for(path), document, path)
    }

    /// Write a document to `path` with an explicit codec.
    ///
    /// Parent directories are created when missing.
    pub fn serialize_with<T: Serialize + ?Sized>(
        &self,
        codec: &Codec,
        document: &T,
        path: &Path,
    ) -> Result<()> {
        tracing::debug!(path = %path.display(), syntax = %codec.syntax(), "writing document");
        let text = codec.to_string(document)?;
        io::write_atomic(path, text.as_bytes())
    }

    /// Write a document to an open sink using the JSON codec.
    pub fn serialize_to_writer<T, W>(&self, document: &T, writer: W) -> Result<()>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        self.json.to_writer(document, writer)
    }

    /// Read a document from `path`, choosing the syntax from its file name.
    pub fn deserialize<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        self.deserialize_with(self.codec_for(path), path)
    }

    /// Read a document from `path` with an explicit codec.
    pub fn deserialize_with<T: DeserializeOwned>(&self, codec: &Codec, path: &Path) -> Result<T> {
        tracing::debug!(path = %path.display(), syntax = %codec.syntax(), "reading document");
        let text = io::read_text(path)?;
        codec.from_str(&text)
    }

    /// Read a document from an open source using the JSON codec.
    pub fn deserialize_reader<T, R>(&self, reader: R) -> Result<T>
    where
        T: DeserializeOwned,
        R: Read,
    {
        self.json.from_reader(reader)
    }
}
