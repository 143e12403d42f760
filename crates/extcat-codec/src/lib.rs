//! Document codecs for Extension Catalog
//!
//! Reads and writes catalog documents in two interchangeable syntaxes,
//! JSON and YAML, under one set of normalization rules. The syntax of a
//! file is chosen from its name (see [`Syntax::for_path`]); streams use the
//! JSON codec unless the caller picks one.

pub mod codec;
pub mod context;
pub mod error;
pub mod io;
pub mod syntax;
pub mod tolerant;

pub use codec::Codec;
pub use context::SerializationContext;
pub use error::{Error, Result};
pub use syntax::Syntax;
pub use tolerant::one_or_many;
