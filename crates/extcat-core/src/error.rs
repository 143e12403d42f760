use std::path::PathBuf;

/// Errors that can occur in catalog and workflow operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing a catalog document failed.
    #[error(transparent)]
    Codec(#[from] extcat_codec::Error),

    /// A decoded catalog violates the model invariants.
    #[error("invalid catalog: {reason}")]
    InvalidCatalog { reason: String },

    /// Malformed `group:artifact[:version]` string.
    #[error("invalid artifact coordinates '{value}': {reason}")]
    InvalidCoords { value: String, reason: String },

    /// A required argument is missing.
    #[error("{message}")]
    Usage { message: String },

    /// No catalog location was given and none could be derived.
    #[error("no catalog location configured; pass --catalog or set {env}")]
    CatalogLocationUnknown { env: &'static str },

    /// The project directory or its build descriptor does not exist.
    #[error("no project found at {path}")]
    ProjectNotFound { path: PathBuf },

    /// The build descriptor could not be parsed.
    #[error("failed to parse build descriptor at {path}: {source}")]
    DescriptorParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The build descriptor could not be encoded.
    #[error("failed to serialize build descriptor: {0}")]
    DescriptorSerialize(#[from] toml::ser::Error),

    /// Adding extensions to the project failed.
    #[error("Unable to add an extension matching {extension}: {reason}")]
    MutationFailed {
        extension: String,
        reason: String,
        #[source]
        source: Option<Box<Error>>,
    },
}

impl Error {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
