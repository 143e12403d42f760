//! Extension catalog core.
//!
//! This crate provides the catalog model, case-insensitive extension
//! lookup, the collaborator traits for platforms and projects (with local
//! file-backed implementations), and the add-extension workflow that ties
//! them together.
//!
//! # Example
//!
//! ```no_run
//! use extcat_codec::SerializationContext;
//! use extcat_core::{
//!     AddExtensionRequest, AddExtensions, CatalogFile, DescriptorInstaller, LocalProjectResolver,
//! };
//!
//! let ctx = SerializationContext::new();
//! let catalog = CatalogFile::new(&ctx, "catalog.yaml");
//! let outcome = AddExtensions::new(&catalog, &LocalProjectResolver, &DescriptorInstaller)
//!     .execute(&AddExtensionRequest::new("my-app", "RESTEasy Reactive"))?;
//! println!("{outcome:?}");
//! # Ok::<(), extcat_core::Error>(())
//! ```

pub mod add;
pub mod catalog;
pub mod config;
pub mod coords;
pub mod error;
pub mod platform;
pub mod project;
pub mod resolver;

pub use add::{AddExtensionOutcome, AddExtensionRequest, AddExtensions};
pub use catalog::{Category, Extension, ExtensionCatalog};
pub use config::{CATALOG_ENV, CatalogLocation};
pub use coords::ArtifactCoords;
pub use error::{Error, Result};
pub use platform::{CatalogFile, PlatformDescriptor, PlatformProvider};
pub use project::{
    BuildDescriptor, DESCRIPTOR_FILENAME, DescriptorInstaller, ExtensionInstaller,
    LocalProjectResolver, MutationOutcome, ProjectHandle, ProjectResolver,
};
pub use resolver::{Resolution, find_extension, resolve_all};
