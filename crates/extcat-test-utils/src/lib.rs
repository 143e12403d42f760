//! Shared test utilities for the extension-catalog workspace.
//!
//! Fixtures are plain text and files on disk, so any crate in the workspace
//! can use them as a dev-dependency without a build cycle. Never published.
//!
//! # Modules
//!
//! - [`catalog`]: sample catalog documents in both syntaxes
//! - [`project`]: [`project::TestProject`] builder for on-disk projects

pub mod catalog;
pub mod project;
