//! The add-extension workflow.
//!
//! ```text
//! Idle -> HelpRequested
//! Idle -> CatalogLoaded -> NotFound
//!                       -> Resolved -> Added
//!                       -> Resolved -> MutationFailed (error)
//! ```
//!
//! A name missing from the catalog is an expected typo, so it ends in the
//! [`AddExtensionOutcome::NotFound`] outcome rather than an error, and the
//! installer is never called. Failures of the installer are reported once,
//! wrapped with the requested names; nothing is retried or rolled back.

use std::path::PathBuf;

use crate::coords::ArtifactCoords;
use crate::error::{Error, Result};
use crate::platform::PlatformProvider;
use crate::project::{ExtensionInstaller, ProjectResolver};
use crate::resolver;

/// User input for one add-extension invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddExtensionRequest {
    pub project_path: Option<PathBuf>,
    pub extensions: Vec<String>,
    pub help: bool,
}

impl AddExtensionRequest {
    pub fn new(project_path: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            project_path: Some(project_path.into()),
            extensions: vec![extension.into()],
            help: false,
        }
    }

    pub fn help() -> Self {
        Self {
            help: true,
            ..Self::default()
        }
    }
}

/// Terminal, non-error states of the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddExtensionOutcome {
    /// Help was asked for; nothing else ran.
    HelpRequested,
    /// Some requested names have no catalog record.
    NotFound { names: Vec<String> },
    /// The project was updated.
    Added {
        project: PathBuf,
        added: Vec<ArtifactCoords>,
        already_present: Vec<ArtifactCoords>,
    },
}

/// Wires the workflow to its collaborators.
pub struct AddExtensions<'a> {
    platforms: &'a dyn PlatformProvider,
    projects: &'a dyn ProjectResolver,
    installer: &'a dyn ExtensionInstaller,
}

impl<'a> AddExtensions<'a> {
    pub fn new(
        platforms: &'a dyn PlatformProvider,
        projects: &'a dyn ProjectResolver,
        installer: &'a dyn ExtensionInstaller,
    ) -> Self {
        Self {
            platforms,
            projects,
            installer,
        }
    }

    pub fn execute(&self, request: &AddExtensionRequest) -> Result<AddExtensionOutcome> {
        if request.help {
            return Ok(AddExtensionOutcome::HelpRequested);
        }

        let names: Vec<&str> = request
            .extensions
            .iter()
            .map(String::as_str)
            .filter(|n| !n.trim().is_empty())
            .collect();
        if names.is_empty() {
            return Err(Error::usage("missing required option: --extension <NAME>"));
        }
        let project_path = request
            .project_path
            .as_deref()
            .ok_or_else(|| Error::usage("missing required argument: <PATH>"))?;

        let platform = self.platforms.platform()?;
        tracing::debug!(extensions = platform.extensions().len(), "catalog loaded");

        let resolution = resolver::resolve_all(&names, platform.extensions());
        if !resolution.is_complete() {
            tracing::info!(missing = ?resolution.missing, "extensions not in catalog");
            return Ok(AddExtensionOutcome::NotFound {
                names: resolution.missing,
            });
        }

        let coords: Vec<ArtifactCoords> = resolution
            .found
            .iter()
            .map(|(_, ext)| ext.coords())
            .collect();
        tracing::info!(
            extensions = %coords.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "),
            project = %project_path.display(),
            "adding extensions"
        );

        let requested = names.join(", ");
        let wrap = |e: Error| Error::MutationFailed {
            extension: requested.clone(),
            reason: "project update failed".to_string(),
            source: Some(Box::new(e)),
        };

        let project = self
            .projects
            .resolve_existing_project(project_path, platform.as_ref())
            .map_err(wrap)?;
        let outcome = self
            .installer
            .add_extensions(&project, &coords)
            .map_err(wrap)?;

        if !outcome.success {
            return Err(Error::MutationFailed {
                extension: requested,
                reason: if outcome.message.is_empty() {
                    "the project reported a failure".to_string()
                } else {
                    outcome.message
                },
                source: None,
            });
        }

        Ok(AddExtensionOutcome::Added {
            project: project.root,
            added: outcome.added,
            already_present: outcome.already_present,
        })
    }
}
