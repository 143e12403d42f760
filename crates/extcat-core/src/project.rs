//! Project resolution and build descriptor mutation.
//!
//! The workflow talks to projects through two traits, [`ProjectResolver`]
//! and [`ExtensionInstaller`]. The local implementations here work on a
//! `project.toml` build descriptor:
//!
//! ```toml
//! [project]
//! name = "demo"
//! platform = "io.quarkus.platform:quarkus-bom:3.8.1"
//!
//! [[dependencies]]
//! group-id = "io.quarkus"
//! artifact-id = "quarkus-arc"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::coords::ArtifactCoords;
use crate::error::{Error, Result};
use crate::platform::PlatformDescriptor;

/// Build descriptor file name at the project root.
pub const DESCRIPTOR_FILENAME: &str = "project.toml";

/// An existing project located on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectHandle {
    pub root: PathBuf,
    pub descriptor: PathBuf,
    pub name: Option<String>,
    /// BOM of the platform the project was resolved against.
    pub platform_bom: Option<ArtifactCoords>,
}

/// Result reported by an [`ExtensionInstaller`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationOutcome {
    pub success: bool,
    pub message: String,
    pub added: Vec<ArtifactCoords>,
    pub already_present: Vec<ArtifactCoords>,
}

impl MutationOutcome {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            ..Self::default()
        }
    }
}

/// Locates an existing project for a platform.
pub trait ProjectResolver {
    fn resolve_existing_project(
        &self,
        path: &Path,
        platform: &dyn PlatformDescriptor,
    ) -> Result<ProjectHandle>;
}

/// Adds extension coordinates to a project's build descriptor.
///
/// Implementations own the atomicity of the change; callers never retry or
/// roll back.
pub trait ExtensionInstaller {
    fn add_extensions(
        &self,
        project: &ProjectHandle,
        extensions: &[ArtifactCoords],
    ) -> Result<MutationOutcome>;
}

/// `[project]` table of the build descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Platform BOM as `group:artifact:version`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

/// Parsed `project.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BuildDescriptor {
    #[serde(default)]
    pub project: ProjectSection,
    #[serde(default)]
    pub dependencies: Vec<ArtifactCoords>,
}

impl BuildDescriptor {
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::DescriptorParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = extcat_codec::io::read_text(path)?;
        Self::parse(&content, path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        extcat_codec::io::write_atomic(path, content.as_bytes())?;
        Ok(())
    }

    pub fn has_dependency(&self, coords: &ArtifactCoords) -> bool {
        self.dependencies.iter().any(|d| d.same_artifact(coords))
    }
}

/// Resolves projects that carry a `project.toml` at their root.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProjectResolver;

impl ProjectResolver for LocalProjectResolver {
    fn resolve_existing_project(
        &self,
        path: &Path,
        platform: &dyn PlatformDescriptor,
    ) -> Result<ProjectHandle> {
        let descriptor = path.join(DESCRIPTOR_FILENAME);
        if !path.is_dir() || !descriptor.is_file() {
            return Err(Error::ProjectNotFound {
                path: path.to_path_buf(),
            });
        }

        let build = BuildDescriptor::load(&descriptor)?;
        tracing::debug!(root = %path.display(), name = ?build.project.name, "project resolved");

        Ok(ProjectHandle {
            root: path.to_path_buf(),
            descriptor,
            name: build.project.name,
            platform_bom: platform.bom().cloned(),
        })
    }
}

/// Appends dependencies to `project.toml`.
///
/// Coordinates already present (same group and artifact) are left alone.
/// When the project was resolved against a platform BOM, versions are
/// dropped because the BOM manages them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorInstaller;

impl ExtensionInstaller for DescriptorInstaller {
    fn add_extensions(
        &self,
        project: &ProjectHandle,
        extensions: &[ArtifactCoords],
    ) -> Result<MutationOutcome> {
        let mut build = BuildDescriptor::load(&project.descriptor)?;
        let mut outcome = MutationOutcome {
            success: true,
            ..MutationOutcome::default()
        };

        for coords in extensions {
            if build.has_dependency(coords) {
                outcome.already_present.push(coords.clone());
                continue;
            }
            let mut dependency = coords.clone();
            if project.platform_bom.is_some() {
                dependency.version = None;
            }
            build.dependencies.push(dependency.clone());
            outcome.added.push(dependency);
        }

        if !outcome.added.is_empty() {
            if build.project.platform.is_none() {
                build.project.platform = project.platform_bom.as_ref().map(ToString::to_string);
            }
            build.save(&project.descriptor)?;
        }

        outcome.message = format!(
            "{} added, {} already present",
            outcome.added.len(),
            outcome.already_present.len()
        );
        tracing::info!(project = %project.root.display(), "{}", outcome.message);
        Ok(outcome)
    }
}
