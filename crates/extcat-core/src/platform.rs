//! Platform descriptors supply the catalog of a platform release.

use std::path::{Path, PathBuf};

use extcat_codec::SerializationContext;

use crate::catalog::{Extension, ExtensionCatalog};
use crate::coords::ArtifactCoords;
use crate::error::Result;

/// Release metadata of the active platform.
pub trait PlatformDescriptor {
    /// Extensions in catalog order.
    fn extensions(&self) -> &[Extension];

    /// The platform bill of materials, if the release has one.
    fn bom(&self) -> Option<&ArtifactCoords> {
        None
    }
}

impl PlatformDescriptor for ExtensionCatalog {
    fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    fn bom(&self) -> Option<&ArtifactCoords> {
        self.bom.as_ref()
    }
}

/// Obtains the active platform descriptor on demand.
///
/// How the descriptor is obtained (local file, download, cache) is up to
/// the implementation. The workflow asks for it only once a request has
/// passed argument validation.
pub trait PlatformProvider {
    fn platform(&self) -> Result<Box<dyn PlatformDescriptor>>;
}

/// An already-loaded catalog serves as its own provider.
impl PlatformProvider for ExtensionCatalog {
    fn platform(&self) -> Result<Box<dyn PlatformDescriptor>> {
        Ok(Box::new(self.clone()))
    }
}

/// Loads the platform catalog from a document file on each request.
#[derive(Debug, Clone)]
pub struct CatalogFile<'a> {
    ctx: &'a SerializationContext,
    path: PathBuf,
}

impl<'a> CatalogFile<'a> {
    pub fn new(ctx: &'a SerializationContext, path: impl Into<PathBuf>) -> Self {
        Self {
            ctx,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlatformProvider for CatalogFile<'_> {
    fn platform(&self) -> Result<Box<dyn PlatformDescriptor>> {
        Ok(Box::new(ExtensionCatalog::load(self.ctx, &self.path)?))
    }
}
