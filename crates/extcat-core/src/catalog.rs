//! Extension catalog documents.
//!
//! A catalog lists the extensions a platform release ships. It is stored as
//! JSON or YAML with kebab-case field names:
//!
//! ```yaml
//! id: io.quarkus.platform:3.8.1
//! bom:
//!   group-id: io.quarkus.platform
//!   artifact-id: quarkus-bom
//!   version: 3.8.1
//! release-date: 2024-03-01T00:00:00Z
//! extensions:
//!   - name: RESTEasy Reactive
//!     group-id: io.quarkus
//!     artifact-id: quarkus-resteasy-reactive
//!     keywords: rest
//!     metadata:
//!       guide: https://quarkus.io/guides/resteasy-reactive
//! categories:
//!   - id: web
//!     name: Web
//! ```
//!
//! Fields this build does not know about are ignored, and list fields accept
//! a single value.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use extcat_codec::{SerializationContext, one_or_many};
use serde::{Deserialize, Serialize};

use crate::coords::ArtifactCoords;
use crate::error::{Error, Result};
use crate::resolver;

/// One installable extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Extension {
    /// Display name, matched case-insensitively against user input.
    pub name: String,
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "one_or_many::deserialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Extension {
    pub fn new(
        name: impl Into<String>,
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
            description: None,
            keywords: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn coords(&self) -> ArtifactCoords {
        ArtifactCoords {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            version: self.version.clone(),
        }
    }
}

/// A grouping label for extensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Category {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The decoded collection of extensions available for a platform release.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExtensionCatalog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Bill of materials managing extension versions for this release.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bom: Option<ArtifactCoords>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "one_or_many::deserialize")]
    pub extensions: Vec<Extension>,
    #[serde(
        default,
        deserialize_with = "one_or_many::deserialize",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl ExtensionCatalog {
    pub fn new(extensions: Vec<Extension>) -> Self {
        Self {
            extensions,
            ..Self::default()
        }
    }

    /// Load and validate a catalog file; the syntax follows the file name.
    pub fn load(ctx: &SerializationContext, path: &Path) -> Result<Self> {
        let catalog: Self = ctx.deserialize(path)?;
        catalog.validate()?;
        tracing::debug!(
            path = %path.display(),
            extensions = catalog.extensions.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Write the catalog; the syntax follows the file name.
    pub fn save(&self, ctx: &SerializationContext, path: &Path) -> Result<()> {
        self.validate()?;
        ctx.serialize(self, path)?;
        Ok(())
    }

    /// Check that every record has a display name and usable coordinates.
    pub fn validate(&self) -> Result<()> {
        for (index, ext) in self.extensions.iter().enumerate() {
            if ext.name.trim().is_empty() {
                return Err(Error::InvalidCatalog {
                    reason: format!("extension #{index} ({}) has an empty name", ext.coords()),
                });
            }
            if !ext.coords().is_well_formed() {
                return Err(Error::InvalidCatalog {
                    reason: format!(
                        "extension #{index} '{}' has incomplete coordinates '{}'",
                        ext.name,
                        ext.coords()
                    ),
                });
            }
        }
        if let Some(bom) = &self.bom {
            if !bom.is_well_formed() {
                return Err(Error::InvalidCatalog {
                    reason: format!("bom has incomplete coordinates '{bom}'"),
                });
            }
        }
        Ok(())
    }

    /// First extension whose display name matches `name`, ignoring case.
    pub fn find(&self, name: &str) -> Option<&Extension> {
        resolver::find_extension(name, &self.extensions)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> ExtensionCatalog {
        ExtensionCatalog::new(vec![
            Extension::new("RESTEasy Reactive", "io.quarkus", "quarkus-resteasy-reactive"),
            Extension::new("ArC", "io.quarkus", "quarkus-arc"),
        ])
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(catalog().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut catalog = catalog();
        catalog.extensions[1].name = "  ".into();
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("#1"), "{err}");
    }

    #[test]
    fn test_validate_rejects_missing_artifact() {
        let mut catalog = catalog();
        catalog.extensions[0].artifact_id.clear();
        assert!(matches!(
            catalog.validate(),
            Err(Error::InvalidCatalog { .. })
        ));
    }

    #[test]
    fn test_parse_yaml_with_scalar_lists_and_unknown_fields() {
        let yaml = r#"
id: demo
extensions:
  name: Hibernate ORM
  group-id: io.quarkus
  artifact-id: quarkus-hibernate-orm
  keywords: jpa
  introduced-in: "1.0"
categories:
  id: data
"#;
        let catalog: ExtensionCatalog = extcat_codec::Codec::yaml().from_str(yaml).unwrap();

        assert_eq!(catalog.extensions.len(), 1);
        assert_eq!(catalog.extensions[0].keywords, vec!["jpa".to_string()]);
        assert_eq!(catalog.categories[0].id, "data");
    }

    #[test]
    fn test_serialized_field_names_are_kebab_case() {
        let mut catalog = catalog();
        catalog.bom = Some(ArtifactCoords::new("io.quarkus.platform", "quarkus-bom").with_version("3.8.1"));
        let json = extcat_codec::Codec::json().to_string(&catalog).unwrap();

        assert!(json.contains("\"artifact-id\""));
        assert!(json.contains("\"group-id\""));
        assert!(!json.contains("artifact_id"));
        assert!(!json.contains("\"keywords\""), "empty lists are omitted: {json}");
    }

    #[test]
    fn test_find_delegates_to_resolver() {
        let catalog = catalog();
        assert_eq!(catalog.find("arc").unwrap().artifact_id, "quarkus-arc");
        assert!(catalog.contains("resteasy reactive"));
        assert!(!catalog.contains("resteasy"));
    }
}
