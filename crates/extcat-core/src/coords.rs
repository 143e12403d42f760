//! Artifact coordinates identifying an installable unit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// `group:artifact[:version]` coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ArtifactCoords {
    pub group_id: String,
    pub artifact_id: String,
    /// Absent when the version is managed elsewhere (e.g. by the platform BOM).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ArtifactCoords {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Group and artifact are both non-empty.
    pub fn is_well_formed(&self) -> bool {
        !self.group_id.trim().is_empty() && !self.artifact_id.trim().is_empty()
    }

    /// Same group and artifact, regardless of version.
    pub fn same_artifact(&self, other: &ArtifactCoords) -> bool {
        self.group_id == other.group_id && self.artifact_id == other.artifact_id
    }
}

impl fmt::Display for ArtifactCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if let Some(version) = &self.version {
            write!(f, ":{version}")?;
        }
        Ok(())
    }
}

impl FromStr for ArtifactCoords {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidCoords {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(invalid("empty segment"));
        }
        match parts.as_slice() {
            [group, artifact] => Ok(Self::new(*group, *artifact)),
            [group, artifact, version] => Ok(Self::new(*group, *artifact).with_version(*version)),
            _ => Err(invalid("expected group:artifact or group:artifact:version")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_display_without_version() {
        let coords = ArtifactCoords::new("io.quarkus", "quarkus-arc");
        assert_eq!(coords.to_string(), "io.quarkus:quarkus-arc");
    }

    #[test]
    fn test_display_with_version() {
        let coords = ArtifactCoords::new("io.quarkus", "quarkus-arc").with_version("3.8.1");
        assert_eq!(coords.to_string(), "io.quarkus:quarkus-arc:3.8.1");
    }

    #[test]
    fn test_parse_two_and_three_segments() {
        let coords: ArtifactCoords = "io.quarkus:quarkus-arc".parse().unwrap();
        assert_eq!(coords, ArtifactCoords::new("io.quarkus", "quarkus-arc"));

        let coords: ArtifactCoords = "io.quarkus:quarkus-arc:3.8.1".parse().unwrap();
        assert_eq!(coords.version.as_deref(), Some("3.8.1"));
    }

    #[rstest]
    #[case("io.quarkus")]
    #[case("io.quarkus:")]
    #[case(":quarkus-arc")]
    #[case("a:b:c:d")]
    #[case("")]
    fn test_parse_rejects_malformed(#[case] input: &str) {
        let err = input.parse::<ArtifactCoords>().unwrap_err();
        assert!(matches!(err, Error::InvalidCoords { .. }), "{err:?}");
    }

    #[test]
    fn test_same_artifact_ignores_version() {
        let a = ArtifactCoords::new("g", "a").with_version("1");
        let b = ArtifactCoords::new("g", "a").with_version("2");
        assert!(a.same_artifact(&b));
        assert!(!a.same_artifact(&ArtifactCoords::new("g", "other")));
    }

    #[test]
    fn test_well_formed_requires_group_and_artifact() {
        assert!(ArtifactCoords::new("g", "a").is_well_formed());
        assert!(!ArtifactCoords::new("", "a").is_well_formed());
        assert!(!ArtifactCoords::new("g", " ").is_well_formed());
    }
}
