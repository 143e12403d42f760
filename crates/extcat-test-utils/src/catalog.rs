//! Sample catalog documents.

use std::fs;
use std::path::{Path, PathBuf};

/// A small platform catalog in YAML, including fields written the lenient
/// way: a scalar `keywords` value and an unknown `introduced-in` field.
pub const SAMPLE_CATALOG_YAML: &str = r#"# Sample platform catalog
id: io.quarkus.platform:3.8.1
bom:
  group-id: io.quarkus.platform
  artifact-id: quarkus-bom
  version: 3.8.1
release-date: 2024-03-01T00:00:00Z
extensions:
  - name: RESTEasy Reactive
    group-id: io.quarkus
    artifact-id: quarkus-resteasy-reactive
    version: 3.8.1
    description: A Jakarta REST implementation utilizing build time processing and Vert.x.
    keywords: rest
    metadata:
      guide: https://quarkus.io/guides/resteasy-reactive
  - name: Hibernate ORM
    group-id: io.quarkus
    artifact-id: quarkus-hibernate-orm
    version: 3.8.1
    keywords: [jpa, orm]
    introduced-in: "1.0"
  - name: ArC
    group-id: io.quarkus
    artifact-id: quarkus-arc
categories:
  - id: web
    name: Web
"#;

/// The same catalog content in JSON, with comments.
pub const SAMPLE_CATALOG_JSON: &str = r#"{
  // Sample platform catalog
  "id": "io.quarkus.platform:3.8.1",
  "bom": {
    "group-id": "io.quarkus.platform",
    "artifact-id": "quarkus-bom",
    "version": "3.8.1"
  },
  "release-date": "2024-03-01T00:00:00Z",
  "extensions": [
    {
      "name": "RESTEasy Reactive",
      "group-id": "io.quarkus",
      "artifact-id": "quarkus-resteasy-reactive",
      "version": "3.8.1",
      "description": "A Jakarta REST implementation utilizing build time processing and Vert.x.",
      "keywords": "rest",
      "metadata": { "guide": "https://quarkus.io/guides/resteasy-reactive" }
    },
    {
      "name": "Hibernate ORM",
      "group-id": "io.quarkus",
      "artifact-id": "quarkus-hibernate-orm",
      "version": "3.8.1",
      "keywords": ["jpa", "orm"],
      "introduced-in": "1.0"
    },
    /* no version: managed by the BOM */
    {
      "name": "ArC",
      "group-id": "io.quarkus",
      "artifact-id": "quarkus-arc"
    }
  ],
  "categories": [{ "id": "web", "name": "Web" }]
}
"#;

/// Write the sample catalog into `dir` under `file_name`.
///
/// The content matches the file name's syntax: names ending in `json` get
/// [`SAMPLE_CATALOG_JSON`], all others [`SAMPLE_CATALOG_YAML`].
pub fn write_sample_catalog(dir: &Path, file_name: &str) -> PathBuf {
    let content = if file_name.ends_with("json") {
        SAMPLE_CATALOG_JSON
    } else {
        SAMPLE_CATALOG_YAML
    };
    let path = dir.join(file_name);
    fs::write(&path, content)
        .unwrap_or_else(|e| panic!("could not write catalog {}: {e}", path.display()));
    path
}
