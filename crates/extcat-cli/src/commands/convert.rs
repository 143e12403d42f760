//! Convert command implementation.

use std::path::Path;

use colored::Colorize;
use extcat_codec::SerializationContext;
use extcat_core::ExtensionCatalog;

use crate::error::{CliError, Result};

/// Handle `extcat convert <SOURCE> <DESTINATION>`
///
/// Decodes and validates the source catalog, then writes it to the
/// destination in the syntax its file name selects.
pub fn run_convert(ctx: &SerializationContext, source: &Path, destination: &Path) -> Result<()> {
    if source == destination {
        return Err(CliError::user(format!(
            "Source and destination are the same file: {}",
            source.display()
        )));
    }

    let catalog = ExtensionCatalog::load(ctx, source)?;
    catalog.save(ctx, destination)?;

    println!(
        "{} Wrote {} extension(s) from {} to {} ({})",
        "=>".blue().bold(),
        catalog.len(),
        source.display(),
        destination.display().to_string().cyan(),
        ctx.codec_for(destination).syntax()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use extcat_test_utils::catalog::write_sample_catalog;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_converts_yaml_to_json() {
        let temp = TempDir::new().unwrap();
        let ctx = SerializationContext::new();
        let source = write_sample_catalog(temp.path(), "catalog.yaml");
        let destination = temp.path().join("nested/out/catalog.json");

        run_convert(&ctx, &source, &destination).unwrap();

        let text = fs::read_to_string(&destination).unwrap();
        assert!(text.starts_with('{'));
        assert!(text.contains("\"artifact-id\": \"quarkus-arc\""));
        assert_eq!(
            ExtensionCatalog::load(&ctx, &destination).unwrap(),
            ExtensionCatalog::load(&ctx, &source).unwrap()
        );
    }

    #[test]
    fn test_refuses_same_file() {
        let temp = TempDir::new().unwrap();
        let source = write_sample_catalog(temp.path(), "catalog.yaml");

        let err = run_convert(&SerializationContext::new(), &source, &source).unwrap_err();

        assert!(matches!(err, CliError::User { .. }));
    }

    #[test]
    fn test_malformed_source_reports_location() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("broken.json");
        fs::write(&source, "{\n  \"extensions\": [\n    {\"name\": }\n  ]\n}\n").unwrap();

        let err = run_convert(&SerializationContext::new(), &source, &temp.path().join("out.yaml"))
            .unwrap_err();

        assert!(err.to_string().contains("line 3"), "{err}");
        assert!(!temp.path().join("out.yaml").exists());
    }
}
