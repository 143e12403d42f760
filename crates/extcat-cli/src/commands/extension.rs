//! Extension command implementations.
//!
//! `add-extension` drives the core workflow against the configured catalog
//! and the local project descriptor. `list-extensions` prints the catalog.

use std::path::PathBuf;

use clap::CommandFactory;
use colored::Colorize;
use extcat_codec::SerializationContext;
use extcat_core::{
    AddExtensionOutcome, AddExtensionRequest, AddExtensions, CatalogFile, CatalogLocation,
    DescriptorInstaller, ExtensionCatalog, LocalProjectResolver, PlatformDescriptor,
    PlatformProvider,
};
use serde::Serialize;

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Resolves the catalog location only when the workflow asks for it, so a
/// help request works without any catalog configured.
struct ConfiguredCatalog<'a> {
    ctx: &'a SerializationContext,
    location: &'a CatalogLocation,
}

impl PlatformProvider for ConfiguredCatalog<'_> {
    fn platform(&self) -> extcat_core::Result<Box<dyn PlatformDescriptor>> {
        let path = self.location.resolve()?;
        tracing::debug!(catalog = %path.display(), "loading catalog");
        CatalogFile::new(self.ctx, path).platform()
    }
}

/// Handle `extcat add-extension -e <NAME>... <PATH> [-h]`
///
/// Returns the outcome so callers can tell a soft not-found apart from a
/// successful update; both exit with status 0.
pub fn run_add_extension(
    ctx: &SerializationContext,
    location: &CatalogLocation,
    extensions: Vec<String>,
    path: Option<PathBuf>,
    help: bool,
) -> Result<AddExtensionOutcome> {
    let request = AddExtensionRequest {
        project_path: path,
        extensions,
        help,
    };
    let catalog = ConfiguredCatalog { ctx, location };
    let outcome = AddExtensions::new(&catalog, &LocalProjectResolver, &DescriptorInstaller)
        .execute(&request)?;

    match &outcome {
        AddExtensionOutcome::HelpRequested => print_add_extension_help()?,
        AddExtensionOutcome::NotFound { names } => {
            for name in names {
                println!("Can not find any extension named: {}", name.yellow());
            }
        }
        AddExtensionOutcome::Added {
            project,
            added,
            already_present,
        } => {
            for coords in added {
                println!(
                    "{} Added extension {} to {}",
                    "=>".blue().bold(),
                    coords.to_string().cyan(),
                    project.display()
                );
            }
            for coords in already_present {
                println!(
                    "   {} {}",
                    "Already present:".dimmed(),
                    coords.to_string().cyan()
                );
            }
        }
    }

    Ok(outcome)
}

fn print_add_extension_help() -> Result<()> {
    let mut command = Cli::command();
    command.build();
    let sub = command
        .find_subcommand_mut("add-extension")
        .ok_or_else(|| CliError::user("add-extension command is not registered"))?;
    println!("{}", sub.render_long_help());
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct ExtensionSummary<'a> {
    name: &'a str,
    coordinates: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

/// Handle `extcat list-extensions [--json]`
pub fn run_list_extensions(
    ctx: &SerializationContext,
    location: &CatalogLocation,
    json: bool,
) -> Result<()> {
    let path = location.resolve()?;
    let catalog = ExtensionCatalog::load(ctx, &path)?;

    if json {
        let summaries: Vec<ExtensionSummary<'_>> = catalog
            .extensions
            .iter()
            .map(|ext| ExtensionSummary {
                name: &ext.name,
                coordinates: ext.coords().to_string(),
                description: ext.description.as_deref(),
            })
            .collect();
        ctx.serialize_to_writer(&summaries, std::io::stdout().lock())?;
        return Ok(());
    }

    if catalog.is_empty() {
        println!("{}", "No extensions in catalog.".dimmed());
        return Ok(());
    }

    println!("{}", "Available extensions:".bold());
    println!();
    for ext in &catalog.extensions {
        println!("  {} {}", ext.name.cyan(), ext.coords().to_string().dimmed());
        if let Some(description) = &ext.description {
            println!("      {}", description);
        }
    }
    println!();
    if let Some(bom) = &catalog.bom {
        println!("{} {}", "Platform:".dimmed(), bom);
    }
    println!("{} {} extension(s)", "Total:".dimmed(), catalog.len());

    Ok(())
}
