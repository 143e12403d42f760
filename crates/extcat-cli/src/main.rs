//! Extension Catalog CLI
//!
//! Looks up extensions in a platform catalog and adds them to projects.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use extcat_codec::SerializationContext;
use extcat_core::CatalogLocation;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        for cause in e.causes() {
            eprintln!("  {} {}", "caused by:".dimmed(), cause);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: logging disabled: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    let ctx = SerializationContext::new();
    let location = CatalogLocation::new(cli.catalog);

    match cli.command {
        Some(cmd) => execute_command(&ctx, &location, cmd),
        None => {
            println!("{} Extension Catalog CLI", "extcat".green().bold());
            println!();
            println!("Run {} for available commands.", "extcat --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(
    ctx: &SerializationContext,
    location: &CatalogLocation,
    cmd: Commands,
) -> Result<()> {
    match cmd {
        Commands::AddExtension {
            extensions,
            path,
            help,
        } => commands::run_add_extension(ctx, location, extensions, path, help).map(|_| ()),
        Commands::ListExtensions { json } => commands::run_list_extensions(ctx, location, json),
        Commands::Convert {
            source,
            destination,
        } => commands::run_convert(ctx, &source, &destination),
    }
}
