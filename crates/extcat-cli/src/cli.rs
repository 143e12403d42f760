//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use extcat_core::CATALOG_ENV;

/// Extension Catalog - look up platform extensions and add them to projects
#[derive(Parser, Debug)]
#[command(name = "extcat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Catalog document to read (".json" suffix selects JSON, anything else YAML)
    #[arg(long, global = true, env = CATALOG_ENV, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add extensions to an existing project
    ///
    /// Names are matched against the catalog ignoring case. The project
    /// directory must contain a project.toml build descriptor.
    ///
    /// Examples:
    ///   extcat add-extension -e "RESTEasy Reactive" my-app
    ///   extcat add-extension -e arc -e "hibernate orm" my-app
    #[command(disable_help_flag = true)]
    AddExtension {
        /// Display name of the extension to add (repeatable)
        #[arg(short = 'e', long = "extension", value_name = "NAME")]
        extensions: Vec<String>,

        /// Path to the project directory
        path: Option<PathBuf>,

        /// Print help
        #[arg(short, long)]
        help: bool,
    },

    /// List the extensions in the catalog
    ListExtensions {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Re-encode a catalog document in another syntax
    ///
    /// The syntax of each side is chosen by its file name.
    ///
    /// Examples:
    ///   extcat convert catalog.yaml catalog.json
    Convert {
        /// Catalog to read
        source: PathBuf,

        /// File to write (parent directories are created)
        destination: PathBuf,
    },
}
