//! CLI command implementations
//!
//! Each command is implemented in its own submodule. Commands return the
//! process exit code: 0 for success or a clean user decline, 1 for
//! errors, 2 for a degraded install (placeholder fallback).

pub mod add;
pub mod generate;
pub mod init;
pub mod list;

use anyhow::Result;
use clap::Subcommand;
use std::path::{Path, PathBuf};

use crate::core::kit_config::KitConfig;
use crate::registry::{ItemKind, RegistryClient};

/// Build a registry client honoring the project's config
fn registry_client(config: &KitConfig, project_dir: &Path) -> RegistryClient {
    let client = RegistryClient::with_url(config.registry.clone());
    match &config.registry_path {
        // A configured local registry wins unless the environment already
        // pointed the client somewhere
        Some(local) if client.local_dir().is_none() => {
            client.with_local_dir(project_dir.join(local))
        }
        _ => client,
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize PayloadKit in the current project
    Init {
        /// Skip confirmation prompts
        #[arg(short, long)]
        yes: bool,
    },

    /// Install a registry item into the project
    Add {
        /// Item name
        name: String,

        /// Item kind (disambiguates names present in multiple kinds)
        #[arg(short, long, value_enum)]
        kind: Option<ItemKind>,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Install into this directory instead of the configured path
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Skip confirmation prompts
        #[arg(short, long)]
        yes: bool,
    },

    /// List registry items
    List {
        /// Only items of this kind
        #[arg(short, long, value_enum, alias = "type")]
        kind: Option<ItemKind>,

        /// Only items in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only items matching this query
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Scaffold a new item from templates
    Generate {
        #[command(subcommand)]
        command: GenerateCommands,
    },
}

/// Generate subcommands
#[derive(Subcommand, Debug)]
pub enum GenerateCommands {
    /// Generate a block (component, config, barrel, manifest)
    Block {
        /// Block name (kebab-case recommended)
        name: String,

        /// Category recorded in the item manifest
        #[arg(long)]
        category: Option<String>,

        /// Description recorded in the manifest and config
        #[arg(long)]
        description: Option<String>,

        /// Include an icon field
        #[arg(long)]
        with_icon: bool,

        /// Layout variants for a layout select field
        #[arg(long, value_delimiter = ',')]
        layout: Vec<String>,

        /// Overwrite an existing destination
        #[arg(short, long)]
        force: bool,
    },

    /// Generate a collection config
    Collection {
        /// Collection name
        name: String,

        /// Collection slug (defaults to the kebab-cased name)
        #[arg(long)]
        slug: Option<String>,

        /// Add a slug field derived from the title
        #[arg(long)]
        with_slug: bool,

        /// Enable createdAt/updatedAt timestamps
        #[arg(long)]
        with_timestamps: bool,

        /// Add a draft/published status field
        #[arg(long)]
        with_status: bool,

        /// Overwrite an existing destination
        #[arg(short, long)]
        force: bool,
    },

    /// Generate a React component
    Component {
        /// Component name
        name: String,

        /// Overwrite an existing destination
        #[arg(short, long)]
        force: bool,
    },

    /// Generate a global config
    Global {
        /// Global name
        name: String,

        /// Overwrite an existing destination
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self) -> Result<i32> {
        match self {
            Self::Init { yes } => {
                let current_dir = std::env::current_dir()?;
                init::execute(&current_dir, yes).await
            }
            Self::Add {
                name,
                kind,
                force,
                path,
                yes,
            } => {
                let current_dir = std::env::current_dir()?;
                let options = crate::core::add::AddOptions {
                    kind,
                    force,
                    path,
                    yes,
                };
                add::execute(&current_dir, &name, &options).await
            }
            Self::List {
                kind,
                category,
                search,
            } => {
                let current_dir = std::env::current_dir()?;
                let filter = crate::core::list::ListFilter {
                    kind,
                    category,
                    search,
                };
                list::execute(&current_dir, &filter).await
            }
            Self::Generate { command } => {
                let current_dir = std::env::current_dir()?;
                generate::execute(&current_dir, command).await
            }
        }
    }
}
