//! CLI implementation for `payloadkit generate`
//!
//! Scaffolds new items from string templates into the configured install
//! directories.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::commands::GenerateCommands;
use crate::cli::output::{print_detail, print_success};
use crate::core::generator::{self, BlockOptions, CollectionOptions, GeneratedFile};
use crate::core::kit_config::KitConfig;
use crate::registry::ItemKind;

/// Execute a generate subcommand
pub async fn execute(path: &Path, command: GenerateCommands) -> Result<i32> {
    let config = KitConfig::load_or_default(path)?;

    let (kind, dir_name, files, force) = match command {
        GenerateCommands::Block {
            name,
            category,
            description,
            with_icon,
            layout,
            force,
        } => {
            let options = BlockOptions {
                category,
                description,
                with_icon,
                layouts: layout,
            };
            let files = generator::generate_block(&name, &options)?;
            (ItemKind::Block, generator::to_kebab_case(&name), files, force)
        }
        GenerateCommands::Collection {
            name,
            slug,
            with_slug,
            with_timestamps,
            with_status,
            force,
        } => {
            let options = CollectionOptions {
                slug,
                with_slug,
                with_timestamps,
                with_status,
            };
            let files = generator::generate_collection(&name, &options)?;
            (
                ItemKind::Collection,
                generator::to_pascal_case(&name),
                files,
                force,
            )
        }
        GenerateCommands::Component { name, force } => {
            let files = generator::generate_component(&name)?;
            (
                ItemKind::Component,
                generator::to_pascal_case(&name),
                files,
                force,
            )
        }
        GenerateCommands::Global { name, force } => {
            let files = generator::generate_global(&name)?;
            (ItemKind::Global, generator::to_kebab_case(&name), files, force)
        }
    };

    let dest = config.install_dir(kind, path).join(&dir_name);
    let written = generator::write_files(&dest, &files, force)
        .with_context(|| format!("Failed to generate {kind} '{dir_name}'"))?;

    print_success(&format!("Generated {kind} '{dir_name}'"));
    report_written(&files, &dest);
    print_detail(&format!("{} file(s) written", written.len()));
    Ok(0)
}

fn report_written(files: &[GeneratedFile], dest: &Path) {
    for file in files {
        print_detail(&format!("Created {}", dest.join(&file.path).display()));
    }
}
