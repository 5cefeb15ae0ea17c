//! CLI implementation for `payloadkit add`
//!
//! Orchestrates the install pipeline: project checks, registry
//! resolution, auto-init, collision handling, copy, and reporting.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::{
    confirm, create_spinner, print_detail, print_info, print_success, print_warning,
};
use crate::core::add::{install_item, AddOptions, InstallOutcome};
use crate::core::kit_config::KitConfig;
use crate::core::{init, project};
use crate::error::RegistryError;
use crate::registry::{ItemKind, RegistryItem, Resolution};

/// Exit code for a degraded install (placeholder fallback)
pub const EXIT_DEGRADED: i32 = 2;

/// Execute the add command
pub async fn execute(path: &Path, name: &str, options: &AddOptions) -> Result<i32> {
    // Precondition: must be a Payload project. Fail fast, no side effects.
    let info = project::detect(path);
    project::require_payload_project(&info, path)?;

    let config = KitConfig::load_or_default(path)?;
    let client = super::registry_client(&config, path);

    // Resolve the name across kinds
    let spinner = create_spinner(&format!("Resolving '{name}'..."));
    let index = client.fetch_index().await;
    spinner.finish_and_clear();

    let (kind, item) = match index.resolve(name, options.kind) {
        Resolution::Found(kind, item) => (kind, item),
        Resolution::NotFound => {
            print_available(&index);
            return Err(RegistryError::NotFound {
                name: name.to_string(),
            }
            .into());
        }
        Resolution::Ambiguous(kinds) => {
            return Err(RegistryError::Ambiguous {
                name: name.to_string(),
                kinds: kinds.iter().map(ToString::to_string).collect(),
            }
            .into());
        }
    };

    // Auto-init: write the default config if missing. Runs only after the
    // name resolved, so a failed lookup leaves the project untouched.
    if !info.initialized {
        init::initialize(path).with_context(|| "Failed to initialize PayloadKit")?;
        print_info("Initialized PayloadKit (payloadkit.json)");
    }

    // Collision check on the destination directory
    let install_dir = match &options.path {
        Some(dir) => path.join(dir),
        None => config.install_dir(kind, path),
    };
    let dest = install_dir.join(&item.name);
    let mut force_files = options.force;
    if dest.exists() && !options.force && !options.yes {
        let overwrite = confirm(
            &format!("{} already exists. Overwrite?", dest.display()),
            false,
        )?;
        if !overwrite {
            print_warning(&format!(
                "Skipped '{name}': destination exists (use --force to overwrite)"
            ));
            return Ok(0);
        }
        // An explicit interactive yes means overwrite, same as --force
        force_files = true;
    }

    let result = install_item(&client, kind, &item, &install_dir, force_files)
        .with_context(|| format!("Failed to install '{name}'"))?;

    match &result.outcome {
        InstallOutcome::Installed { copied, skipped } => {
            print_success(&format!("Added {kind} '{}'", item.name));
            print_detail(&format!("Installed to {}", result.install_path.display()));
            print_detail(&format!("{copied} file(s) copied"));
            if *skipped > 0 {
                print_warning(&format!("{skipped} existing file(s) skipped (use --force)"));
            }
            print_plugin_next_steps(kind, &item);
            Ok(0)
        }
        InstallOutcome::PlaceholderFallback { reason } => {
            print_warning(&format!(
                "Added {kind} '{}' as a placeholder: {reason}",
                item.name
            ));
            print_detail(&format!("Stub written to {}", result.install_path.display()));
            print_detail("Replace the stub before shipping");
            Ok(EXIT_DEGRADED)
        }
    }
}

/// Print the full per-kind inventory (shown when a name is not found)
fn print_available(index: &crate::registry::RegistryIndex) {
    println!("Available items:");
    for kind in ItemKind::ALL {
        let items = index.list(kind);
        if items.is_empty() {
            continue;
        }
        println!();
        println!("  {kind}s:");
        for item in items {
            match &item.description {
                Some(desc) => println!("    {} - {desc}", item.name),
                None => println!("    {}", item.name),
            }
        }
    }
    println!();
}

/// For plugins, print dependency install commands, config snippet, and
/// feature list from the item's own metadata
fn print_plugin_next_steps(kind: ItemKind, item: &RegistryItem) {
    if kind != ItemKind::Plugin {
        return;
    }

    println!();
    println!("Next steps:");
    if !item.dependencies.is_empty() {
        println!("  Install dependencies:");
        println!("    npm install {}", item.dependencies.join(" "));
    }
    if let Some(snippet) = &item.config_snippet {
        println!("  Add to your Payload config:");
        for line in snippet.lines() {
            println!("    {line}");
        }
    }
    if !item.features.is_empty() {
        println!("  Features:");
        for feature in &item.features {
            println!("    - {feature}");
        }
    }
}
