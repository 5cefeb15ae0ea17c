//! CLI implementation for `payloadkit list`
//!
//! Lists registry items grouped by kind, with optional kind, category,
//! and search filters. Always exits 0 and works outside a project; the
//! project's configured registry is honored when present.

use std::path::Path;

use anyhow::Result;

use crate::cli::output::create_spinner;
use crate::core::kit_config::KitConfig;
use crate::core::list::{filter_items, ListFilter};
use crate::registry::RegistryItem;

/// Execute the list command
pub async fn execute(path: &Path, filter: &ListFilter) -> Result<i32> {
    // Listing is read-only. An absent or unreadable payloadkit.json must
    // not fail it, only fall back to the default registry.
    let config = match KitConfig::load_or_default(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Unreadable payloadkit.json, using the default registry: {e}");
            KitConfig::default()
        }
    };
    let client = super::registry_client(&config, path);

    let spinner = create_spinner("Fetching registry index...");
    let index = client.fetch_index().await;
    spinner.finish_and_clear();

    let groups = filter_items(&index, filter);

    if groups.is_empty() {
        println!("No matching registry items.");
        return Ok(0);
    }

    let mut total = 0;
    for (kind, items) in &groups {
        println!("{kind}s ({} found):", items.len());
        println!();
        for item in items {
            display_item(item);
        }
        println!();
        total += items.len();
    }

    println!("{total} item(s) total.");
    Ok(0)
}

/// Display a single registry item
fn display_item(item: &RegistryItem) {
    let version = item.version.as_deref().unwrap_or("latest");
    match &item.description {
        Some(desc) => println!("  {} v{version} - {desc}", item.name),
        None => println!("  {} v{version}", item.name),
    }
    if let Some(category) = &item.category {
        println!("    Category: {category}");
    }
    if !item.tags.is_empty() {
        println!("    Tags: {}", item.tags.join(", "));
    }
}
