//! Item installation logic
//!
//! Contains the business logic for installing a registry item into a
//! project: locating the item's source tree, copying it into the resolved
//! install directory, and recording install metadata. Collision handling
//! and prompting stay in the CLI layer.
//!
//! When an item is known to the index but has no local source tree, or
//! the copy fails partway, a placeholder stub is written instead. That
//! degraded outcome is typed ([`InstallOutcome::PlaceholderFallback`])
//! and surfaced to the caller rather than reported as plain success.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::defaults::ITEM_MANIFEST_FILE_NAME;
use crate::core::metadata::InstalledMetadata;
use crate::error::InstallError;
use crate::infra::filesystem::{self, CopyAction};
use crate::registry::{ItemKind, RegistryClient, RegistryItem};

/// Options for installing an item
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    /// Explicit kind (disambiguates multi-kind names)
    pub kind: Option<ItemKind>,
    /// Overwrite existing files
    pub force: bool,
    /// Install directory override (for --path)
    pub path: Option<PathBuf>,
    /// Skip confirmation prompts
    pub yes: bool,
}

/// Typed install outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Every source file was copied (or deliberately skipped)
    Installed {
        /// Files copied
        copied: usize,
        /// Existing files skipped (no --force)
        skipped: usize,
    },
    /// A placeholder stub was written instead of real content
    PlaceholderFallback {
        /// Why the real content was unavailable
        reason: String,
    },
}

/// Result of installing an item
#[derive(Debug)]
pub struct AddResult {
    /// Kind the name resolved to
    pub kind: ItemKind,
    /// The installed item's metadata
    pub item: RegistryItem,
    /// Directory the item was installed into
    pub install_path: PathBuf,
    /// What actually happened
    pub outcome: InstallOutcome,
}

/// Template for the placeholder stub written when item sources are
/// unavailable
const PLACEHOLDER_TEMPLATE: &str = "\
// {{name}} ({{kind}})
//
// {{description}}
//
// Placeholder generated by payloadkit: the registry index knows this
// item, but no source files were available at install time. Replace this
// stub with the real implementation, or re-run the install against a
// registry that provides the files.

export {}
";

/// Install a resolved item into `install_dir/<name>`.
///
/// `install_dir` is the kind's resolved directory (configured path,
/// default, or `--path` override). The destination directory is created
/// if needed; per-file collisions are skipped with a warning unless
/// `force` is set.
pub fn install_item(
    client: &RegistryClient,
    kind: ItemKind,
    item: &RegistryItem,
    install_dir: &Path,
    force: bool,
) -> Result<AddResult, InstallError> {
    let dest = install_dir.join(&item.name);
    filesystem::create_dir_all(&dest).map_err(|e| InstallError::Destination {
        path: dest.clone(),
        error: e.to_string(),
    })?;

    let source = client.item_source_dir(kind, &item.name);
    let source_label = source
        .as_ref()
        .map_or_else(|| client.registry_url().to_string(), |p| p.display().to_string());

    let outcome = match source {
        Some(src) => match filesystem::copy_tree(&src, &dest, &[ITEM_MANIFEST_FILE_NAME], force) {
            Ok(actions) if actions.is_empty() => {
                write_placeholder(&dest, kind, item, "source directory is empty")?
            }
            Ok(actions) => {
                let copied = actions
                    .iter()
                    .filter(|a| matches!(a, CopyAction::Copied(_)))
                    .count();
                let skipped = actions.len() - copied;
                for action in &actions {
                    if let CopyAction::Skipped(path) = action {
                        tracing::warn!("Skipped existing file {}", path.display());
                    }
                }
                InstallOutcome::Installed { copied, skipped }
            }
            Err(e) => {
                tracing::warn!("Copy failed for '{}': {e}", item.name);
                write_placeholder(&dest, kind, item, &format!("copy failed: {e}"))?
            }
        },
        None => write_placeholder(&dest, kind, item, "no local source files in the registry")?,
    };

    let metadata = InstalledMetadata::for_item(item, &source_label);
    metadata.write_to(&dest)?;

    Ok(AddResult {
        kind,
        item: item.clone(),
        install_path: dest,
        outcome,
    })
}

fn write_placeholder(
    dest: &Path,
    kind: ItemKind,
    item: &RegistryItem,
    reason: &str,
) -> Result<InstallOutcome, InstallError> {
    let mut vars = HashMap::new();
    vars.insert("name", item.name.clone());
    vars.insert("kind", kind.to_string());
    vars.insert(
        "description",
        item.description.clone().unwrap_or_else(|| "No description".to_string()),
    );
    let content = filesystem::apply_template(PLACEHOLDER_TEMPLATE, &vars);
    filesystem::write_file(&dest.join("index.ts"), &content)?;

    Ok(InstallOutcome::PlaceholderFallback {
        reason: reason.to_string(),
    })
}
