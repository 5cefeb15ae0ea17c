//! Registry index model
//!
//! The index is a JSON document listing every installable item grouped by
//! kind. Items are small metadata records; the item's actual files live in
//! a directory tree next to the index (local registries) or are absent
//! entirely (builtin fallback index).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::defaults;

/// The five kinds of installable registry items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Block,
    Component,
    Global,
    Collection,
    Plugin,
}

impl ItemKind {
    /// All kinds, in display order
    pub const ALL: [ItemKind; 5] = [
        ItemKind::Block,
        ItemKind::Component,
        ItemKind::Global,
        ItemKind::Collection,
        ItemKind::Plugin,
    ];

    /// Plural directory name used in registry layouts (`blocks/`, ...)
    pub fn dir_name(self) -> &'static str {
        match self {
            ItemKind::Block => "blocks",
            ItemKind::Component => "components",
            ItemKind::Global => "globals",
            ItemKind::Collection => "collections",
            ItemKind::Plugin => "plugins",
        }
    }

    /// Hard-coded default install path inside a project
    pub fn default_path(self) -> &'static str {
        match self {
            ItemKind::Block => defaults::DEFAULT_BLOCKS_PATH,
            ItemKind::Component => defaults::DEFAULT_COMPONENTS_PATH,
            ItemKind::Global => defaults::DEFAULT_GLOBALS_PATH,
            ItemKind::Collection => defaults::DEFAULT_COLLECTIONS_PATH,
            ItemKind::Plugin => defaults::DEFAULT_PLUGINS_PATH,
        }
    }

    /// Default import alias inside a project
    pub fn default_alias(self) -> &'static str {
        match self {
            ItemKind::Block => defaults::DEFAULT_BLOCKS_ALIAS,
            ItemKind::Component => defaults::DEFAULT_COMPONENTS_ALIAS,
            ItemKind::Global => defaults::DEFAULT_GLOBALS_ALIAS,
            ItemKind::Collection => defaults::DEFAULT_COLLECTIONS_ALIAS,
            ItemKind::Plugin => defaults::DEFAULT_PLUGINS_ALIAS,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemKind::Block => "block",
            ItemKind::Component => "component",
            ItemKind::Global => "global",
            ItemKind::Collection => "collection",
            ItemKind::Plugin => "plugin",
        };
        write!(f, "{name}")
    }
}

/// A single installable registry item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistryItem {
    /// Item name (unique within its kind)
    pub name: String,

    /// Short description
    #[serde(default)]
    pub description: Option<String>,

    /// Category for grouping in listings
    #[serde(default)]
    pub category: Option<String>,

    /// Search tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Item version
    #[serde(default)]
    pub version: Option<String>,

    /// npm packages required by this item
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Other registry items this item builds on
    #[serde(default)]
    pub registry_dependencies: Vec<String>,

    /// Feature list shown after install (plugins)
    #[serde(default)]
    pub features: Vec<String>,

    /// Config snippet shown after install (plugins)
    #[serde(default)]
    pub config_snippet: Option<String>,
}

impl RegistryItem {
    /// Create a minimal item with just a name and description
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: Some(description.to_string()),
            category: None,
            tags: Vec::new(),
            version: Some("0.1.0".to_string()),
            dependencies: Vec::new(),
            registry_dependencies: Vec::new(),
            features: Vec::new(),
            config_snippet: None,
        }
    }

    fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(ToString::to_string).collect();
        self
    }

    fn with_dependencies(mut self, deps: &[&str]) -> Self {
        self.dependencies = deps.iter().map(ToString::to_string).collect();
        self
    }
}

/// Result of resolving a name across kinds
#[derive(Debug, Clone)]
pub enum Resolution {
    /// Exactly one kind defines this name
    Found(ItemKind, RegistryItem),
    /// No kind defines this name
    NotFound,
    /// More than one kind defines this name and no kind was requested
    Ambiguous(Vec<ItemKind>),
}

/// The registry index: all items grouped by kind
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistryIndex {
    /// Index schema version
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub blocks: Vec<RegistryItem>,

    #[serde(default)]
    pub components: Vec<RegistryItem>,

    #[serde(default)]
    pub globals: Vec<RegistryItem>,

    #[serde(default)]
    pub collections: Vec<RegistryItem>,

    #[serde(default)]
    pub plugins: Vec<RegistryItem>,
}

impl RegistryIndex {
    /// Parse from a JSON string
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Serialize to a pretty JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// All items of one kind
    pub fn list(&self, kind: ItemKind) -> &[RegistryItem] {
        match kind {
            ItemKind::Block => &self.blocks,
            ItemKind::Component => &self.components,
            ItemKind::Global => &self.globals,
            ItemKind::Collection => &self.collections,
            ItemKind::Plugin => &self.plugins,
        }
    }

    /// Look up an item by name within one kind
    pub fn get(&self, kind: ItemKind, name: &str) -> Option<&RegistryItem> {
        self.list(kind).iter().find(|item| item.name == name)
    }

    /// Total number of items across all kinds
    pub fn total(&self) -> usize {
        ItemKind::ALL.iter().map(|k| self.list(*k).len()).sum()
    }

    /// Resolve a name across kinds.
    ///
    /// With an explicit kind this is a direct lookup. Without one, a name
    /// present in more than one kind resolves to [`Resolution::Ambiguous`]
    /// rather than silently preferring any kind.
    pub fn resolve(&self, name: &str, kind: Option<ItemKind>) -> Resolution {
        if let Some(kind) = kind {
            return match self.get(kind, name) {
                Some(item) => Resolution::Found(kind, item.clone()),
                None => Resolution::NotFound,
            };
        }

        let matches: Vec<(ItemKind, &RegistryItem)> = ItemKind::ALL
            .iter()
            .filter_map(|k| self.get(*k, name).map(|item| (*k, item)))
            .collect();

        match matches.as_slice() {
            [] => Resolution::NotFound,
            [(kind, item)] => Resolution::Found(*kind, (*item).clone()),
            many => Resolution::Ambiguous(many.iter().map(|(k, _)| *k).collect()),
        }
    }

    /// Case-insensitive substring search within one kind.
    ///
    /// Matches against name, description, category, and tags. No ranking;
    /// results keep index order.
    pub fn search_kind(&self, kind: ItemKind, query: &str) -> Vec<&RegistryItem> {
        let query = query.to_lowercase();
        self.list(kind)
            .iter()
            .filter(|item| item_matches(item, &query))
            .collect()
    }

    /// Search every kind, returning matches grouped by kind
    pub fn search(&self, query: &str) -> Vec<(ItemKind, Vec<&RegistryItem>)> {
        ItemKind::ALL
            .iter()
            .map(|kind| (*kind, self.search_kind(*kind, query)))
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }

    /// The builtin index compiled into the binary.
    ///
    /// Used as the offline fallback when neither a local registry
    /// directory nor the remote index is reachable. Items in this index
    /// have no local source trees, so installs from it take the
    /// placeholder path.
    pub fn builtin() -> Self {
        Self {
            version: Some("1.0.0".to_string()),
            blocks: vec![
                RegistryItem::new("hero-block", "Hero section with heading, text, and call to action")
                    .with_category("marketing")
                    .with_tags(&["hero", "landing"]),
                RegistryItem::new("call-to-action", "Call to action banner with configurable buttons")
                    .with_category("marketing")
                    .with_tags(&["cta", "banner"]),
                RegistryItem::new("faq-block", "Frequently asked questions accordion")
                    .with_category("content")
                    .with_tags(&["faq", "accordion"]),
            ],
            components: vec![
                RegistryItem::new("media-card", "Card component rendering an upload with caption")
                    .with_category("content")
                    .with_tags(&["card", "media"]),
                RegistryItem::new("rich-text", "Rich text renderer for Lexical content")
                    .with_category("content")
                    .with_tags(&["richtext", "lexical"]),
            ],
            globals: vec![
                RegistryItem::new("header", "Site header with navigation links")
                    .with_tags(&["navigation"]),
                RegistryItem::new("footer", "Site footer with link columns")
                    .with_tags(&["navigation"]),
            ],
            collections: vec![
                RegistryItem::new("pages", "Pages collection with layout blocks and SEO fields")
                    .with_tags(&["pages", "seo"]),
                RegistryItem::new("media", "Media collection with alt text and focal point")
                    .with_tags(&["uploads"]),
            ],
            plugins: vec![{
                let mut item = RegistryItem::new(
                    "better-auth",
                    "Authentication plugin backed by Better Auth",
                )
                .with_category("auth")
                .with_tags(&["auth", "totp"])
                .with_dependencies(&["better-auth"]);
                item.features = vec![
                    "Email and password authentication".to_string(),
                    "Two-factor authentication (TOTP)".to_string(),
                    "Session management collections".to_string(),
                ];
                item.config_snippet = Some(
                    "import { betterAuthPlugin } from '@/plugins/better-auth'\n\n\
                     // payload.config.ts\n\
                     plugins: [betterAuthPlugin()]"
                        .to_string(),
                );
                item
            }],
        }
    }
}

fn item_matches(item: &RegistryItem, query: &str) -> bool {
    if item.name.to_lowercase().contains(query) {
        return true;
    }
    if let Some(desc) = &item.description {
        if desc.to_lowercase().contains(query) {
            return true;
        }
    }
    if let Some(category) = &item.category {
        if category.to_lowercase().contains(query) {
            return true;
        }
    }
    item.tags.iter().any(|tag| tag.to_lowercase().contains(query))
}
