//! Scaffolding generator
//!
//! Synthesizes source file trees for new registry items (blocks,
//! collections, components, globals) from string templates. The
//! generators are pure: given identical inputs they produce identical
//! path/content pairs, and nothing touches the filesystem until
//! [`write_files`].

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::GeneratorError;
use crate::infra::filesystem;

/// A generated file: path relative to the item directory, plus content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedFile {
    fn new(path: &str, content: String) -> Self {
        Self {
            path: PathBuf::from(path),
            content,
        }
    }
}

/// Options for block generation
#[derive(Debug, Clone, Default)]
pub struct BlockOptions {
    /// Category recorded in the item manifest
    pub category: Option<String>,
    /// Description recorded in the manifest and config
    pub description: Option<String>,
    /// Include an icon field in props and config
    pub with_icon: bool,
    /// Layout variants; non-empty adds a layout select field
    pub layouts: Vec<String>,
}

/// Options for collection generation
#[derive(Debug, Clone, Default)]
pub struct CollectionOptions {
    /// Collection slug; derived from the name when absent
    pub slug: Option<String>,
    /// Add a slug field auto-derived from the title
    pub with_slug: bool,
    /// Enable createdAt/updatedAt timestamps
    pub with_timestamps: bool,
    /// Add a draft/published status field
    pub with_status: bool,
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("valid pattern"))
}

/// Validate a name before interpolating it into generated source.
///
/// Rejects anything that could smuggle template or code syntax into the
/// output (backticks, braces, quotes, whitespace).
pub fn validate_name(name: &str) -> Result<(), GeneratorError> {
    if name_pattern().is_match(name) {
        Ok(())
    } else {
        Err(GeneratorError::InvalidName {
            name: name.to_string(),
        })
    }
}

/// Convert a name to PascalCase.
///
/// Splits on `-`, `_`, and whitespace, capitalizing the first letter of
/// each segment. Idempotent for single-word inputs.
pub fn to_pascal_case(name: &str) -> String {
    name.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Convert a name to kebab-case for slugs.
///
/// Lowercases, turns `_` and whitespace into `-`, and inserts a hyphen
/// at lower-to-upper boundaries (`BlogPosts` -> `blog-posts`).
pub fn to_kebab_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !result.ends_with('-') && !result.is_empty() {
                result.push('-');
            }
            prev_lower = false;
        } else if c.is_uppercase() {
            if prev_lower && !result.ends_with('-') {
                result.push('-');
            }
            result.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            result.push(c);
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
        }
    }
    result.trim_matches('-').to_string()
}

/// Generate a block: component, config, barrel, and item manifest
pub fn generate_block(
    name: &str,
    options: &BlockOptions,
) -> Result<Vec<GeneratedFile>, GeneratorError> {
    validate_name(name)?;
    let pascal = to_pascal_case(name);
    let kebab = to_kebab_case(name);
    let description = options
        .description
        .clone()
        .unwrap_or_else(|| format!("{pascal} block"));

    Ok(vec![
        GeneratedFile::new("Component.tsx", block_component(&pascal, options)),
        GeneratedFile::new("config.ts", block_config(&pascal, &kebab, &description, options)),
        GeneratedFile::new("index.ts", block_barrel(&pascal)),
        GeneratedFile::new("payloadkit.json", block_manifest(&kebab, &description, options)),
    ])
}

fn block_component(pascal: &str, options: &BlockOptions) -> String {
    let icon_prop = if options.with_icon {
        "\n  icon?: string"
    } else {
        ""
    };
    let icon_destructure = if options.with_icon { ", icon" } else { "" };
    let icon_render = if options.with_icon {
        "\n      {icon && <span className=\"block-icon\">{icon}</span>}"
    } else {
        ""
    };
    let layout_prop = if options.layouts.is_empty() {
        String::new()
    } else {
        let union = options
            .layouts
            .iter()
            .map(|l| format!("'{l}'"))
            .collect::<Vec<_>>()
            .join(" | ");
        format!("\n  layout?: {union}")
    };
    let layout_destructure = if options.layouts.is_empty() {
        ""
    } else {
        ", layout"
    };
    let layout_class = if options.layouts.is_empty() {
        String::new()
    } else {
        " data-layout={layout}".to_string()
    };

    format!(
        "import React from 'react'\n\
         \n\
         export interface {pascal}BlockType {{\n\
         \x20 heading?: string\n\
         \x20 text?: string{icon_prop}{layout_prop}\n\
         }}\n\
         \n\
         export function {pascal}Block({{ heading, text{icon_destructure}{layout_destructure} }}: {pascal}BlockType) {{\n\
         \x20 return (\n\
         \x20   <section{layout_class}>{icon_render}\n\
         \x20     {{heading && <h2>{{heading}}</h2>}}\n\
         \x20     {{text && <p>{{text}}</p>}}\n\
         \x20   </section>\n\
         \x20 )\n\
         }}\n"
    )
}

fn block_config(pascal: &str, kebab: &str, description: &str, options: &BlockOptions) -> String {
    let mut fields = vec![
        "    {\n      name: 'heading',\n      type: 'text',\n    }".to_string(),
        "    {\n      name: 'text',\n      type: 'textarea',\n    }".to_string(),
    ];
    if options.with_icon {
        fields.push(
            "    {\n      name: 'icon',\n      type: 'text',\n      admin: {\n        description: 'Icon name or emoji',\n      },\n    }"
                .to_string(),
        );
    }
    if !options.layouts.is_empty() {
        let choices = options
            .layouts
            .iter()
            .map(|l| format!("'{l}'"))
            .collect::<Vec<_>>()
            .join(", ");
        fields.push(format!(
            "    {{\n      name: 'layout',\n      type: 'select',\n      options: [{choices}],\n      defaultValue: '{}',\n    }}",
            options.layouts[0]
        ));
    }
    let fields = fields.join(",\n");

    format!(
        "import type {{ Block }} from 'payload'\n\
         \n\
         export const {pascal}: Block = {{\n\
         \x20 slug: '{kebab}',\n\
         \x20 interfaceName: '{pascal}BlockType',\n\
         \x20 labels: {{\n\
         \x20   singular: '{pascal}',\n\
         \x20   plural: '{pascal}s',\n\
         \x20 }},\n\
         \x20 admin: {{\n\
         \x20   description: '{description}',\n\
         \x20 }},\n\
         \x20 fields: [\n{fields},\n  ],\n\
         }}\n"
    )
}

fn block_barrel(pascal: &str) -> String {
    format!(
        "export {{ {pascal} }} from './config'\n\
         export {{ {pascal}Block }} from './Component'\n\
         export type {{ {pascal}BlockType }} from './Component'\n"
    )
}

fn block_manifest(kebab: &str, description: &str, options: &BlockOptions) -> String {
    let manifest = serde_json::json!({
        "name": kebab,
        "type": "block",
        "description": description,
        "category": options.category,
        "version": "0.1.0",
        "dependencies": ["react"],
        "registryDependencies": [],
    });
    format!(
        "{}\n",
        serde_json::to_string_pretty(&manifest).expect("static manifest serializes")
    )
}

/// Generate a collection config (`index.ts`)
pub fn generate_collection(
    name: &str,
    options: &CollectionOptions,
) -> Result<Vec<GeneratedFile>, GeneratorError> {
    validate_name(name)?;
    let pascal = to_pascal_case(name);
    let slug = options
        .slug
        .clone()
        .unwrap_or_else(|| to_kebab_case(name));

    let mut fields = vec![
        "    {\n      name: 'title',\n      type: 'text',\n      required: true,\n    }"
            .to_string(),
    ];
    if options.with_slug {
        fields.push(
            "    {\n      name: 'slug',\n      type: 'text',\n      unique: true,\n      admin: {\n        position: 'sidebar',\n      },\n      hooks: {\n        beforeValidate: [\n          ({ value, data }) =>\n            value ?? data?.title?.toLowerCase().replace(/\\s+/g, '-'),\n        ],\n      },\n    }"
                .to_string(),
        );
    }
    if options.with_status {
        fields.push(
            "    {\n      name: 'status',\n      type: 'select',\n      options: ['draft', 'published'],\n      defaultValue: 'draft',\n      admin: {\n        position: 'sidebar',\n      },\n    }"
                .to_string(),
        );
    }
    fields.push("    {\n      name: 'content',\n      type: 'richText',\n    }".to_string());
    let fields = fields.join(",\n");

    let timestamps = if options.with_timestamps {
        "\n  timestamps: true,"
    } else {
        ""
    };

    let content = format!(
        "import type {{ CollectionConfig }} from 'payload'\n\
         \n\
         export const {pascal}: CollectionConfig = {{\n\
         \x20 slug: '{slug}',\n\
         \x20 admin: {{\n\
         \x20   useAsTitle: 'title',\n\
         \x20 }},{timestamps}\n\
         \x20 fields: [\n{fields},\n  ],\n\
         }}\n"
    );

    Ok(vec![GeneratedFile::new("index.ts", content)])
}

/// Generate a minimal prop-forwarding React component
pub fn generate_component(name: &str) -> Result<Vec<GeneratedFile>, GeneratorError> {
    validate_name(name)?;
    let pascal = to_pascal_case(name);
    let content = format!(
        "import React from 'react'\n\
         \n\
         export interface {pascal}Props extends React.HTMLAttributes<HTMLDivElement> {{\n\
         \x20 children?: React.ReactNode\n\
         }}\n\
         \n\
         export function {pascal}({{ children, ...props }}: {pascal}Props) {{\n\
         \x20 return <div {{...props}}>{{children}}</div>\n\
         }}\n"
    );
    Ok(vec![GeneratedFile::new(&format!("{pascal}.tsx"), content)])
}

/// Generate a minimal global config
pub fn generate_global(name: &str) -> Result<Vec<GeneratedFile>, GeneratorError> {
    validate_name(name)?;
    let pascal = to_pascal_case(name);
    let kebab = to_kebab_case(name);
    let content = format!(
        "import type {{ GlobalConfig }} from 'payload'\n\
         \n\
         export const {pascal}: GlobalConfig = {{\n\
         \x20 slug: '{kebab}',\n\
         \x20 fields: [\n\
         \x20   {{\n\
         \x20     name: 'title',\n\
         \x20     type: 'text',\n\
         \x20   }},\n\
         \x20   {{\n\
         \x20     name: 'description',\n\
         \x20     type: 'textarea',\n\
         \x20   }},\n\
         \x20 ],\n\
         }}\n"
    );
    Ok(vec![GeneratedFile::new("config.ts", content)])
}

/// Write generated files under a destination directory.
///
/// Refuses to overwrite an existing destination unless `force` is set.
pub fn write_files(
    dest_dir: &Path,
    files: &[GeneratedFile],
    force: bool,
) -> Result<Vec<PathBuf>, GeneratorError> {
    if dest_dir.exists() && !force {
        return Err(GeneratorError::DestinationExists {
            path: dest_dir.to_path_buf(),
        });
    }

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let target = dest_dir.join(&file.path);
        filesystem::write_file(&target, &file.content)?;
        written.push(target);
    }
    Ok(written)
}
