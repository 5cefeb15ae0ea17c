//! Integration tests for `payloadkit generate`
//!
//! Scaffolding writes into the configured install directories and the
//! generated sources reflect the chosen options.

mod common;

use common::{run_payloadkit, TestProject};

#[test]
fn test_generate_block_writes_four_files() {
    let project = TestProject::new();

    let output = run_payloadkit(
        &project,
        None,
        &["generate", "block", "custom-hero", "--with-icon"],
    );

    assert!(
        output.status.success(),
        "generate should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        project.list_dir("src/blocks/custom-hero"),
        vec!["Component.tsx", "config.ts", "index.ts", "payloadkit.json"],
    );

    let component = project.read_file("src/blocks/custom-hero/Component.tsx");
    assert!(component.contains("icon"));
    let config = project.read_file("src/blocks/custom-hero/config.ts");
    assert!(config.contains("name: 'icon'"));
    assert!(config.contains("slug: 'custom-hero'"));
}

#[test]
fn test_generate_block_without_icon_omits_icon() {
    let project = TestProject::new();

    let output = run_payloadkit(&project, None, &["generate", "block", "custom-hero"]);

    assert!(output.status.success());
    assert!(!project.read_file("src/blocks/custom-hero/Component.tsx").contains("icon"));
    assert!(!project.read_file("src/blocks/custom-hero/config.ts").contains("name: 'icon'"));
}

#[test]
fn test_generate_collection_with_all_flags() {
    let project = TestProject::new();

    let output = run_payloadkit(
        &project,
        None,
        &[
            "generate",
            "collection",
            "BlogPosts",
            "--with-slug",
            "--with-status",
            "--with-timestamps",
        ],
    );

    assert!(output.status.success());
    let config = project.read_file("src/collections/BlogPosts/index.ts");
    assert!(config.contains("name: 'title'"));
    assert!(config.contains("name: 'slug'"));
    assert!(config.contains("name: 'status'"));
    assert!(config.contains("timestamps: true"));
    assert!(config.contains("slug: 'blog-posts'"));
}

#[test]
fn test_generate_collection_minimal() {
    let project = TestProject::new();

    let output = run_payloadkit(&project, None, &["generate", "collection", "Tags"]);

    assert!(output.status.success());
    let config = project.read_file("src/collections/Tags/index.ts");
    assert!(config.contains("name: 'title'"));
    assert!(config.contains("name: 'content'"));
    assert!(!config.contains("name: 'slug'"));
    assert!(!config.contains("name: 'status'"));
    assert!(!config.contains("timestamps"));
}

#[test]
fn test_generate_component_and_global() {
    let project = TestProject::new();

    let output = run_payloadkit(&project, None, &["generate", "component", "media-card"]);
    assert!(output.status.success());
    assert!(project
        .read_file("src/components/MediaCard/MediaCard.tsx")
        .contains("export function MediaCard"));

    let output = run_payloadkit(&project, None, &["generate", "global", "site-footer"]);
    assert!(output.status.success());
    assert!(project
        .read_file("src/globals/site-footer/config.ts")
        .contains("GlobalConfig"));
}

#[test]
fn test_generate_refuses_existing_destination_without_force() {
    let project = TestProject::new();
    project.create_file("src/blocks/hero/config.ts", "existing\n");

    let output = run_payloadkit(&project, None, &["generate", "block", "hero"]);

    assert!(!output.status.success());
    assert_eq!(project.read_file("src/blocks/hero/config.ts"), "existing\n");

    let output = run_payloadkit(&project, None, &["generate", "block", "hero", "--force"]);
    assert!(output.status.success());
    assert!(project.exists("src/blocks/hero/Component.tsx"));
}

#[test]
fn test_generate_rejects_unsafe_names() {
    let project = TestProject::new();

    let output = run_payloadkit(&project, None, &["generate", "block", "hero`block"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid name"), "{stderr}");
    assert!(!project.exists("src/blocks"));
}

#[test]
fn test_generate_honors_configured_paths() {
    let project = TestProject::new();
    project.create_file(
        "payloadkit.json",
        &serde_json::json!({
            "version": "1.0.0",
            "registry": "https://example.com/registry",
            "blocks": {"path": "app/blocks", "alias": "@/blocks"},
            "components": {"path": "src/components", "alias": "@/components"},
            "globals": {"path": "src/globals", "alias": "@/globals"},
            "collections": {"path": "src/collections", "alias": "@/collections"},
            "plugins": {"path": "src/plugins", "alias": "@/plugins"},
        })
        .to_string(),
    );

    let output = run_payloadkit(&project, None, &["generate", "block", "hero"]);

    assert!(output.status.success());
    assert!(project.exists("app/blocks/hero/Component.tsx"));
    assert!(!project.exists("src/blocks"));
}
