//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create a test project with a payload dependency in package.json
    pub fn payload() -> Self {
        let project = Self::new();
        project.create_file(
            "package.json",
            r#"{"name":"test-site","dependencies":{"payload":"^3.0.0"}}"#,
        );
        project
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file or directory exists in the test project
    pub fn exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// List file names in a project subdirectory (sorted)
    pub fn list_dir(&self, name: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.dir.path().join(name))
            .expect("Failed to read dir")
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// A local registry directory with an index and optional item file trees
pub struct TestRegistry {
    pub dir: TempDir,
}

impl TestRegistry {
    /// Create a registry whose index lists the given items per kind.
    ///
    /// `items` maps a kind's plural directory name ("blocks", ...) to
    /// item names. Items get a generic description; no source files are
    /// written.
    pub fn new(items: &[(&str, &[&str])]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let mut index = serde_json::json!({ "version": "1.0.0" });
        for (kind, names) in items {
            let entries: Vec<serde_json::Value> = names
                .iter()
                .map(|name| {
                    serde_json::json!({
                        "name": name,
                        "description": format!("Test {name}"),
                        "version": "0.1.0",
                    })
                })
                .collect();
            index[*kind] = serde_json::Value::Array(entries);
        }
        std::fs::write(
            dir.path().join("index.json"),
            serde_json::to_string_pretty(&index).expect("serialize index"),
        )
        .expect("write index");
        Self { dir }
    }

    /// Path of the registry directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a source file to an item's file tree
    pub fn create_item_file(&self, kind: &str, item: &str, file: &str, content: &str) {
        let path = self.dir.path().join(kind).join(item).join(file);
        std::fs::create_dir_all(path.parent().expect("file has parent"))
            .expect("create item dir");
        std::fs::write(path, content).expect("write item file");
    }
}

/// Run the payloadkit binary in a project directory against a local
/// registry
pub fn run_payloadkit(project: &TestProject, registry: Option<&Path>, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_payloadkit"));
    cmd.current_dir(project.path());
    cmd.stdin(std::process::Stdio::null());
    if let Some(registry) = registry {
        cmd.env("PAYLOADKIT_REGISTRY_DIR", registry);
    }
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute payloadkit")
}

/// Collect every path under a directory, relative to it (sorted)
pub fn snapshot_tree(root: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = walkdir(root)
        .into_iter()
        .map(|p| p.strip_prefix(root).expect("under root").to_path_buf())
        .collect();
    paths.sort();
    paths
}

fn walkdir(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    if !root.exists() {
        return out;
    }
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in std::fs::read_dir(&dir).expect("read dir").filter_map(Result::ok) {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path.clone());
            }
            out.push(path);
        }
    }
    out
}
