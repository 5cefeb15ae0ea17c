//! Filesystem operations
//!
//! Handles file and directory operations: tree copies with per-file
//! skip/overwrite semantics, JSON read/write, and `{{var}}` template
//! substitution.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::FilesystemError;

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), FilesystemError> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(path, content).map_err(|e| FilesystemError::WriteFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Read content from a file
pub fn read_file(path: &Path) -> Result<String, FilesystemError> {
    std::fs::read_to_string(path).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Read and deserialize a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, FilesystemError> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Serialize and write a JSON file (pretty-printed, trailing newline)
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), FilesystemError> {
    let content = serde_json::to_string_pretty(value).map_err(|e| FilesystemError::WriteFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    write_file(path, &format!("{content}\n"))
}

/// Substitute `{{key}}` placeholders in a template
pub fn apply_template(template: &str, vars: &HashMap<&str, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{key}}}}}"), value);
    }
    result
}

/// Result of copying one file during a tree copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyAction {
    /// File was copied
    Copied(PathBuf),
    /// Destination existed and overwrite was not forced
    Skipped(PathBuf),
}

/// Copy every file under `src` to `dest`, preserving relative paths.
///
/// Files named in `exclude` (matched against the file name at any depth)
/// are not copied. Existing destination files are skipped unless `force`
/// is set. Returns one [`CopyAction`] per visited file.
pub fn copy_tree(
    src: &Path,
    dest: &Path,
    exclude: &[&str],
    force: bool,
) -> Result<Vec<CopyAction>, FilesystemError> {
    let mut actions = Vec::new();

    for entry in walkdir::WalkDir::new(src)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
    {
        let file_name = entry.file_name().to_string_lossy();
        if exclude.iter().any(|ex| *ex == file_name) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(src)
            .expect("walkdir yields paths under its root");
        let target = dest.join(relative);

        if target.exists() && !force {
            actions.push(CopyAction::Skipped(target));
            continue;
        }

        if let Some(parent) = target.parent() {
            create_dir_all(parent)?;
        }
        std::fs::copy(entry.path(), &target).map_err(|e| FilesystemError::CopyFile {
            from: entry.path().to_path_buf(),
            to: target.clone(),
            error: e.to_string(),
        })?;
        actions.push(CopyAction::Copied(target));
    }

    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_template_replaces_all_occurrences() {
        let mut vars = HashMap::new();
        vars.insert("name", "hero".to_string());
        let result = apply_template("{{name}} and {{name}} again, {{other}}", &vars);
        assert_eq!(result, "hero and hero again, {{other}}");
    }

    #[test]
    fn test_copy_tree_skips_excluded_and_existing() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let src = tmp.path().join("src");
        let dest = tmp.path().join("dest");
        write_file(&src.join("Component.tsx"), "component").expect("write");
        write_file(&src.join("payloadkit.json"), "{}").expect("write");
        write_file(&src.join("nested/config.ts"), "config").expect("write");
        write_file(&dest.join("Component.tsx"), "existing").expect("write");

        let actions = copy_tree(&src, &dest, &["payloadkit.json"], false).expect("copy");

        assert!(!dest.join("payloadkit.json").exists());
        assert_eq!(read_file(&dest.join("Component.tsx")).expect("read"), "existing");
        assert_eq!(read_file(&dest.join("nested/config.ts")).expect("read"), "config");
        assert_eq!(
            actions
                .iter()
                .filter(|a| matches!(a, CopyAction::Skipped(_)))
                .count(),
            1
        );
    }

    #[test]
    fn test_copy_tree_force_overwrites() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let src = tmp.path().join("src");
        let dest = tmp.path().join("dest");
        write_file(&src.join("config.ts"), "new").expect("write");
        write_file(&dest.join("config.ts"), "old").expect("write");

        copy_tree(&src, &dest, &[], true).expect("copy");
        assert_eq!(read_file(&dest.join("config.ts")).expect("read"), "new");
    }

    #[test]
    fn test_json_roundtrip() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("data.json");
        let value = vec!["a".to_string(), "b".to_string()];
        write_json(&path, &value).expect("write");
        let loaded: Vec<String> = read_json(&path).expect("read");
        assert_eq!(loaded, value);
    }
}
