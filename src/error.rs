//! Error types for payloadkit
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Project detection and configuration errors
#[derive(Error, Debug)]
pub enum ProjectError {
    /// Not a PayloadCMS project
    #[error("Not a PayloadCMS project: no 'payload' dependency in {path}")]
    NotPayloadProject { path: PathBuf },

    /// package.json is missing
    #[error("Not a PayloadCMS project: no package.json in {path}")]
    PackageJsonMissing { path: PathBuf },

    /// package.json exists but cannot be parsed
    #[error("Not a PayloadCMS project: package.json at '{path}' is malformed: {error}")]
    PackageJsonMalformed { path: PathBuf, error: String },

    /// Config file exists but cannot be parsed
    #[error("Failed to parse payloadkit.json at '{path}': {error}")]
    ConfigParse { path: PathBuf, error: String },

    /// IO error while inspecting the project
    #[error("IO error for '{path}': {error}")]
    IoError { path: PathBuf, error: String },
}

/// Registry resolution errors
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Item not found in any kind
    #[error("Item '{name}' not found in the registry")]
    NotFound { name: String },

    /// Name matches more than one kind
    #[error("Item '{name}' exists as more than one kind ({}). Disambiguate with --kind", kinds.join(", "))]
    Ambiguous { name: String, kinds: Vec<String> },

    /// Network error fetching the index
    #[error("Network error fetching registry index from '{url}': {error}")]
    NetworkError { url: String, error: String },

    /// Index parse error
    #[error("Failed to parse registry index: {0}")]
    ParseError(String),

    /// IO error reading a local registry
    #[error("IO error for '{path}': {error}")]
    IoError { path: PathBuf, error: String },
}

/// Install pipeline errors
#[derive(Error, Debug)]
pub enum InstallError {
    /// Destination could not be prepared
    #[error("Failed to prepare destination '{path}': {error}")]
    Destination { path: PathBuf, error: String },

    /// Metadata write failed
    #[error("Failed to write install metadata to '{path}': {error}")]
    Metadata { path: PathBuf, error: String },

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),
}

/// Generator errors
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Name is not safe to interpolate into generated source
    #[error("Invalid name '{name}': names must start with a letter and contain only letters, digits, '-' or '_'")]
    InvalidName { name: String },

    /// Destination already exists
    #[error("Destination '{path}' already exists. Use --force to overwrite")]
    DestinationExists { path: PathBuf },

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to copy file
    #[error("Failed to copy '{from}' to '{to}': {error}")]
    CopyFile {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },
}
