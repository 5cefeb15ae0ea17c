//! Business logic
//!
//! The core modules contain the install pipeline, scaffolding generator,
//! and project introspection. CLI concerns (argument parsing, output
//! formatting) live in [`crate::cli`].

pub mod add;
pub mod generator;
pub mod init;
pub mod kit_config;
pub mod list;
pub mod metadata;
pub mod project;
