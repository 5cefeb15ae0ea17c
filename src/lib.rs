//! PayloadKit - component registry and scaffolding toolkit for PayloadCMS
//!
//! This library provides the core functionality for installing registry
//! items (blocks, components, globals, collections, plugins) into a
//! PayloadCMS project and for scaffolding new ones from templates.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (install pipeline, generator, project detection)
//! - [`registry`] - Component registry index, client, and cache
//! - [`infra`] - Infrastructure layer (filesystem)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
pub mod registry;
