//! Component registry
//!
//! Handles the registry index model and fetching item definitions from a
//! local registry directory or a remote HTTP registry.

pub mod cache;
pub mod client;
pub mod index;

pub use client::RegistryClient;
pub use index::{ItemKind, RegistryIndex, RegistryItem, Resolution};
