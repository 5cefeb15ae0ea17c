//! Infrastructure layer
//!
//! Filesystem primitives used by the core modules.

pub mod filesystem;
