//! add-plugin library interface
//!
//! This crate inserts one new entry into the community plugin registry,
//! a JSON array kept in `community-plugins.json`.
//!
//! # Module Organization
//!
//! - [`errors`] - Error types (RegistryError, Result)
//! - [`status`] - Exit status codes (ExitStatus)
//! - [`config`] - The hardcoded edit: registry path, anchor id, new entry
//! - [`registry`] - Load, locate, insert and save operations
//! - [`core`] - Main execution logic

pub mod config;
pub mod core;
pub mod errors;
pub mod registry;
pub mod status;
