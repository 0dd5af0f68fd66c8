//! Main execution logic
//!
//! One pass: load the registry, splice the new entry in before the anchor,
//! write the file back, report on stdout. When the anchor is absent the file
//! is not rewritten at all.

use std::path::Path;

use crate::config;
use crate::errors::Result;
use crate::registry;
use crate::status::ExitStatus;

/// Outcome of a registry edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The entry was inserted at this index and the file rewritten
    Inserted(usize),
    /// The anchor id is absent; the file was left untouched
    AnchorMissing,
}

/// Run the edit against the registry file in the current directory and
/// report the outcome.
///
/// Anchor-not-found is an expected condition, reported on stdout with a
/// zero exit status. Hard errors go to stderr with a non-zero status.
pub fn run() -> ExitStatus {
    match add_plugin(Path::new(config::REGISTRY_PATH)) {
        Ok(Outcome::Inserted(pos)) => {
            println!("Plugin inserted at position {pos}");
            ExitStatus::Success
        }
        Ok(Outcome::AnchorMissing) => {
            println!("{} not found", config::ANCHOR_ID);
            ExitStatus::Success
        }
        Err(err) => {
            eprintln!("add-plugin: {err}");
            ExitStatus::Error
        }
    }
}

/// Insert the configured plugin before the anchor entry in the registry at
/// `path`. The file is only rewritten when the anchor is present.
pub fn add_plugin(path: &Path) -> Result<Outcome> {
    let mut entries = registry::load(path)?;
    let entry = serde_json::to_value(config::new_plugin())?;

    match registry::insert_before(&mut entries, config::ANCHOR_ID, entry) {
        Some(pos) => {
            registry::save(path, &entries)?;
            Ok(Outcome::Inserted(pos))
        }
        None => Ok(Outcome::AnchorMissing),
    }
}
