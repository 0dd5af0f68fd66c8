//! The hardcoded edit this tool performs
//!
//! This is a one-off, human-supervised registry edit: the file path, the
//! anchor id and the new entry are fixed literals rather than runtime flags.
//! To add a different plugin, change the values here.

use crate::registry::PluginEntry;

/// Registry file, relative to the current working directory.
pub const REGISTRY_PATH: &str = "community-plugins.json";

/// Id of the existing entry the new plugin goes in front of.
pub const ANCHOR_ID: &str = "kr-book-info-plugin";

/// The entry being added to the registry.
pub fn new_plugin() -> PluginEntry {
    PluginEntry {
        id: "krisp-notes-importer".to_string(),
        name: "Krisp Notes Importer".to_string(),
        author: "yshishenya".to_string(),
        description: "Automatically import Krisp meeting notes into beautifully \
                      formatted Obsidian notes with advanced analytics and smart tags."
            .to_string(),
        repo: "yshishenya/krisp-notes-importer".to_string(),
    }
}
