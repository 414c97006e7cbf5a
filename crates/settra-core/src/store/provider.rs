use std::fmt::Debug;

use crate::context::ParseContext;
use crate::error::{Result, SettingsError};

/// Trait for settings stores that expose named sections of key/value settings
pub trait SettingsStore: Send + Sync + Debug {
    /// Get the name of this store
    fn name(&self) -> &str;

    /// List the names of all sections in the store
    fn section_names(&self) -> Vec<String>;

    /// Check whether a section exists
    fn has_section(&self, section: &str) -> bool;

    /// Read the raw lines of a section, in order. With `strip_comments` set,
    /// comment and blank lines are omitted.
    fn read_section(&self, section: &str, strip_comments: bool) -> Result<Vec<String>>;

    /// Look up the raw string value of a setting, or `None` when absent
    fn read_setting(&self, section: &str, name: &str) -> Option<String>;

    /// The parse context governing numeric conversions of this store's values
    fn parse_context(&self) -> &ParseContext;

    /// Whether this store can re-read its backing data
    fn can_reload(&self) -> bool {
        false
    }

    /// Re-read the backing data. Stores that cannot reload fail.
    fn reload(&self) -> Result<()> {
        Err(SettingsError::Store {
            operation: "reload".to_string(),
            message: format!("store '{}' does not support reloading", self.name()),
        })
    }
}
