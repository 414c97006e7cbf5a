use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::context::ParseContext;
use crate::error::{Result, SettingsError};
use crate::store::provider::SettingsStore;

/// Ordered raw lines per section name
pub type SectionMap = BTreeMap<String, Vec<String>>;

/// Source of fresh section data for a reloadable [`MemoryStore`]
pub type Reloader =
    dyn Fn() -> std::result::Result<SectionMap, Box<dyn StdError + Send + Sync>> + Send + Sync;

/// In-memory settings store.
///
/// Holds sections as ordered lists of raw lines in the `name = value` shape,
/// with `;`/`#` comment lines and blank lines kept verbatim so that
/// [`SettingsStore::read_section`] has something to strip. This is the store
/// used by tests and by callers that assemble settings programmatically; a
/// file-format parser front-end would populate one of these.
pub struct MemoryStore {
    sections: RwLock<SectionMap>,
    context: ParseContext,
    reloader: Option<Box<Reloader>>,
}

impl MemoryStore {
    /// Create an empty store with the invariant parse context
    pub fn new() -> Self {
        Self {
            sections: RwLock::new(SectionMap::new()),
            context: ParseContext::invariant(),
            reloader: None,
        }
    }

    /// Replace the parse context reported by this store
    pub fn with_context(mut self, context: ParseContext) -> Self {
        self.context = context;
        self
    }

    /// Attach a reload source. The store reports `can_reload` once one is set.
    pub fn with_reloader(mut self, reloader: Box<Reloader>) -> Self {
        self.reloader = Some(reloader);
        self
    }

    /// Replace the raw lines of a section, creating it if needed
    pub fn set_section(&mut self, section: impl Into<String>, lines: Vec<String>) {
        self.write().insert(section.into(), lines);
    }

    /// Upsert one `name = value` setting line within a section
    pub fn set(&mut self, section: &str, name: &str, value: &str) {
        let mut sections = self.write();
        let lines = sections.entry(section.to_string()).or_default();
        let rendered = format!("{} = {}", name, value);
        match lines.iter().position(|line| line_key(line) == Some(name)) {
            Some(i) => lines[i] = rendered,
            None => lines.push(rendered),
        }
    }

    /// Remove a setting line from a section; returns whether one was removed
    pub fn remove(&mut self, section: &str, name: &str) -> bool {
        let mut sections = self.write();
        match sections.get_mut(section) {
            Some(lines) => match lines.iter().position(|line| line_key(line) == Some(name)) {
                Some(i) => {
                    lines.remove(i);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    // Lock accessors that survive poisoning; the data is plain and remains
    // consistent even if a writer panicked.
    fn read(&self) -> RwLockReadGuard<'_, SectionMap> {
        self.sections.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SectionMap> {
        self.sections.write().unwrap_or_else(|e| e.into_inner())
    }
}

/// True for blank lines and `;`/`#` comment lines
fn is_comment_or_blank(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#')
}

/// Split a raw `name = value` line; `None` for comments and non-setting lines
fn split_line(line: &str) -> Option<(&str, &str)> {
    if is_comment_or_blank(line) {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim()))
}

fn line_key(line: &str) -> Option<&str> {
    split_line(line).map(|(key, _)| key)
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn section_names(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    fn has_section(&self, section: &str) -> bool {
        self.read().contains_key(section)
    }

    fn read_section(&self, section: &str, strip_comments: bool) -> Result<Vec<String>> {
        let sections = self.read();
        let lines = sections
            .get(section)
            .ok_or_else(|| SettingsError::SectionNotFound(section.to_string()))?;
        if strip_comments {
            Ok(lines
                .iter()
                .filter(|line| !is_comment_or_blank(line))
                .cloned()
                .collect())
        } else {
            Ok(lines.clone())
        }
    }

    fn read_setting(&self, section: &str, name: &str) -> Option<String> {
        let sections = self.read();
        let lines = sections.get(section)?;
        lines.iter().find_map(|line| match split_line(line) {
            Some((key, value)) if key == name => Some(value.to_string()),
            _ => None,
        })
    }

    fn parse_context(&self) -> &ParseContext {
        &self.context
    }

    fn can_reload(&self) -> bool {
        self.reloader.is_some()
    }

    fn reload(&self) -> Result<()> {
        match &self.reloader {
            Some(reloader) => {
                let fresh = reloader().map_err(|e| SettingsError::reload(self.name(), e))?;
                *self.write() = fresh;
                Ok(())
            }
            None => Err(SettingsError::Store {
                operation: "reload".to_string(),
                message: format!("store '{}' has no reload source", self.name()),
            }),
        }
    }
}

// Reloader closures are not Debug; report the rest by hand.
impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("sections", &*self.read())
            .field("context", &self.context)
            .field("can_reload", &self.reloader.is_some())
            .finish()
    }
}
