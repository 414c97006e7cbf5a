pub mod memory;
pub mod provider;

/// Re-export key types
pub use memory::{MemoryStore, Reloader, SectionMap};
pub use provider::SettingsStore;
