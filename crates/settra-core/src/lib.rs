// Public module tree
pub mod bind;
pub mod context;
pub mod error;
pub mod store;
pub mod typed;

// Re-export key public types/traits for easier use by callers.
pub use bind::{bind_record, bind_report, read_enum_list, read_record};
pub use bind::{BindReport, Bindable, FieldBinding};
pub use context::ParseContext;
pub use error::{Result, SettingsError};
pub use store::{MemoryStore, SettingsStore};
pub use typed::{SettingEnum, SettingValue, SettingsReader};
