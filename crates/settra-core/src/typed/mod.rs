pub mod enums;
pub mod reader;
pub mod value;

/// Re-export key types
pub use enums::SettingEnum;
pub use reader::SettingsReader;
pub use value::{unbox, SettingValue};

// Test module declaration
#[cfg(test)]
mod tests;
