pub mod binder;
pub mod descriptor;

/// Re-export key types
pub use binder::{bind_record, bind_report, read_enum_list, read_record, BindReport};
pub use descriptor::{Bindable, FieldBinding};
