use crate::context::ParseContext;

/// One entry of a record's field-descriptor table: the setting name the
/// field binds to, a type tag for diagnostics, and an apply function that
/// parses a raw string and writes the field on success.
pub struct FieldBinding<T> {
    name: &'static str,
    type_name: &'static str,
    apply: fn(&mut T, &str, &ParseContext) -> bool,
}

impl<T> FieldBinding<T> {
    pub fn new(
        name: &'static str,
        type_name: &'static str,
        apply: fn(&mut T, &str, &ParseContext) -> bool,
    ) -> Self {
        Self {
            name,
            type_name,
            apply,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Parse `raw` and write the field; returns whether the write happened
    pub fn apply(&self, target: &mut T, raw: &str, ctx: &ParseContext) -> bool {
        (self.apply)(target, raw, ctx)
    }
}

/// A record whose fields can be populated from one settings section.
///
/// The descriptor table is the whole binding contract: field name is used
/// verbatim as the setting name, and the table's order is the enumeration
/// order (order has no semantic effect, fields are independent). Implement
/// via the [`bindable!`](crate::bindable) macro or by hand for records that
/// need a custom table.
pub trait Bindable: Sized {
    /// Name of the record type, for diagnostics
    fn type_name() -> &'static str;

    /// The field-descriptor table for this record type
    fn fields() -> Vec<FieldBinding<Self>>;
}

/// Implement [`Bindable`] for a struct from a list of its fields.
///
/// Every listed field type must implement
/// [`SettingValue`](crate::typed::SettingValue); enums get that through
/// [`setting_enum!`](crate::setting_enum).
///
/// ```
/// use settra_core::bindable;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct ServerSettings {
///     host: String,
///     port: u32,
///     verbose: bool,
/// }
/// bindable!(ServerSettings { host: String, port: u32, verbose: bool });
/// ```
#[macro_export]
macro_rules! bindable {
    ($ty:ty { $($field:ident: $ftype:ty),* $(,)? }) => {
        impl $crate::bind::Bindable for $ty {
            fn type_name() -> &'static str {
                stringify!($ty)
            }

            fn fields() -> Vec<$crate::bind::FieldBinding<Self>> {
                vec![
                    $($crate::bind::FieldBinding::new(
                        stringify!($field),
                        <$ftype as $crate::typed::SettingValue>::TYPE_NAME,
                        |target: &mut Self, raw: &str, ctx: &$crate::context::ParseContext| {
                            match <$ftype as $crate::typed::SettingValue>::parse_setting(raw, ctx) {
                                Some(value) => {
                                    target.$field = value;
                                    true
                                }
                                None => false,
                            }
                        },
                    )),*
                ]
            }
        }
    };
}
