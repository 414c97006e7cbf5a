/// Enumerations readable from settings by variant name.
///
/// Implementors expose a name table; matching is case-insensitive after
/// trimming. The [`setting_enum!`](crate::setting_enum) macro implements
/// both this trait and [`SettingValue`](crate::typed::SettingValue) for a
/// plain fieldless enum.
pub trait SettingEnum: Sized + Copy + PartialEq + 'static {
    /// The declared variants as (name, value) pairs
    fn variants() -> &'static [(&'static str, Self)];

    /// Case-insensitive variant lookup by trimmed name
    fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim();
        Self::variants()
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(wanted))
            .map(|(_, value)| *value)
    }

    /// The canonical name of this value
    fn name(&self) -> &'static str {
        Self::variants()
            .iter()
            .find(|(_, value)| value == self)
            .map(|(name, _)| *name)
            .unwrap_or("<unnamed>")
    }
}

/// Implement [`SettingEnum`] and [`SettingValue`] for a fieldless enum.
///
/// ```
/// use settra_core::setting_enum;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Color { Red, Green, Blue }
/// setting_enum!(Color { Red, Green, Blue });
/// ```
#[macro_export]
macro_rules! setting_enum {
    ($ty:ty { $($variant:ident),+ $(,)? }) => {
        impl $crate::typed::SettingEnum for $ty {
            fn variants() -> &'static [(&'static str, Self)] {
                &[$((stringify!($variant), <$ty>::$variant)),+]
            }
        }

        impl $crate::typed::SettingValue for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn parse_setting(raw: &str, _ctx: &$crate::context::ParseContext) -> Option<Self> {
                <Self as $crate::typed::SettingEnum>::from_name(raw)
            }
        }
    };
}
