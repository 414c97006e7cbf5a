use chrono::{NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;

use crate::error::{Result, SettingsError};
use crate::store::SettingsStore;
use crate::typed::enums::SettingEnum;
use crate::typed::value::{unbox, SettingValue};

/// Typed read surface over any [`SettingsStore`].
///
/// Two call shapes are provided and both are part of the contract:
///
/// * [`read`](Self::read) / [`read_or`](Self::read_or) return a [`Result`];
///   absence without a default is [`SettingsError::UnsetSetting`], a present
///   but unparseable value is [`SettingsError::InvalidValue`]. A default
///   covers *absence only* — invalid data still fails, so a typo in a
///   settings file is never silently papered over.
/// * [`get_value`](Self::get_value) / [`get_enum`](Self::get_enum) never
///   fail: they return `true` and overwrite the target on success, and leave
///   it untouched otherwise.
///
/// Raw values are unboxed (wrapping quotes stripped, escapes decoded) before
/// conversion.
pub trait SettingsReader: SettingsStore {
    /// Read a mandatory typed setting
    fn read<T: SettingValue>(&self, section: &str, name: &str) -> Result<T> {
        let raw = self
            .read_setting(section, name)
            .ok_or_else(|| SettingsError::unset(section, name))?;
        match parse_raw(&raw, self.parse_context()) {
            Some(value) => Ok(value),
            None => Err(SettingsError::invalid(section, name, raw, T::TYPE_NAME)),
        }
    }

    /// Read a typed setting, falling back to `default` when it is absent
    fn read_or<T: SettingValue>(&self, section: &str, name: &str, default: T) -> Result<T> {
        match self.read_setting(section, name) {
            None => Ok(default),
            Some(raw) => match parse_raw(&raw, self.parse_context()) {
                Some(value) => Ok(value),
                None => Err(SettingsError::invalid(section, name, raw, T::TYPE_NAME)),
            },
        }
    }

    /// Overwrite `value` with the parsed setting when present and parseable;
    /// returns whether it did.
    fn get_value<T: SettingValue>(&self, section: &str, name: &str, value: &mut T) -> bool {
        let Some(raw) = self.read_setting(section, name) else {
            return false;
        };
        match parse_raw(&raw, self.parse_context()) {
            Some(parsed) => {
                *value = parsed;
                true
            }
            None => false,
        }
    }

    /// [`get_value`](Self::get_value) for enumerations
    fn get_enum<E: SettingEnum + SettingValue>(
        &self,
        section: &str,
        name: &str,
        value: &mut E,
    ) -> bool {
        self.get_value(section, name, value)
    }

    // Named wrappers, one pair per supported target type.

    fn read_string(&self, section: &str, name: &str) -> Result<String> {
        self.read(section, name)
    }

    fn read_string_or(&self, section: &str, name: &str, default: &str) -> Result<String> {
        self.read_or(section, name, default.to_string())
    }

    fn read_bool(&self, section: &str, name: &str) -> Result<bool> {
        self.read(section, name)
    }

    fn read_bool_or(&self, section: &str, name: &str, default: bool) -> Result<bool> {
        self.read_or(section, name, default)
    }

    fn read_i32(&self, section: &str, name: &str) -> Result<i32> {
        self.read(section, name)
    }

    fn read_i32_or(&self, section: &str, name: &str, default: i32) -> Result<i32> {
        self.read_or(section, name, default)
    }

    fn read_u32(&self, section: &str, name: &str) -> Result<u32> {
        self.read(section, name)
    }

    fn read_u32_or(&self, section: &str, name: &str, default: u32) -> Result<u32> {
        self.read_or(section, name, default)
    }

    fn read_i64(&self, section: &str, name: &str) -> Result<i64> {
        self.read(section, name)
    }

    fn read_i64_or(&self, section: &str, name: &str, default: i64) -> Result<i64> {
        self.read_or(section, name, default)
    }

    fn read_u64(&self, section: &str, name: &str) -> Result<u64> {
        self.read(section, name)
    }

    fn read_u64_or(&self, section: &str, name: &str, default: u64) -> Result<u64> {
        self.read_or(section, name, default)
    }

    fn read_f32(&self, section: &str, name: &str) -> Result<f32> {
        self.read(section, name)
    }

    fn read_f32_or(&self, section: &str, name: &str, default: f32) -> Result<f32> {
        self.read_or(section, name, default)
    }

    fn read_f64(&self, section: &str, name: &str) -> Result<f64> {
        self.read(section, name)
    }

    fn read_f64_or(&self, section: &str, name: &str, default: f64) -> Result<f64> {
        self.read_or(section, name, default)
    }

    fn read_decimal(&self, section: &str, name: &str) -> Result<Decimal> {
        self.read(section, name)
    }

    fn read_decimal_or(&self, section: &str, name: &str, default: Decimal) -> Result<Decimal> {
        self.read_or(section, name, default)
    }

    fn read_duration(&self, section: &str, name: &str) -> Result<TimeDelta> {
        self.read(section, name)
    }

    fn read_duration_or(&self, section: &str, name: &str, default: TimeDelta) -> Result<TimeDelta> {
        self.read_or(section, name, default)
    }

    fn read_datetime(&self, section: &str, name: &str) -> Result<NaiveDateTime> {
        self.read(section, name)
    }

    fn read_datetime_or(
        &self,
        section: &str,
        name: &str,
        default: NaiveDateTime,
    ) -> Result<NaiveDateTime> {
        self.read_or(section, name, default)
    }

    fn read_enum<E: SettingEnum + SettingValue>(&self, section: &str, name: &str) -> Result<E> {
        self.read(section, name)
    }

    fn read_enum_or<E: SettingEnum + SettingValue>(
        &self,
        section: &str,
        name: &str,
        default: E,
    ) -> Result<E> {
        self.read_or(section, name, default)
    }
}

impl<S: SettingsStore + ?Sized> SettingsReader for S {}

fn parse_raw<T: SettingValue>(raw: &str, ctx: &crate::context::ParseContext) -> Option<T> {
    T::parse_setting(&unbox(raw, true), ctx)
}
