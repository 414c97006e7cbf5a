use log::warn;

use crate::bind::descriptor::{Bindable, FieldBinding};
use crate::error::{Result, SettingsError};
use crate::store::SettingsStore;
use crate::typed::enums::SettingEnum;
use crate::typed::value::{unbox, SettingValue};

/// Outcome of a lenient bind pass: which fields were written, which were
/// left alone because no setting was present, and which had a value that
/// failed to convert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
    pub bound: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
    pub failed: Vec<&'static str>,
}

impl BindReport {
    /// True when no present setting failed to convert. Skipped fields do
    /// not count against completeness.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Populate every field of `record` from settings in `section`.
///
/// Each field looks up the setting named exactly like it. Absent or empty
/// settings leave the field at its prior value and are never an error, even
/// in strict mode. A present value is unboxed (escapes kept literal) and
/// converted to the field's type; in strict mode the first conversion
/// failure aborts with [`SettingsError::FieldBinding`], otherwise failed
/// fields keep their prior value and the pass continues.
///
/// Returns `Ok(true)` iff every field either bound or was skipped as
/// absent. A record with no fields is ill-formed: strict mode fails with
/// [`SettingsError::EmptyRecord`], lenient mode returns `Ok(false)`.
pub fn bind_record<S, T>(store: &S, section: &str, record: &mut T, strict: bool) -> Result<bool>
where
    S: SettingsStore + ?Sized,
    T: Bindable,
{
    let fields = T::fields();
    if fields.is_empty() {
        if strict {
            return Err(SettingsError::EmptyRecord {
                type_name: T::type_name(),
            });
        }
        warn!(
            "record type '{}' has no bindable fields; nothing bound from section '{}'",
            T::type_name(),
            section
        );
        return Ok(false);
    }
    let report = bind_fields(store, section, record, &fields, strict)?;
    Ok(report.is_complete())
}

/// Lenient bind that also returns the per-field outcome record
pub fn bind_report<S, T>(store: &S, section: &str, record: &mut T) -> Result<BindReport>
where
    S: SettingsStore + ?Sized,
    T: Bindable,
{
    let fields = T::fields();
    if fields.is_empty() {
        return Err(SettingsError::EmptyRecord {
            type_name: T::type_name(),
        });
    }
    bind_fields(store, section, record, &fields, false)
}

/// Construct a default record and bind it from `section`
pub fn read_record<S, T>(store: &S, section: &str, strict: bool) -> Result<T>
where
    S: SettingsStore + ?Sized,
    T: Bindable + Default,
{
    let mut record = T::default();
    bind_record(store, section, &mut record, strict)?;
    Ok(record)
}

/// Parse every non-comment, non-blank line of `section` as one enum value.
///
/// Lines are unboxed and matched case-insensitively against the enum's
/// variant names. In lenient mode unparseable lines are dropped with a
/// warning; in strict mode the first one fails the whole read.
pub fn read_enum_list<S, E>(store: &S, section: &str, strict: bool) -> Result<Vec<E>>
where
    S: SettingsStore + ?Sized,
    E: SettingEnum + SettingValue,
{
    let lines = store.read_section(section, true)?;
    let ctx = store.parse_context();
    let mut values = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        match E::parse_setting(&unbox(line.trim(), false), ctx) {
            Some(value) => values.push(value),
            None if strict => {
                return Err(SettingsError::invalid(
                    section,
                    format!("line {}", index + 1),
                    line.clone(),
                    E::TYPE_NAME,
                ));
            }
            None => {
                warn!(
                    "section '{}' line {}: '{}' is not a {} value, dropped",
                    section,
                    index + 1,
                    line,
                    E::TYPE_NAME
                );
            }
        }
    }
    Ok(values)
}

fn bind_fields<S, T>(
    store: &S,
    section: &str,
    record: &mut T,
    fields: &[FieldBinding<T>],
    strict: bool,
) -> Result<BindReport>
where
    S: SettingsStore + ?Sized,
    T: Bindable,
{
    let ctx = store.parse_context();
    let mut report = BindReport::default();
    for field in fields {
        let raw = match store.read_setting(section, field.name()) {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                // Absent and empty are the same non-fatal skip; the field
                // keeps its declared default.
                warn!(
                    "section '{}': no value for field '{}', keeping its default",
                    section,
                    field.name()
                );
                report.skipped.push(field.name());
                continue;
            }
        };
        // Escape decoding stays off here so bound strings keep embedded
        // escapes literally.
        if field.apply(record, &unbox(&raw, false), ctx) {
            report.bound.push(field.name());
            continue;
        }
        if strict {
            return Err(SettingsError::FieldBinding {
                field: field.name(),
                raw,
                target: field.type_name(),
            });
        }
        warn!(
            "section '{}': value '{}' for field '{}' cannot be bound as {}, keeping its default",
            section,
            raw,
            field.name(),
            field.type_name()
        );
        report.failed.push(field.name());
    }
    Ok(report)
}
