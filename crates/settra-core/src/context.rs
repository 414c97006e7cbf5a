//! Numeric parse context.
//!
//! A [`ParseContext`] is the opaque locale handle a store exposes for
//! converting numeric text. It carries the separators and sign character
//! used by the store's raw values; every numeric conversion in the typed
//! layer goes through it. Date/time and duration parsing are
//! locale-independent and do not consult the context.

/// Locale rules applied when parsing numeric setting values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseContext {
    decimal_separator: char,
    group_separator: char,
    negative_sign: char,
}

impl ParseContext {
    /// The invariant context: `.` decimal point, `,` digit grouping, `-` sign.
    pub const fn invariant() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: ',',
            negative_sign: '-',
        }
    }

    pub const fn new(decimal_separator: char, group_separator: char, negative_sign: char) -> Self {
        Self {
            decimal_separator,
            group_separator,
            negative_sign,
        }
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn group_separator(&self) -> char {
        self.group_separator
    }

    pub fn negative_sign(&self) -> char {
        self.negative_sign
    }

    /// Rewrite a raw numeric string into the form `str::parse` accepts:
    /// surrounding whitespace trimmed, group separators dropped, the
    /// context's decimal separator mapped to `.` and its leading negative
    /// sign mapped to `-`. Returns `None` for empty input; anything else is
    /// left for the target type's parser to accept or reject.
    pub(crate) fn normalize_number(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let mut out = String::with_capacity(trimmed.len());
        for (i, c) in trimmed.char_indices() {
            if c == self.group_separator {
                continue;
            } else if c == self.decimal_separator {
                out.push('.');
            } else if c == self.negative_sign && i == 0 {
                out.push('-');
            } else {
                out.push(c);
            }
        }
        Some(out)
    }
}

impl Default for ParseContext {
    fn default() -> Self {
        Self::invariant()
    }
}
