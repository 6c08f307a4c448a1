use crate::error::DefinitionError;
use crate::nil::NilHandling;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// User-supplied flag-set options before resolution.
///
/// All fields are optional; [`RawOptions::resolve`] merges them over the fixed
/// defaults (no affixes, `include` nil handling, validation on).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawOptions {
    pub flag_prefix: Option<String>,
    pub flag_suffix: Option<String>,
    pub nil_handling: Option<String>,
    pub validate: Option<bool>,
}

impl RawOptions {
    /// Resolves raw options against the defaults. Explicit values always win.
    ///
    /// # Errors
    /// Returns [`DefinitionError::InvalidNilHandling`] if `nil_handling` is
    /// present but not a recognized policy name.
    pub fn resolve(&self) -> Result<Options, DefinitionError> {
        let nil_handling = match self.nil_handling.as_deref() {
            None => NilHandling::default(),
            Some(value) => NilHandling::from_str(value)
                .map_err(|_| DefinitionError::InvalidNilHandling { value: value.to_owned() })?,
        };

        Ok(Options {
            flag_prefix: self.flag_prefix.as_deref().map_or_else(String::new, |p| format!("{p}_")),
            flag_suffix: self.flag_suffix.as_deref().map_or_else(String::new, |s| format!("_{s}")),
            nil_handling,
            validate: self.validate.unwrap_or(true),
        })
    }
}

/// Resolved flag-set options, immutable after resolution.
///
/// A provided prefix joins the flag label as `{prefix}_` and a suffix as
/// `_{suffix}`; unset affixes contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    flag_prefix: String,
    flag_suffix: String,
    nil_handling: NilHandling,
    validate: bool,
}

impl Options {
    /// The effective generated label for a declared flag name.
    #[must_use]
    pub fn label(&self, flag: &str) -> String {
        format!("{}{flag}{}", self.flag_prefix, self.flag_suffix)
    }

    #[must_use]
    pub const fn nil_handling(&self) -> NilHandling {
        self.nil_handling
    }

    /// Whether a range constraint is emitted for the packed attribute.
    #[must_use]
    pub const fn validate(&self) -> bool {
        self.validate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affixes_join_with_underscores() {
        let options = RawOptions {
            flag_prefix: Some("is".into()),
            flag_suffix: Some("now".into()),
            ..RawOptions::default()
        }
        .resolve()
        .unwrap();

        assert_eq!(options.label("active"), "is_active_now");
    }

    #[test]
    fn defaults_leave_label_untouched() {
        let options = RawOptions::default().resolve().unwrap();
        assert_eq!(options.label("active"), "active");
        assert!(options.validate());
        assert_eq!(options.nil_handling(), NilHandling::Include);
    }
}
