use crate::error::DefinitionError;
use crate::options::{Options, RawOptions};

/// Hard cap on declared flags per attribute.
///
/// Value-set enumeration materializes `2^(count-1)` integers per flag, so the
/// cap keeps compile-time work bounded while comfortably covering realistic
/// packed-boolean columns.
pub const MAX_FLAGS: u32 = 16;

/// A validated, immutable flag-set definition.
///
/// The sole source of truth for bit-position assignment: the flag at index
/// `i` occupies bit `i` of the packed attribute (`1 << i`), in declaration
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSetDefinition {
    attribute: String,
    flags: Vec<String>,
    options: Options,
}

impl FlagSetDefinition {
    /// Validates and constructs a definition.
    ///
    /// The attribute name must be non-empty; flags must be a non-empty
    /// sequence of distinct, identifier-safe labels, at most [`MAX_FLAGS`]
    /// long. Options are resolved after shape validation, matching the
    /// compiler's fail-fast ordering.
    ///
    /// # Errors
    /// Returns a [`DefinitionError`] describing the first violation found.
    pub fn new(
        attribute: impl Into<String>,
        flags: impl IntoIterator<Item = impl Into<String>>,
        options: &RawOptions,
    ) -> Result<Self, DefinitionError> {
        let attribute = attribute.into();
        if attribute.trim().is_empty() {
            return Err(DefinitionError::EmptyAttribute);
        }

        let flags: Vec<String> = flags.into_iter().map(Into::into).collect();
        if flags.is_empty() {
            return Err(DefinitionError::EmptyFlags);
        }
        if flags.len() > MAX_FLAGS as usize {
            return Err(DefinitionError::TooManyFlags { count: flags.len(), max: MAX_FLAGS });
        }

        for (index, flag) in flags.iter().enumerate() {
            if !is_identifier(flag) {
                return Err(DefinitionError::InvalidFlagLabel { flag: flag.clone() });
            }
            if flags[..index].contains(flag) {
                return Err(DefinitionError::DuplicateFlag { flag: flag.clone() });
            }
        }

        let options = options.resolve()?;

        Ok(Self { attribute, flags, options })
    }

    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Declared flag names, in bit-position order.
    #[must_use]
    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn flag_count(&self) -> u32 {
        // Bounded by MAX_FLAGS at construction.
        self.flags.len() as u32
    }

    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Effective generated label for the flag at `index`.
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        self.options.label(&self.flags[index])
    }
}

fn is_identifier(label: &str) -> bool {
    let mut chars = label.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_rules() {
        assert!(is_identifier("flag"));
        assert!(is_identifier("_private2"));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("with-dash"));
        assert!(!is_identifier(""));
    }
}
