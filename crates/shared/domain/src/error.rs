use thiserror::Error;

/// A malformed flag-set definition.
///
/// Every variant is raised during definition validation or option resolution,
/// strictly before any generated name is claimed or any operation is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("flag set definition is invalid: must provide a non-empty attribute name")]
    EmptyAttribute,

    #[error("flag set definition is invalid: must provide a non-empty array of flag names")]
    EmptyFlags,

    #[error("flag set definition is invalid: flag '{flag}' is not a valid identifier")]
    InvalidFlagLabel { flag: String },

    #[error("flag set definition is invalid: flag '{flag}' is declared more than once")]
    DuplicateFlag { flag: String },

    #[error("flag set definition is invalid: invalid nil handling option '{value}'")]
    InvalidNilHandling { value: String },

    #[error("flag set definition is invalid: at most {max} flags are supported, got {count}")]
    TooManyFlags { count: usize, max: u32 },
}
