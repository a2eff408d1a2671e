//! Error types for display preference resolution

use thiserror::Error;
use typed_labeled_fields::FieldKind;

/// Result type for display operations
pub type Result<T> = std::result::Result<T, DisplayError>;

/// Errors raised while resolving or editing display preferences.
///
/// The first two variants mean stored preferences broke an invariant the
/// settings flow is supposed to guarantee.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DisplayError {
    /// The formatter has no prefix preferences for a winning label source
    #[error("the {variant} formatter has no prefix preferences for label source '{label_source}'")]
    UnmappedLabelSource {
        variant: &'static str,
        label_source: &'static str,
    },

    /// No label source applied to an item
    #[error("no display label source applied to an item of '{field}'")]
    UnresolvableLabel { field: String },

    /// The field kind is not displayed through preferences
    #[error("field kind {kind} has no display formatter")]
    NoFormatter { kind: FieldKind },

    /// A settings table was submitted with its required option ignored
    #[error("The option '{option}' cannot be ignored")]
    RequiredOptionHidden { option: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_option_message() {
        let err = DisplayError::RequiredOptionHidden {
            option: "Do not apply a prefix to the field value",
        };
        assert_eq!(
            err.to_string(),
            "The option 'Do not apply a prefix to the field value' cannot be ignored"
        );
    }

    #[test]
    fn no_formatter_names_kind() {
        let err = DisplayError::NoFormatter {
            kind: FieldKind::TypedIdentifier,
        };
        assert_eq!(err.to_string(), "field kind typed_identifier has no display formatter");
    }
}
