// File: src/errors.rs
// Purpose: Errors surfaced to the matcher driving a Validator

use thiserror::Error;

use crate::failure::ValidationSignal;

/// Failures that abort a check instead of being reported as a mismatch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatcherError {
    #[error("no record attached to validator for `{attribute}`")]
    MissingRecord { attribute: String },

    /// A signal raised during validation that the validator does not recover
    #[error("validation of `{attribute}` raised {signal}")]
    Unclassified {
        attribute: String,
        #[source]
        signal: ValidationSignal,
    },
}

pub type Result<T> = std::result::Result<T, MatcherError>;
