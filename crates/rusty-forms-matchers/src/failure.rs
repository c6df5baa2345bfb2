// File: src/failure.rs
// Purpose: Failure signals raised by validation and the normalized failure records

use std::fmt;

use thiserror::Error;

/// Discriminant for a raised validation signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Raised by a strict validator instead of adding to the error store
    StrictValidationFailed,
    /// A numeric value did not fit its representable range
    RangeOverflow,
    /// Anything else
    Other,
}

impl FailureKind {
    /// Class-like name used when rendering a signal
    pub fn name(&self) -> &'static str {
        match self {
            FailureKind::StrictValidationFailed => "StrictValidationFailed",
            FailureKind::RangeOverflow => "RangeError",
            FailureKind::Other => "Error",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A failure signal raised by a record while validating
///
/// Records return this from [`crate::Record::validate`] instead of completing
/// normally. Only strict failures and range overflows are ever recovered by
/// the [`crate::Validator`]; everything else is handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationSignal {
    #[error("{message}")]
    StrictValidationFailed { message: String },

    #[error("{message}")]
    RangeOverflow { message: String },

    #[error("{kind}: {message}")]
    Other { kind: String, message: String },
}

impl ValidationSignal {
    pub fn strict(message: impl Into<String>) -> Self {
        ValidationSignal::StrictValidationFailed {
            message: message.into(),
        }
    }

    pub fn range_overflow(message: impl Into<String>) -> Self {
        ValidationSignal::RangeOverflow {
            message: message.into(),
        }
    }

    pub fn other(kind: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationSignal::Other {
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            ValidationSignal::StrictValidationFailed { .. } => FailureKind::StrictValidationFailed,
            ValidationSignal::RangeOverflow { .. } => FailureKind::RangeOverflow,
            ValidationSignal::Other { .. } => FailureKind::Other,
        }
    }

    /// Raw message text, without the kind
    pub fn message(&self) -> &str {
        match self {
            ValidationSignal::StrictValidationFailed { message }
            | ValidationSignal::RangeOverflow { message }
            | ValidationSignal::Other { message, .. } => message,
        }
    }

    /// Render the signal for assertion output
    ///
    /// Strict failures already carry a full sentence, so only the message is
    /// shown. Other kinds are prefixed with their name (`RangeError: ...`).
    pub fn formatted(&self) -> String {
        match self {
            ValidationSignal::StrictValidationFailed { message } => message.clone(),
            ValidationSignal::RangeOverflow { message } => {
                format!("{}: {}", FailureKind::RangeOverflow, message)
            }
            ValidationSignal::Other { kind, message } => format!("{}: {}", kind, message),
        }
    }
}

/// One observed validation failure, whichever way it was reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureRecord {
    /// Message read from the record's error store
    PlainMessage(String),
    /// Signal raised during validation
    RaisedFailure(ValidationSignal),
}

impl FailureRecord {
    pub fn message(&self) -> &str {
        match self {
            FailureRecord::PlainMessage(text) => text,
            FailureRecord::RaisedFailure(signal) => signal.message(),
        }
    }

    pub fn formatted(&self) -> String {
        match self {
            FailureRecord::PlainMessage(text) => text.clone(),
            FailureRecord::RaisedFailure(signal) => signal.formatted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_signal_formats_message_only() {
        let signal = ValidationSignal::strict("Age must be a number");
        assert_eq!(signal.kind(), FailureKind::StrictValidationFailed);
        assert_eq!(signal.formatted(), "Age must be a number");
    }

    #[test]
    fn test_range_overflow_formats_with_kind() {
        let signal = ValidationSignal::range_overflow("value out of range for integer");
        assert_eq!(signal.message(), "value out of range for integer");
        assert_eq!(signal.formatted(), "RangeError: value out of range for integer");
    }

    #[test]
    fn test_other_signal_display() {
        let signal = ValidationSignal::other("NoMethodError", "undefined method");
        assert_eq!(signal.kind(), FailureKind::Other);
        assert_eq!(signal.to_string(), "NoMethodError: undefined method");
    }

    #[test]
    fn test_failure_record_message() {
        let plain = FailureRecord::PlainMessage("can't be blank".to_string());
        let raised = FailureRecord::RaisedFailure(ValidationSignal::strict("Name can't be blank"));
        assert_eq!(plain.message(), "can't be blank");
        assert_eq!(raised.message(), "Name can't be blank");
        assert_eq!(plain.formatted(), "can't be blank");
        assert_eq!(raised.formatted(), "Name can't be blank");
    }
}
