// File: src/validator.rs
// Purpose: Observe one attribute's validation outcome, strict or error-store based

use tracing::{debug, trace};

use crate::config::MatcherConfig;
use crate::errors::{MatcherError, Result};
use crate::failure::{FailureKind, FailureRecord, ValidationSignal};
use crate::pretty::pretty_error_messages;
use crate::record::Record;

/// Adapter between a matcher and the record under test
///
/// Validation is triggered lazily on the first query and the outcome is kept
/// until [`Validator::reset`], so every description of one probe is rendered
/// from the same run. Strict records report failures by raising a
/// [`ValidationSignal`]; other records accumulate messages in their error
/// store. Both end up as a list of [`FailureRecord`]s.
///
/// # Example
///
/// ```ignore
/// let mut validator = Validator::new("age");
/// validator.set_record(&mut person);
///
/// if validator.has_messages()? {
///     println!("expected no errors, got{}", validator.messages_description()?);
/// }
/// ```
pub struct Validator<'r, R: Record + ?Sized> {
    attribute: String,
    record: Option<&'r mut R>,
    context: Option<String>,
    strict: bool,
    detected_range_error: bool,
    messages: Option<Vec<FailureRecord>>,
    config: MatcherConfig,
}

impl<'r, R: Record + ?Sized> Validator<'r, R> {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self::with_config(attribute, MatcherConfig::default())
    }

    pub fn with_config(attribute: impl Into<String>, config: MatcherConfig) -> Self {
        let mut validator = Self {
            attribute: attribute.into(),
            record: None,
            context: None,
            strict: false,
            detected_range_error: false,
            messages: None,
            config,
        };
        validator.reset();
        validator
    }

    /// Forget the memoized outcome so the next query validates again
    ///
    /// Strict mode and a detected range error are probe configuration and
    /// survive a reset.
    pub fn reset(&mut self) {
        self.messages = None;
    }

    /// Attach the record to validate. Does not clear a memoized outcome.
    pub fn set_record(&mut self, record: &'r mut R) {
        self.record = Some(record);
    }

    pub fn set_context(&mut self, context: Option<String>) {
        self.context = context;
    }

    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn detected_range_error(&self) -> bool {
        self.detected_range_error
    }

    /// Failures are rendered as exceptions rather than error-store messages
    pub fn is_exception_based(&self) -> bool {
        self.strict || self.detected_range_error
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn allow_description(&self, allowed_values: &str) -> String {
        if self.strict {
            format!(
                "doesn't raise when {} is set to {}",
                self.attribute, allowed_values
            )
        } else {
            format!("allow {} to be set to {}", self.attribute, allowed_values)
        }
    }

    /// Message the matcher should look for
    ///
    /// Strict failures carry the full sentence, so the display name of the
    /// attribute is prepended.
    pub fn expected_message_from(&self, attribute_message: &str) -> Result<String> {
        if self.strict {
            let record = self.record_ref()?;
            Ok(format!(
                "{} {}",
                record.human_attribute_name(&self.attribute),
                attribute_message
            ))
        } else {
            Ok(attribute_message.to_string())
        }
    }

    /// Failures observed for this probe, validating on first use
    pub fn messages(&mut self) -> Result<&[FailureRecord]> {
        if self.messages.is_some() {
            trace!("Reusing validation outcome for {}", self.attribute);
        } else {
            match self.validation_exceptions_or_errors()? {
                Ok(messages) => self.messages = Some(messages),
                Err(signal @ ValidationSignal::RangeOverflow { .. })
                    if self.config.validator.capture_range_errors =>
                {
                    self.capture_range_error(signal);
                }
                Err(signal) => {
                    return Err(MatcherError::Unclassified {
                        attribute: self.attribute.clone(),
                        signal,
                    });
                }
            }
        }

        Ok(self.messages.as_deref().unwrap_or(&[]))
    }

    /// Message text of every failure
    pub fn formatted_messages(&mut self) -> Result<Vec<String>> {
        Ok(self
            .messages()?
            .iter()
            .map(|message| message.message().to_string())
            .collect())
    }

    pub fn has_messages(&mut self) -> Result<bool> {
        Ok(!self.messages()?.is_empty())
    }

    /// What was actually observed, appended to the matcher's failure message
    pub fn messages_description(&mut self) -> Result<String> {
        let first = self.messages()?.first().map(FailureRecord::formatted);

        if self.is_exception_based() {
            Ok(match first {
                Some(formatted) => format!(": {:?}", formatted),
                None => " no exception".to_string(),
            })
        } else if first.is_some() {
            let record = self.record_ref()?;
            Ok(format!(
                " errors:\n{}",
                pretty_error_messages(
                    record,
                    self.config.descriptions.include_attribute_values
                )
            ))
        } else {
            Ok(" no errors".to_string())
        }
    }

    pub fn expected_messages_description(&self, expected_message: Option<&str>) -> String {
        match (expected_message, self.strict) {
            (Some(message), true) => format!("exception to include {:?}", message),
            (Some(message), false) => format!("errors to include {:?}", message),
            (None, true) => "an exception to have been raised".to_string(),
            (None, false) => "errors".to_string(),
        }
    }

    /// Record a range overflow as the outcome of this probe
    ///
    /// Replaces any memoized outcome and switches rendering to exception
    /// style until the validator is dropped, even when not strict.
    pub fn capture_range_error(&mut self, error: ValidationSignal) {
        debug!("Captured range error for {}: {}", self.attribute, error);
        self.detected_range_error = true;
        self.messages = Some(vec![FailureRecord::RaisedFailure(error)]);
    }

    fn record_ref(&self) -> Result<&R> {
        self.record
            .as_deref()
            .ok_or_else(|| MatcherError::MissingRecord {
                attribute: self.attribute.clone(),
            })
    }

    /// Trigger validation once and collect the failures
    ///
    /// The inner error is a signal the current mode does not recover.
    fn validation_exceptions_or_errors(
        &mut self,
    ) -> Result<std::result::Result<Vec<FailureRecord>, ValidationSignal>> {
        let record = match self.record.as_deref_mut() {
            Some(record) => record,
            None => {
                return Err(MatcherError::MissingRecord {
                    attribute: self.attribute.clone(),
                })
            }
        };
        let context = self.context.as_deref();

        debug!(
            "Validating {}#{} (context: {:?}, strict: {})",
            record.model_name(),
            self.attribute,
            context,
            self.strict
        );

        Ok(if self.strict {
            validation_exceptions(record, context)
        } else {
            validation_errors(record, &self.attribute, context)
        })
    }
}

fn validation_exceptions<R: Record + ?Sized>(
    record: &mut R,
    context: Option<&str>,
) -> std::result::Result<Vec<FailureRecord>, ValidationSignal> {
    match record.validate(context) {
        Ok(()) => Ok(Vec::new()),
        Err(signal) if signal.kind() == FailureKind::StrictValidationFailed => {
            Ok(vec![FailureRecord::RaisedFailure(signal)])
        }
        Err(signal) => Err(signal),
    }
}

fn validation_errors<R: Record + ?Sized>(
    record: &mut R,
    attribute: &str,
    context: Option<&str>,
) -> std::result::Result<Vec<FailureRecord>, ValidationSignal> {
    record.validate(context)?;

    Ok(record
        .errors()
        .messages_for(attribute)
        .into_iter()
        .map(FailureRecord::PlainMessage)
        .collect())
}
