//! # rusty-forms-matchers
//!
//! Lets a test matcher ask one question of any validated record: did
//! validating this attribute fail, and how should the failure read?
//!
//! Records report failures one of two ways. Most accumulate messages in an
//! error store; strict records raise a [`ValidationSignal`] instead. The
//! [`Validator`] triggers validation once per probe, normalizes either outcome
//! into [`FailureRecord`]s and renders the descriptions used in assertion
//! output.
//!
//! ```rust,ignore
//! use rusty_forms_matchers::Validator;
//!
//! let mut validator = Validator::new("age");
//! validator.set_record(&mut person);
//!
//! assert_eq!(validator.allow_description("5"), "allow age to be set to 5");
//! assert_eq!(validator.formatted_messages()?, vec!["can't be blank"]);
//! ```

pub mod config;
pub mod errors;
pub mod failure;
pub mod humanize;
pub mod pretty;
pub mod record;
pub mod store;
pub mod validator;

pub use config::MatcherConfig;
pub use errors::{MatcherError, Result};
pub use failure::{FailureKind, FailureRecord, ValidationSignal};
pub use humanize::humanize;
pub use pretty::pretty_error_messages;
pub use record::Record;
pub use store::{EnumerableErrors, ErrorEntry, ErrorList, ErrorLookup, ErrorMap, IndexedErrors};
pub use validator::Validator;
