// File: src/record.rs
// Purpose: The record interface a Validator drives

use crate::failure::ValidationSignal;
use crate::humanize::humanize;
use crate::store::ErrorLookup;

/// An object whose validation outcome a [`crate::Validator`] observes
///
/// Validation either completes, after which [`Record::errors`] holds the
/// accumulated messages, or raises a [`ValidationSignal`].
pub trait Record {
    /// Run validations for the given context (e.g. `"create"`, `"update"`)
    ///
    /// May mutate the record (clearing and refilling its error store), so the
    /// validator calls it at most once per cycle.
    fn validate(&mut self, context: Option<&str>) -> Result<(), ValidationSignal>;

    /// The record's error store
    fn errors(&self) -> ErrorLookup<'_>;

    /// Name of the record's type, the class half of attribute name lookups
    ///
    /// Defaults to the unqualified Rust type name (`User` for
    /// `my_app::models::User<T>`).
    fn model_name(&self) -> String {
        short_type_name(std::any::type_name::<Self>()).to_string()
    }

    /// Display name for an attribute of this model
    ///
    /// Override to translate per model; the default humanizes the identifier.
    fn human_attribute_name(&self, attribute: &str) -> String {
        humanize(attribute)
    }

    /// Rendering of an attribute's current value, if the record has it
    ///
    /// Shown verbatim in parentheses after the attribute's errors, so
    /// implementors choose the format (usually `format!("{:?}", value)`).
    fn attribute_value(&self, _attribute: &str) -> Option<String> {
        None
    }
}

fn short_type_name(full: &str) -> &str {
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}
