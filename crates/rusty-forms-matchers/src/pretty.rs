// File: src/pretty.rs
// Purpose: Render a record's accumulated errors for assertion output

use crate::record::Record;

/// Errors on the record as a whole rather than one attribute
pub const BASE_ATTRIBUTE: &str = "base";

/// One line per error: `  * name can't be blank ("")`
///
/// The current value is appended for attribute errors when `include_values`
/// is set and the record can report it.
pub fn pretty_error_messages<R: Record + ?Sized>(record: &R, include_values: bool) -> String {
    record
        .errors()
        .entries()
        .into_iter()
        .map(|entry| {
            let mut line = format!("  * {} {}", entry.attribute, entry.message);
            if include_values && entry.attribute != BASE_ATTRIBUTE {
                if let Some(value) = record.attribute_value(&entry.attribute) {
                    line.push_str(&format!(" ({})", value));
                }
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
