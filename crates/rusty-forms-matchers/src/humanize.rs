// File: src/humanize.rs
// Purpose: Display names for attributes

/// Turn an attribute identifier into a display name
///
/// `first_name` becomes `First name`, `author_id` becomes `Author`.
pub fn humanize(attribute: &str) -> String {
    let trimmed = attribute.strip_suffix("_id").unwrap_or(attribute);
    let spaced = trimmed
        .split('_')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let mut chars = spaced.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("age"), "Age");
        assert_eq!(humanize("first_name"), "First name");
        assert_eq!(humanize("author_id"), "Author");
        assert_eq!(humanize("_private"), "Private");
        assert_eq!(humanize(""), "");
    }
}
