// File: src/store.rs
// Purpose: Error store capabilities exposed by records after validation

/// A single accumulated error message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    pub attribute: String,
    pub message: String,
}

impl ErrorEntry {
    pub fn new(attribute: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            message: message.into(),
        }
    }
}

/// Error store that can be indexed by attribute
pub trait IndexedErrors {
    /// Messages for `attribute`, in the order they were added
    fn get(&self, attribute: &str) -> Vec<String>;

    /// Every error in the store, in insertion order
    fn entries(&self) -> Vec<ErrorEntry>;
}

/// Legacy error store that can only be enumerated
pub trait EnumerableErrors {
    /// Every error in the store, in insertion order
    fn entries(&self) -> Vec<ErrorEntry>;

    /// Messages for `attribute`
    fn on(&self, attribute: &str) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.attribute == attribute)
            .map(|entry| entry.message)
            .collect()
    }
}

/// The error store shape a record provides
///
/// Records pick the variant once, when they implement [`crate::Record::errors`];
/// the validator never probes for capabilities at call time.
#[derive(Clone, Copy)]
pub enum ErrorLookup<'a> {
    Indexed(&'a dyn IndexedErrors),
    Enumerable(&'a dyn EnumerableErrors),
}

impl<'a> ErrorLookup<'a> {
    pub fn messages_for(&self, attribute: &str) -> Vec<String> {
        match self {
            ErrorLookup::Indexed(store) => store.get(attribute),
            ErrorLookup::Enumerable(store) => store.on(attribute),
        }
    }

    pub fn entries(&self) -> Vec<ErrorEntry> {
        match self {
            ErrorLookup::Indexed(store) => store.entries(),
            ErrorLookup::Enumerable(store) => store.entries(),
        }
    }
}

/// Indexed error store keyed by attribute, preserving insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: Vec<(String, Vec<String>)>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, attribute: impl Into<String>, message: impl Into<String>) {
        let attribute = attribute.into();
        let message = message.into();

        match self.errors.iter_mut().find(|(name, _)| *name == attribute) {
            Some((_, messages)) => messages.push(message),
            None => self.errors.push((attribute, vec![message])),
        }
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl IndexedErrors for ErrorMap {
    fn get(&self, attribute: &str) -> Vec<String> {
        self.errors
            .iter()
            .find(|(name, _)| name == attribute)
            .map(|(_, messages)| messages.clone())
            .unwrap_or_default()
    }

    fn entries(&self) -> Vec<ErrorEntry> {
        self.errors
            .iter()
            .flat_map(|(attribute, messages)| {
                messages
                    .iter()
                    .map(move |message| ErrorEntry::new(attribute.clone(), message.clone()))
            })
            .collect()
    }
}

/// Flat list of errors, the legacy enumerable shape
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorList {
    errors: Vec<ErrorEntry>,
}

impl ErrorList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, attribute: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ErrorEntry::new(attribute, message));
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl EnumerableErrors for ErrorList {
    fn entries(&self) -> Vec<ErrorEntry> {
        self.errors.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_map_groups_by_attribute() {
        let mut errors = ErrorMap::new();
        errors.add("name", "can't be blank");
        errors.add("age", "is not a number");
        errors.add("name", "is too short");

        assert_eq!(errors.get("name"), vec!["can't be blank", "is too short"]);
        assert_eq!(errors.get("email"), Vec::<String>::new());
        assert_eq!(errors.entries().len(), 3);
    }

    #[test]
    fn test_error_list_on_filters_attribute() {
        let mut errors = ErrorList::new();
        errors.push("name", "can't be blank");
        errors.push("age", "is not a number");

        assert_eq!(errors.on("age"), vec!["is not a number"]);
        assert!(errors.on("email").is_empty());
    }

    #[test]
    fn test_lookup_dispatches_to_either_shape() {
        let mut map = ErrorMap::new();
        map.add("name", "can't be blank");
        let mut list = ErrorList::new();
        list.push("name", "can't be blank");

        let indexed = ErrorLookup::Indexed(&map);
        let enumerable = ErrorLookup::Enumerable(&list);

        assert_eq!(indexed.messages_for("name"), enumerable.messages_for("name"));
        assert_eq!(indexed.entries(), enumerable.entries());
    }
}
