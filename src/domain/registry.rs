//! In-memory mapping from file name to reader handle.

use indexmap::IndexMap;

use super::{AppError, FileName};

/// Reader handles keyed by the file they were opened from.
///
/// Entries are only added while a load is being built and are kept in
/// insertion order, which is the order the directory listing produced them.
#[derive(Debug)]
pub struct Registry<H> {
    entries: IndexMap<FileName, H>,
}

impl<H> Registry<H> {
    pub(crate) fn new() -> Self {
        Self { entries: IndexMap::new() }
    }

    /// Add the handle for `name`. A name can be registered only once.
    pub(crate) fn insert(&mut self, name: FileName, handle: H) -> Result<(), AppError> {
        if self.entries.contains_key(&name) {
            return Err(AppError::DuplicateEntry(name.into()));
        }
        self.entries.insert(name, handle);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&H> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &FileName> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FileName, &H)> {
        self.entries.iter()
    }
}

impl<H> IntoIterator for Registry<H> {
    type Item = (FileName, H);
    type IntoIter = indexmap::map::IntoIter<FileName, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> FileName {
        FileName::new(s).unwrap()
    }

    #[test]
    fn keeps_insertion_order() {
        let mut registry = Registry::new();
        registry.insert(name("c.txt"), 3).unwrap();
        registry.insert(name("a.txt"), 1).unwrap();

        let names: Vec<&str> = registry.names().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["c.txt", "a.txt"]);
        assert_eq!(registry.get("a.txt"), Some(&1));
    }

    #[test]
    fn rejects_repeated_name() {
        let mut registry = Registry::new();
        registry.insert(name("a.txt"), ()).unwrap();

        let err = registry.insert(name("a.txt"), ()).unwrap_err();
        assert!(matches!(err, AppError::DuplicateEntry(n) if n == "a.txt"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn new_registry_is_empty() {
        let registry: Registry<()> = Registry::new();
        assert!(registry.is_empty());
        assert!(!registry.contains("a.txt"));
    }
}
