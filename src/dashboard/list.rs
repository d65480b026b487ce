use std::fmt::Display;

/// Ordered in-memory list plus the inline error shown next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityList<T> {
    items: Vec<T>,
    error: Option<String>,
}

impl<T> Default for EntityList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            error: None,
        }
    }
}

impl<T> EntityList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<T>) -> Self {
        Self { items, error: None }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Replace the whole list with a fresh server snapshot.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.error = None;
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.items.retain(keep);
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.error = None;
    }

    /// Fold a fetch result in: success replaces the list, failure keeps the
    /// stale items and sets `message`. Returns whether the list was replaced.
    pub fn apply<E: Display>(&mut self, result: Result<Vec<T>, E>, what: &str, message: &str) -> bool {
        match result {
            Ok(items) => {
                log::debug!("Loaded {} {}", items.len(), what);
                self.replace(items);
                true
            }
            Err(e) => {
                log::error!("Error fetching {}: {}", what, e);
                self.fail(message);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_fetch_keeps_previous_items() {
        let mut list = EntityList::from_items(vec![1, 2, 3]);
        let replaced = list.apply::<String>(Err("boom".to_string()), "numbers", "Could not load");
        assert!(!replaced);
        assert_eq!(list.items(), &[1, 2, 3]);
        assert_eq!(list.error(), Some("Could not load"));
    }

    #[test]
    fn successful_fetch_replaces_and_clears_error() {
        let mut list = EntityList::from_items(vec![1]);
        list.fail("old error");
        assert!(list.apply::<String>(Ok(vec![4, 5]), "numbers", "unused"));
        assert_eq!(list.items(), &[4, 5]);
        assert_eq!(list.error(), None);
    }

    #[test]
    fn remove_out_of_range_is_none() {
        let mut list = EntityList::from_items(vec!["a"]);
        assert_eq!(list.remove(3), None);
        assert_eq!(list.remove(0), Some("a"));
        assert!(list.is_empty());
    }
}
