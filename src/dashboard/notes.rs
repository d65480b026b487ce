use super::list::EntityList;
use super::messages;
use crate::store::LocalStore;

/// Local-only notes. Every mutation is mirrored to the store immediately.
#[derive(Debug)]
pub struct NotesWidget {
    notes: EntityList<String>,
    draft: String,
    store: LocalStore,
}

impl NotesWidget {
    pub fn new(store: LocalStore) -> Self {
        let notes = match store.notes() {
            Ok(Some(notes)) => notes,
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Ignoring stored notes: {}", e);
                Vec::new()
            }
        };
        let mut widget = Self {
            notes: EntityList::from_items(notes),
            draft: String::new(),
            store,
        };
        widget.persist();
        widget
    }

    pub fn notes(&self) -> &[String] {
        self.notes.items()
    }

    pub fn error(&self) -> Option<&str> {
        self.notes.error()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: String) {
        self.draft = draft;
    }

    /// Append the current draft. Blank drafts are ignored and kept as-is.
    pub fn submit_draft(&mut self) -> bool {
        let draft = std::mem::take(&mut self.draft);
        if self.add(draft.clone()) {
            true
        } else {
            self.draft = draft;
            false
        }
    }

    /// Append `note` unless it is blank. The note is stored exactly as typed.
    pub fn add(&mut self, note: String) -> bool {
        if note.trim().is_empty() {
            return false;
        }
        self.notes.push(note);
        self.persist();
        true
    }

    /// Remove the note at `index`.
    pub fn delete(&mut self, index: usize) -> Option<String> {
        let removed = self.notes.remove(index)?;
        self.persist();
        Some(removed)
    }

    fn persist(&mut self) {
        match self.store.set_notes(self.notes.items()) {
            Ok(()) => self.notes.clear_error(),
            Err(e) => {
                log::error!("Failed to save notes: {}", e);
                self.notes.fail(messages::NOTES_SAVE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{KeyValueBackend, MemoryBackend};

    fn mirror(store: &LocalStore) -> Vec<String> {
        store.notes().unwrap().unwrap_or_default()
    }

    #[test]
    fn mirror_matches_memory_after_every_operation() {
        let store = LocalStore::in_memory();
        let mut widget = NotesWidget::new(store.clone());
        assert_eq!(mirror(&store), widget.notes());

        let ops: [(bool, &str, usize); 6] = [
            (true, "buy milk", 0),
            (true, "call plumber", 0),
            (true, "buy milk", 0),
            (false, "", 0),
            (true, "pay rent", 0),
            (false, "", 2),
        ];
        for (is_add, text, index) in ops {
            if is_add {
                widget.add(text.to_string());
            } else {
                widget.delete(index);
            }
            assert_eq!(mirror(&store), widget.notes());
        }
        assert_eq!(widget.notes(), &["call plumber", "buy milk"]);
    }

    #[test]
    fn delete_is_positional_for_duplicates() {
        let store = LocalStore::in_memory();
        let mut widget = NotesWidget::new(store);
        widget.add("same".to_string());
        widget.add("same".to_string());

        assert_eq!(widget.delete(1).as_deref(), Some("same"));
        assert_eq!(widget.notes(), &["same"]);
        assert_eq!(widget.delete(5), None);
    }

    #[test]
    fn blank_draft_is_rejected_and_kept() {
        let store = LocalStore::in_memory();
        let mut widget = NotesWidget::new(store.clone());

        widget.set_draft("   ".to_string());
        assert!(!widget.submit_draft());
        assert_eq!(widget.draft(), "   ");

        widget.set_draft("  padded ".to_string());
        assert!(widget.submit_draft());
        assert_eq!(widget.draft(), "");
        assert_eq!(mirror(&store), vec!["  padded ".to_string()]);
    }

    #[test]
    fn notes_survive_a_remount() {
        let store = LocalStore::in_memory();
        NotesWidget::new(store.clone()).add("persisted".to_string());

        let widget = NotesWidget::new(store);
        assert_eq!(widget.notes(), &["persisted"]);
    }

    #[test]
    fn corrupt_notes_start_empty() {
        let backend = MemoryBackend::default();
        backend.set("notes", "not an array".to_string()).unwrap();
        let store = LocalStore::new(backend);

        let widget = NotesWidget::new(store.clone());
        assert!(widget.notes().is_empty());
        assert_eq!(store.notes().unwrap(), Some(Vec::new()));
    }
}
