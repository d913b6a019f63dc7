//! The shared registry of uploaded study materials.
//!
//! One `NotesStore` lives for the whole session, owned by a `NotesProvider`
//! held by the app. Panels get cloneable `NotesHandle`s at construction and
//! never touch the store any other way, which keeps its lifetime and
//! visibility explicit. All access happens on the UI thread; background
//! workers hand their results to a panel first, so mutations never interleave.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::types::{FileUpdate, UploadedFile};

/// Message raised when a handle is used after its provider is gone.
pub const SCOPE_ERROR: &str = "notes store accessed outside its provider scope";

#[derive(Debug, Default)]
pub struct NotesStore {
    files: Vec<UploadedFile>,
}

impl NotesStore {
    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    /// Appends a batch, preserving insertion order. Duplicate names are
    /// allowed; ids are expected to be unique (they are generated at record
    /// creation).
    pub fn add_files(&mut self, batch: Vec<UploadedFile>) {
        self.files.extend(batch);
    }

    /// Removes the entry with the given id. Silent no-op when absent.
    pub fn remove_file(&mut self, id: &str) {
        self.files.retain(|f| f.id != id);
    }

    /// Merges the set fields of `update` into the matching entry. Silent
    /// no-op when absent. The id itself is not updatable.
    pub fn update_file(&mut self, id: &str, update: FileUpdate) {
        if let Some(file) = self.files.iter_mut().find(|f| f.id == id) {
            file.apply(update);
        }
    }

    pub fn ready_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_ready()).count()
    }

    /// One labeled section per ready file, in collection order, joined by a
    /// blank line. Empty string when nothing qualifies.
    pub fn notes_content(&self) -> String {
        self.files
            .iter()
            .filter(|f| f.is_ready())
            .map(|f| format!("--- {} ---\n{}", f.name, f.content.as_deref().unwrap_or_default()))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Owns the session's store. Dropping the provider detaches every handle.
pub struct NotesProvider {
    store: Rc<RefCell<NotesStore>>,
}

impl NotesProvider {
    pub fn new() -> Self {
        Self {
            store: Rc::new(RefCell::new(NotesStore::default())),
        }
    }

    pub fn handle(&self) -> NotesHandle {
        NotesHandle {
            store: Rc::downgrade(&self.store),
        }
    }
}

impl Default for NotesProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// A panel's view of the store. `with`/`with_mut` fail fast and loudly when
/// the provider is gone; the `try_` variants report the same condition as an
/// error for callers that want to recover.
#[derive(Clone)]
pub struct NotesHandle {
    store: Weak<RefCell<NotesStore>>,
}

impl NotesHandle {
    pub fn try_with<T>(&self, f: impl FnOnce(&NotesStore) -> T) -> Result<T, String> {
        match self.store.upgrade() {
            Some(store) => Ok(f(&store.borrow())),
            None => Err(SCOPE_ERROR.to_string()),
        }
    }

    pub fn try_with_mut<T>(&self, f: impl FnOnce(&mut NotesStore) -> T) -> Result<T, String> {
        match self.store.upgrade() {
            Some(store) => Ok(f(&mut store.borrow_mut())),
            None => Err(SCOPE_ERROR.to_string()),
        }
    }

    pub fn with<T>(&self, f: impl FnOnce(&NotesStore) -> T) -> T {
        match self.try_with(f) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn with_mut<T>(&self, f: impl FnOnce(&mut NotesStore) -> T) -> T {
        match self.try_with_mut(f) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, uploaded: bool, content: Option<&str>) -> UploadedFile {
        let mut f = UploadedFile::new(
            name.to_string(),
            1024,
            "text/plain".to_string(),
            content.map(str::to_string),
        );
        if uploaded {
            f.apply(FileUpdate::uploaded(true));
        }
        f
    }

    #[test]
    fn test_add_remove_update_sequence() {
        let mut store = NotesStore::default();
        let a = file("a.txt", false, Some("alpha"));
        let b = file("b.txt", false, Some("beta"));
        let a_id = a.id.clone();
        let b_id = b.id.clone();

        store.add_files(vec![a, b]);
        assert_eq!(store.files().len(), 2);

        store.update_file(&a_id, FileUpdate::uploaded(true));
        assert!(store.files()[0].uploaded);
        assert!(!store.files()[1].uploaded);

        store.remove_file(&a_id);
        assert_eq!(store.files().len(), 1);
        assert_eq!(store.files()[0].id, b_id);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut store = NotesStore::default();
        store.add_files(vec![file("a.txt", true, Some("alpha"))]);
        store.remove_file("no-such-id");
        assert_eq!(store.files().len(), 1);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut store = NotesStore::default();
        store.add_files(vec![file("a.txt", false, Some("alpha"))]);
        store.update_file("no-such-id", FileUpdate::uploaded(true));
        assert!(!store.files()[0].uploaded);
    }

    #[test]
    fn test_duplicate_names_are_permitted() {
        let mut store = NotesStore::default();
        store.add_files(vec![
            file("notes.txt", true, Some("first")),
            file("notes.txt", true, Some("second")),
        ]);
        assert_eq!(store.files().len(), 2);
        assert_eq!(
            store.notes_content(),
            "--- notes.txt ---\nfirst\n\n--- notes.txt ---\nsecond"
        );
    }

    #[test]
    fn test_notes_content_empty_store() {
        let store = NotesStore::default();
        assert_eq!(store.notes_content(), "");
    }

    #[test]
    fn test_notes_content_excludes_pending_uploads() {
        let mut store = NotesStore::default();
        store.add_files(vec![file("a.txt", false, Some("alpha"))]);
        assert_eq!(store.notes_content(), "");
        assert_eq!(store.ready_count(), 0);
    }

    #[test]
    fn test_notes_content_excludes_contentless_files() {
        let mut store = NotesStore::default();
        store.add_files(vec![file("a.txt", true, None), file("b.txt", true, Some(""))]);
        assert_eq!(store.notes_content(), "");
    }

    #[test]
    fn test_notes_content_preserves_insertion_order() {
        let mut store = NotesStore::default();
        let a = file("a.txt", false, Some("x"));
        let b = file("b.txt", true, Some("y"));
        let a_id = a.id.clone();
        store.add_files(vec![a, b]);

        // Only B qualifies until A's upload completes.
        assert_eq!(store.notes_content(), "--- b.txt ---\ny");

        store.update_file(&a_id, FileUpdate::uploaded(true));
        assert_eq!(store.notes_content(), "--- a.txt ---\nx\n\n--- b.txt ---\ny");
    }

    #[test]
    fn test_handle_roundtrip() {
        let provider = NotesProvider::new();
        let handle = provider.handle();
        handle.with_mut(|s| s.add_files(vec![file("a.txt", true, Some("alpha"))]));
        assert_eq!(handle.with(|s| s.files().len()), 1);
        assert_eq!(provider.handle().with(|s| s.ready_count()), 1);
    }

    #[test]
    fn test_detached_handle_errors_every_time() {
        let provider = NotesProvider::new();
        let handle = provider.handle();
        drop(provider);

        for _ in 0..3 {
            let err = handle.try_with(|s| s.files().len()).unwrap_err();
            assert_eq!(err, SCOPE_ERROR);
        }
        let err = handle.try_with_mut(|s| s.remove_file("x")).unwrap_err();
        assert_eq!(err, SCOPE_ERROR);
    }

    #[test]
    #[should_panic(expected = "outside its provider scope")]
    fn test_detached_handle_panics_on_hook_access() {
        let provider = NotesProvider::new();
        let handle = provider.handle();
        drop(provider);
        handle.with(|s| s.files().len());
    }
}
