mod store;
mod types;

pub use store::{NotesHandle, NotesProvider, NotesStore, SCOPE_ERROR};
pub use types::{FileUpdate, UploadedFile};
