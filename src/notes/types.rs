use uuid::Uuid;

/// One uploaded study material. The `id` is assigned at creation and never
/// changes for the lifetime of the record.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub kind: String,
    pub uploaded: bool,
    pub content: Option<String>,
}

impl UploadedFile {
    pub fn new(name: String, size: u64, kind: String, content: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            size,
            kind,
            uploaded: false,
            content,
        }
    }

    /// A file contributes to the aggregated notes only once its upload has
    /// completed and it carries non-empty extracted content.
    pub fn is_ready(&self) -> bool {
        self.uploaded && self.content.as_deref().is_some_and(|c| !c.is_empty())
    }

    pub(crate) fn apply(&mut self, update: FileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(size) = update.size {
            self.size = size;
        }
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
        // `uploaded` is monotonic: it can be flipped on but never reverted.
        if update.uploaded == Some(true) {
            self.uploaded = true;
        }
        if let Some(content) = update.content {
            self.content = Some(content);
        }
    }
}

/// Partial update for an [`UploadedFile`]. Carries no `id` field, so an
/// update can never reassign the identifier.
#[derive(Debug, Clone, Default)]
pub struct FileUpdate {
    pub name: Option<String>,
    pub size: Option<u64>,
    pub kind: Option<String>,
    pub uploaded: Option<bool>,
    pub content: Option<String>,
}

impl FileUpdate {
    pub fn uploaded(value: bool) -> Self {
        Self {
            uploaded: Some(value),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UploadedFile {
        UploadedFile::new(
            "physics.pdf".to_string(),
            2048,
            "application/pdf".to_string(),
            Some("chapter one".to_string()),
        )
    }

    #[test]
    fn test_new_file_starts_not_uploaded() {
        let file = sample();
        assert!(!file.uploaded);
        assert!(!file.is_ready());
        assert!(!file.id.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = sample();
        let b = sample();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_merges_only_set_fields() {
        let mut file = sample();
        file.apply(FileUpdate::uploaded(true));
        assert!(file.uploaded);
        assert_eq!(file.name, "physics.pdf");
        assert_eq!(file.size, 2048);
        assert_eq!(file.content.as_deref(), Some("chapter one"));
    }

    #[test]
    fn test_uploaded_never_reverts() {
        let mut file = sample();
        file.apply(FileUpdate::uploaded(true));
        file.apply(FileUpdate::uploaded(false));
        assert!(file.uploaded);
    }

    #[test]
    fn test_readiness_requires_upload_and_content() {
        let mut file = sample();
        assert!(!file.is_ready());
        file.apply(FileUpdate::uploaded(true));
        assert!(file.is_ready());

        let mut empty = UploadedFile::new("blank.txt".to_string(), 0, "text/plain".to_string(), None);
        empty.apply(FileUpdate::uploaded(true));
        assert!(!empty.is_ready());

        let mut blank = sample();
        blank.apply(FileUpdate {
            content: Some(String::new()),
            ..FileUpdate::default()
        });
        blank.apply(FileUpdate::uploaded(true));
        assert!(!blank.is_ready());
    }

    #[test]
    fn test_content_set_by_update() {
        let mut file = UploadedFile::new("scan.png".to_string(), 512, "image/png".to_string(), None);
        file.apply(FileUpdate {
            content: Some("extracted text".to_string()),
            ..FileUpdate::default()
        });
        assert_eq!(file.content.as_deref(), Some("extracted text"));
    }
}
