use std::path::Path;

/// Extensions offered in the native file picker. Dropped files are accepted
/// regardless; this only shapes the dialog.
pub const PICKER_EXTENSIONS: [&str; 5] = ["pdf", "png", "jpg", "jpeg", "txt"];

/// Declared media kind for a selected file, derived from its extension.
pub fn media_kind(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        _ => "application/octet-stream",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_known_kinds() {
        assert_eq!(media_kind(&PathBuf::from("a.pdf")), "application/pdf");
        assert_eq!(media_kind(&PathBuf::from("b.PNG")), "image/png");
        assert_eq!(media_kind(&PathBuf::from("c.jpeg")), "image/jpeg");
        assert_eq!(media_kind(&PathBuf::from("d.txt")), "text/plain");
    }

    #[test]
    fn test_unknown_kind_falls_back() {
        assert_eq!(media_kind(&PathBuf::from("archive.zip")), "application/octet-stream");
        assert_eq!(media_kind(&PathBuf::from("no_extension")), "application/octet-stream");
    }
}
