//! Attached resource files
//!
//! Posts can carry one attached file: lecture notes, a worksheet, a
//! photo of the whiteboard. Files live in content-addressed storage
//! (blake3 hex keys); the post stores a [`ResourceRef`] pointing at
//! the bytes plus the original filename for display and saving.

use serde::{Deserialize, Serialize};

/// File extensions accepted for attached resources
pub const ALLOWED_EXTENSIONS: &[&str] =
    &["pdf", "png", "jpg", "jpeg", "doc", "docx", "ppt", "pptx"];

/// Attached files are capped at 10 MB
pub const MAX_RESOURCE_BYTES: u64 = 10 * 1024 * 1024;

/// Check a filename against the extension allowlist.
///
/// Returns the lowercased extension when accepted, `None` when the file
/// has no extension or an extension outside the allowlist.
pub fn allowed_extension(filename: &str) -> Option<String> {
    let ext = filename.rsplit_once('.')?.1.to_lowercase();
    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        Some(ext)
    } else {
        None
    }
}

/// Reference to an attached file in resource storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRef {
    /// Blake3 hash of the contents, hex-encoded
    pub hash: String,
    /// Original filename, kept for display and save dialogs
    pub filename: String,
    /// Size in bytes
    pub size: u64,
}

impl ResourceRef {
    /// Lowercased file extension, if any
    pub fn extension(&self) -> Option<String> {
        self.filename.rsplit_once('.').map(|(_, e)| e.to_lowercase())
    }

    /// Whether this resource can be shown inline as an image
    pub fn is_image(&self) -> bool {
        matches!(
            self.extension().as_deref(),
            Some("png") | Some("jpg") | Some("jpeg")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extension_accepts_allowlist() {
        assert_eq!(allowed_extension("notes.pdf"), Some("pdf".to_string()));
        assert_eq!(allowed_extension("Slides.PPTX"), Some("pptx".to_string()));
    }

    #[test]
    fn test_allowed_extension_rejects_others() {
        assert_eq!(allowed_extension("script.exe"), None);
        assert_eq!(allowed_extension("archive.zip"), None);
    }

    #[test]
    fn test_allowed_extension_requires_extension() {
        assert_eq!(allowed_extension("README"), None);
    }

    #[test]
    fn test_is_image() {
        let image = ResourceRef {
            hash: "ab".to_string(),
            filename: "whiteboard.JPG".to_string(),
            size: 10,
        };
        let doc = ResourceRef {
            hash: "cd".to_string(),
            filename: "worksheet.pdf".to_string(),
            size: 10,
        };
        assert!(image.is_image());
        assert!(!doc.is_image());
    }
}
