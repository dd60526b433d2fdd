//! Supported upload formats.

use std::path::Path;

/// Document formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Detect the format from a file name's extension, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use atelier_core::DocumentFormat;
    ///
    /// assert_eq!(DocumentFormat::from_file_name("Report.PDF"), Some(DocumentFormat::Pdf));
    /// assert_eq!(DocumentFormat::from_file_name("notes.txt"), None);
    /// ```
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::from_extension(&extension_of(name))
    }

    /// Match a lowercase extension including its leading dot.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            ".pdf" => Some(DocumentFormat::Pdf),
            ".docx" => Some(DocumentFormat::Docx),
            _ => None,
        }
    }
}

/// Lowercased extension with its leading dot, or an empty string.
pub fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default()
}
