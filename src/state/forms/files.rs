//! Staging of attachments before submission

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Largest accepted attachment, in bytes (10 MB)
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Scanned documents and photos
pub const DOCUMENT_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "application/pdf"];

/// Audio and video recordings
pub const MEDIA_MIME_TYPES: &[&str] = &[
    "audio/mpeg",
    "audio/mp3",
    "audio/wav",
    "audio/x-wav",
    "audio/wave",
    "audio/mp4",
    "audio/m4a",
    "audio/x-m4a",
    "audio/aac",
    "audio/ogg",
    "audio/flac",
    "audio/webm",
    "video/mp4",
    "video/quicktime",
    "video/webm",
    "video/x-msvideo",
    "video/x-matroska",
];

/// A file the user picked, not yet checked against the form's constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub path: PathBuf,
}

impl FileCandidate {
    /// Build a candidate from a path on disk, guessing the MIME type from the extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        if !metadata.is_file() {
            anyhow::bail!("{} is not a file", path.display());
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Ok(Self {
            name,
            size: metadata.len(),
            mime_type,
            path: path.to_path_buf(),
        })
    }
}

/// An accepted attachment
pub type StagedFile = FileCandidate;

/// Why a candidate was turned away
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRejection {
    TooLarge { name: String, size: u64 },
    UnsupportedType { name: String, mime_type: String },
}

impl FileRejection {
    pub fn message(&self) -> String {
        match self {
            FileRejection::TooLarge { name, .. } => {
                format!("{name} is larger than 10 MB")
            }
            FileRejection::UnsupportedType { name, mime_type } => {
                format!("{name} ({mime_type}) is not a supported file type")
            }
        }
    }
}

/// Ordered list of accepted attachments for one session
#[derive(Debug, Clone, Default)]
pub struct FileStager {
    allowed: &'static [&'static str],
    files: Vec<StagedFile>,
}

impl FileStager {
    pub fn new(allowed: &'static [&'static str]) -> Self {
        Self {
            allowed,
            files: Vec::new(),
        }
    }

    /// Whether this form accepts attachments at all
    pub fn accepts_files(&self) -> bool {
        !self.allowed.is_empty()
    }

    /// Check one candidate against the size limit and the allow-list
    pub fn check(&self, candidate: &FileCandidate) -> Result<(), FileRejection> {
        if candidate.size > MAX_FILE_SIZE {
            return Err(FileRejection::TooLarge {
                name: candidate.name.clone(),
                size: candidate.size,
            });
        }
        if !self.allowed.contains(&candidate.mime_type.as_str()) {
            return Err(FileRejection::UnsupportedType {
                name: candidate.name.clone(),
                mime_type: candidate.mime_type.clone(),
            });
        }
        Ok(())
    }

    /// Append every acceptable candidate; returns the rejections.
    /// Already staged files are never affected by a rejection.
    pub fn add_files(
        &mut self,
        candidates: impl IntoIterator<Item = FileCandidate>,
    ) -> Vec<FileRejection> {
        let mut rejections = Vec::new();
        for candidate in candidates {
            match self.check(&candidate) {
                Ok(()) => {
                    tracing::debug!(name = %candidate.name, size = candidate.size, "file staged");
                    self.files.push(candidate);
                }
                Err(rejection) => {
                    tracing::debug!(reason = %rejection.message(), "file rejected");
                    rejections.push(rejection);
                }
            }
        }
        rejections
    }

    /// Remove the file at `index`; later files shift down by one
    pub fn remove_file(&mut self, index: usize) -> Option<StagedFile> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Human readable byte size
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.0} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn candidate(name: &str, size: u64, mime: &str) -> FileCandidate {
        FileCandidate {
            name: name.to_string(),
            size,
            mime_type: mime.to_string(),
            path: PathBuf::from(name),
        }
    }

    #[test]
    fn test_size_limit_boundary() {
        let mut stager = FileStager::new(DOCUMENT_MIME_TYPES);

        let rejections = stager.add_files([candidate("big.pdf", 10_485_761, "application/pdf")]);
        assert_eq!(rejections.len(), 1);
        assert!(matches!(rejections[0], FileRejection::TooLarge { .. }));
        assert!(stager.is_empty());

        let rejections = stager.add_files([candidate("ok.pdf", 10_485_760, "application/pdf")]);
        assert!(rejections.is_empty());
        assert_eq!(stager.len(), 1);
    }

    #[test]
    fn test_rejects_disallowed_type() {
        let mut stager = FileStager::new(DOCUMENT_MIME_TYPES);
        let rejections = stager.add_files([candidate("notes.docx", 100, "application/msword")]);
        assert_eq!(
            rejections,
            vec![FileRejection::UnsupportedType {
                name: "notes.docx".to_string(),
                mime_type: "application/msword".to_string(),
            }]
        );
    }

    #[test]
    fn test_rejection_does_not_touch_accepted_files() {
        let mut stager = FileStager::new(DOCUMENT_MIME_TYPES);
        stager.add_files([candidate("a.png", 10, "image/png")]);
        let rejections = stager.add_files([
            candidate("b.exe", 10, "application/octet-stream"),
            candidate("c.jpg", 10, "image/jpeg"),
        ]);
        assert_eq!(rejections.len(), 1);
        let names: Vec<_> = stager.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "c.jpg"]);
    }

    #[test]
    fn test_media_types_for_transcription() {
        let mut stager = FileStager::new(MEDIA_MIME_TYPES);
        assert!(stager
            .add_files([candidate("call.mp3", 1_000, "audio/mpeg")])
            .is_empty());
        assert_eq!(
            stager.add_files([candidate("scan.pdf", 1_000, "application/pdf")]).len(),
            1
        );
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut stager = FileStager::new(DOCUMENT_MIME_TYPES);
        stager.add_files([
            candidate("1.pdf", 1, "application/pdf"),
            candidate("2.pdf", 1, "application/pdf"),
            candidate("3.pdf", 1, "application/pdf"),
            candidate("4.pdf", 1, "application/pdf"),
        ]);

        let removed = stager.remove_file(1).unwrap();
        assert_eq!(removed.name, "2.pdf");
        let names: Vec<_> = stager.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["1.pdf", "3.pdf", "4.pdf"]);
    }

    #[test]
    fn test_remove_out_of_range_is_none() {
        let mut stager = FileStager::new(DOCUMENT_MIME_TYPES);
        assert!(stager.remove_file(0).is_none());
    }

    #[test]
    fn test_candidate_from_path_guesses_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("passport.pdf");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"%PDF-1.4 test").unwrap();

        let candidate = FileCandidate::from_path(&path).unwrap();
        assert_eq!(candidate.name, "passport.pdf");
        assert_eq!(candidate.size, 13);
        assert_eq!(candidate.mime_type, "application/pdf");
    }

    #[test]
    fn test_candidate_from_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileCandidate::from_path(dir.path().join("nope.pdf")).is_err());
        assert!(FileCandidate::from_path(dir.path()).is_err());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2 KB");
        assert_eq!(format_size(MAX_FILE_SIZE), "10.0 MB");
    }

    #[test]
    fn test_rejection_messages() {
        let too_large = FileRejection::TooLarge {
            name: "scan.pdf".into(),
            size: MAX_FILE_SIZE + 1,
        };
        assert_eq!(too_large.message(), "scan.pdf is larger than 10 MB");
    }
}
