//! Local file transfer
//!
//! Opening asks the host for a file and finishes later, when the host has
//! read it as text. Exporting is synchronous: build the payload, hand it to
//! the host, and only then mark the document saved.

use chrono::{DateTime, Utc};

use crate::error::NotebookError;
use crate::models::document::DocumentSession;
use crate::models::profile::{FormatProfile, OPEN_ACCEPT};
use crate::surface::EditingSurface;

/// Bytes to download and the name to save them under
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPayload {
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: String,
}

impl ExportPayload {
    pub fn new(profile: FormatProfile, content: String, at: DateTime<Utc>) -> Self {
        Self {
            file_name: profile.file_name(at),
            mime_type: profile.mime_type,
            content,
        }
    }
}

/// A file the user picked, fully read as text
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedFile {
    pub name: String,
    pub text: String,
}

/// Local file access provided by the environment
pub trait FileHost {
    /// Show a file picker. A chosen and readable file is delivered back
    /// through [`complete_open`]; a cancelled pick delivers nothing.
    fn pick_text_file(&mut self, accept: &str);

    /// Trigger a download of the payload
    fn download(&mut self, payload: &ExportPayload) -> Result<(), NotebookError>;
}

/// Ask the user for a plain-text or dump file
pub fn open_local<H: FileHost>(host: &mut H) {
    log::debug!("Requesting local file ({})", OPEN_ACCEPT);
    host.pick_text_file(OPEN_ACCEPT);
}

/// Finish an open. `None` (cancelled or unreadable) leaves the document alone.
pub fn complete_open<S: EditingSurface>(
    doc: &mut DocumentSession<S>,
    file: Option<LoadedFile>,
) -> bool {
    match file {
        Some(file) => {
            doc.load(&file.name, &file.text);
            true
        }
        None => {
            log::debug!("Open cancelled, document unchanged");
            false
        }
    }
}

/// Export the current content under `profile` and rename the document to
/// the generated file name. On failure the document stays modified.
pub fn export_local<S, H>(
    doc: &mut DocumentSession<S>,
    host: &mut H,
    profile: FormatProfile,
    at: DateTime<Utc>,
) -> Result<String, NotebookError>
where
    S: EditingSurface,
    H: FileHost,
{
    let payload = ExportPayload::new(profile, doc.content(), at);
    host.download(&payload)?;

    doc.mark_saved(&payload.file_name);
    log::info!("Exported {} ({})", payload.file_name, payload.mime_type);
    Ok(payload.file_name)
}

/// File host that records requests instead of touching a browser
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingFileHost {
    pub open_requests: Vec<String>,
    pub downloads: Vec<ExportPayload>,
    pub fail_downloads: bool,
}

impl FileHost for RecordingFileHost {
    fn pick_text_file(&mut self, accept: &str) {
        self.open_requests.push(accept.to_string());
    }

    fn download(&mut self, payload: &ExportPayload) -> Result<(), NotebookError> {
        if self.fail_downloads {
            return Err(NotebookError::Download("download refused".to_string()));
        }
        self.downloads.push(payload.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNTITLED;
    use crate::surface::MemorySurface;
    use chrono::TimeZone;

    fn doc() -> DocumentSession<MemorySurface> {
        DocumentSession::new(MemorySurface::new("hello"), UNTITLED)
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 58).unwrap()
    }

    #[test]
    fn test_open_requests_filtered_picker() {
        let mut host = RecordingFileHost::default();
        open_local(&mut host);
        assert_eq!(host.open_requests, vec!["text/plain, .dt".to_string()]);
    }

    #[test]
    fn test_cancelled_open_is_noop() {
        let mut doc = doc();
        doc.record_change();

        assert!(!complete_open(&mut doc, None));
        assert_eq!(doc.content(), "hello");
        assert_eq!(doc.display_name(), "untitled*");
    }

    #[test]
    fn test_export_uses_profile_and_marks_saved() {
        let mut doc = doc();
        let mut host = RecordingFileHost::default();
        doc.record_change();

        let profile = FormatProfile::STRUCTURED_DUMP;
        let name = export_local(&mut doc, &mut host, profile, at()).unwrap();

        assert_eq!(name, "savedump_20251231235958.dt");
        assert_eq!(host.downloads.len(), 1);
        assert_eq!(host.downloads[0].mime_type, "text/dotlin");
        assert_eq!(host.downloads[0].content, "hello");
        assert!(doc.can_discard());
        assert_eq!(doc.display_name(), name);
    }

    #[test]
    fn test_failed_export_keeps_document_modified() {
        let mut doc = doc();
        let mut host = RecordingFileHost {
            fail_downloads: true,
            ..Default::default()
        };
        doc.record_change();

        let result = export_local(&mut doc, &mut host, FormatProfile::PLAIN_NOTE, at());

        assert!(matches!(result, Err(NotebookError::Download(_))));
        assert!(!doc.can_discard());
        assert_eq!(doc.display_name(), "untitled*");
    }
}
