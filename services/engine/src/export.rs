//! services/engine/src/export.rs
//!
//! The one persisted-artifact format in the system: lecture notes exported
//! as a plain-text file.

use bytes::Bytes;
use lecture_assistant_core::domain::LectureRecord;

/// A notes export ready to be handed to whatever saves or downloads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesExport {
    /// `{title}-notes.txt`
    pub filename: String,
    /// The notes joined with a blank-line separator, UTF-8 encoded.
    pub bytes: Bytes,
}

/// Formats a record's notes for download.
pub fn export_notes(record: &LectureRecord) -> NotesExport {
    let content = record.notes.join("\n\n");
    NotesExport {
        filename: format!("{}-notes.txt", record.title),
        bytes: Bytes::from(content),
    }
}
