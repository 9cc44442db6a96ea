//! crates/lecture_assistant_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any runtime, adapter or presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The lifecycle status of a [`LectureRecord`].
///
/// Transitions are monotonic and forward-only:
/// `Idle -> Processing -> {Completed, Error}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStatus {
    Idle,
    Processing,
    Completed,
    Error,
}

impl ProcessingStatus {
    /// Returns true if a record in `self` may move to `next`.
    pub fn can_transition_to(self, next: ProcessingStatus) -> bool {
        matches!(
            (self, next),
            (ProcessingStatus::Idle, ProcessingStatus::Processing)
                | (ProcessingStatus::Processing, ProcessingStatus::Completed)
                | (ProcessingStatus::Processing, ProcessingStatus::Error)
        )
    }
}

/// A detected unclear moment in a lecture, with optional clarifying resources.
///
/// An answered doubt may still carry suggestions ("resolved in-lecture but
/// with further reading"), and an unanswered one may have none ("no resource
/// found"). Neither combination is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doubt {
    pub question: String,
    /// Position marker into the source video, as a display string (`mm:ss`).
    pub timestamp: String,
    /// Whether the lecture itself resolves the question.
    pub answered: bool,
    /// Human-readable titles of candidate clarification resources.
    pub suggestions: Vec<String>,
}

/// The atomically-produced output of analysing one lecture video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureAnalysis {
    pub transcript: String,
    pub notes: Vec<String>,
    pub doubts: Vec<Doubt>,
}

/// A lecture video submitted for processing, as seen at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoUpload {
    pub file_name: String,
    pub mime_type: String,
}

impl VideoUpload {
    /// Whether the mime type indicates a video file. Only video uploads
    /// are accepted by the pipeline.
    pub fn is_video(&self) -> bool {
        self.mime_type.starts_with("video/")
    }
}

/// Represents one uploaded lecture and everything derived from it.
///
/// Created with `status = Processing` and empty derived fields; mutated
/// exactly once by the pipeline's completion step via [`LectureRecord::complete`]
/// or [`LectureRecord::fail`], and never again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureRecord {
    pub id: Uuid,
    pub title: String,
    pub status: ProcessingStatus,
    pub transcript: String,
    pub notes: Vec<String>,
    pub doubts: Vec<Doubt>,
}

impl LectureRecord {
    /// Creates a record for a freshly submitted video, already in
    /// `Processing`. The title is the file name with its extension stripped.
    pub fn new_processing(file_name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: strip_extension(file_name).to_string(),
            status: ProcessingStatus::Processing,
            transcript: String::new(),
            notes: Vec::new(),
            doubts: Vec::new(),
        }
    }

    /// Populates all derived fields as a group and marks the record
    /// `Completed`. Partially-populated completed records cannot exist.
    pub fn complete(&mut self, analysis: LectureAnalysis) {
        debug_assert!(self.status.can_transition_to(ProcessingStatus::Completed));
        self.transcript = analysis.transcript;
        self.notes = analysis.notes;
        self.doubts = analysis.doubts;
        self.status = ProcessingStatus::Completed;
    }

    /// Marks the record `Error`. Derived fields stay empty.
    pub fn fail(&mut self) {
        debug_assert!(self.status.can_transition_to(ProcessingStatus::Error));
        self.status = ProcessingStatus::Error;
    }
}

/// Strips the final `.ext` component from a file name, if any.
fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 && !file_name[idx + 1..].is_empty() => &file_name[..idx],
        _ => file_name,
    }
}

/// Which side of the conversation a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

/// A single entry in a conversation's append-only message log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    /// Raw markup-dialect content.
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    /// Hint that the text is primarily code/structured content. Affects
    /// rendering only: structured messages bypass markup parsing.
    pub is_structured: bool,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
            is_structured: false,
        }
    }

    pub fn assistant(text: impl Into<String>, is_structured: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender: Sender::Assistant,
            timestamp: Utc::now(),
            is_structured,
        }
    }
}

/// What the assistant knows about the surrounding lecture, if anything.
///
/// Absence of a lecture means "general knowledge mode". The welcome message
/// and suggested prompts are pure functions of this value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationContext {
    pub lecture: Option<LectureRecord>,
}

impl ConversationContext {
    pub fn general() -> Self {
        Self { lecture: None }
    }

    pub fn with_lecture(lecture: LectureRecord) -> Self {
        Self {
            lecture: Some(lecture),
        }
    }

    pub fn has_lecture(&self) -> bool {
        self.lecture.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_strips_the_final_extension() {
        let record = LectureRecord::new_processing("Lecture 5 - Intro.mp4");
        assert_eq!(record.title, "Lecture 5 - Intro");
    }

    #[test]
    fn title_without_extension_is_kept_verbatim() {
        assert_eq!(LectureRecord::new_processing("raw-recording").title, "raw-recording");
        // A leading dot is not an extension separator.
        assert_eq!(LectureRecord::new_processing(".hidden").title, ".hidden");
        assert_eq!(LectureRecord::new_processing("trailing.").title, "trailing.");
    }

    #[test]
    fn status_transitions_are_forward_only() {
        use ProcessingStatus::*;
        assert!(Idle.can_transition_to(Processing));
        assert!(Processing.can_transition_to(Completed));
        assert!(Processing.can_transition_to(Error));

        assert!(!Completed.can_transition_to(Processing));
        assert!(!Error.can_transition_to(Processing));
        assert!(!Processing.can_transition_to(Idle));
        assert!(!Idle.can_transition_to(Completed));
    }

    #[test]
    fn completion_populates_all_fields_as_a_group() {
        let mut record = LectureRecord::new_processing("intro.mp4");
        record.complete(LectureAnalysis {
            transcript: "t".to_string(),
            notes: vec!["n".to_string()],
            doubts: vec![Doubt {
                question: "q?".to_string(),
                timestamp: "01:00".to_string(),
                answered: true,
                suggestions: vec!["further reading".to_string()],
            }],
        });
        assert_eq!(record.status, ProcessingStatus::Completed);
        assert_eq!(record.transcript, "t");
        assert_eq!(record.notes.len(), 1);
        assert_eq!(record.doubts.len(), 1);
    }

    #[test]
    fn failure_leaves_derived_fields_empty() {
        let mut record = LectureRecord::new_processing("intro.mp4");
        record.fail();
        assert_eq!(record.status, ProcessingStatus::Error);
        assert!(record.transcript.is_empty());
        assert!(record.notes.is_empty());
        assert!(record.doubts.is_empty());
    }

    #[test]
    fn only_video_mime_types_are_accepted() {
        let video = VideoUpload {
            file_name: "a.mp4".to_string(),
            mime_type: "video/mp4".to_string(),
        };
        let pdf = VideoUpload {
            file_name: "a.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
        };
        assert!(video.is_video());
        assert!(!pdf.is_video());
    }
}
