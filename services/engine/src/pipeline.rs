//! services/engine/src/pipeline.rs
//!
//! The lecture processing pipeline: owns a lecture record's lifecycle from
//! upload to completed/errored, producing transcript, notes and doubts.
//!
//! Exactly one record is active at a time. Submitting a new upload while one
//! is processing replaces it; the superseded analysis task still runs to
//! completion, but its result is dropped by the stale guard before it can
//! mutate anything.

use crate::{
    error::EngineError,
    events::{EngineEvent, EventSender},
    state::AppState,
};
use lecture_assistant_core::domain::{LectureRecord, VideoUpload};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Drives lecture records through `Processing -> {Completed, Error}`.
pub struct LecturePipeline {
    app_state: Arc<AppState>,
    active: Arc<Mutex<Option<LectureRecord>>>,
    events: EventSender,
}

impl LecturePipeline {
    pub fn new(app_state: Arc<AppState>, events: EventSender) -> Self {
        Self {
            app_state,
            active: Arc::new(Mutex::new(None)),
            events,
        }
    }

    /// Submits a video for processing.
    ///
    /// Synchronously creates the record in `Processing` (title derived from
    /// the file name) and spawns the analysis task; completion is delivered
    /// later as a `LectureStatusChanged` notification. Non-video uploads are
    /// rejected without creating a record or firing any event.
    pub async fn submit_video(&self, upload: VideoUpload) -> Result<LectureRecord, EngineError> {
        if !upload.is_video() {
            warn!(
                "Rejected upload '{}': mime type '{}' is not a video.",
                upload.file_name, upload.mime_type
            );
            return Err(EngineError::InvalidUpload {
                file_name: upload.file_name,
                mime_type: upload.mime_type,
            });
        }

        let record = LectureRecord::new_processing(&upload.file_name);
        info!(
            "Lecture '{}' ({}) submitted; processing started.",
            record.title, record.id
        );

        {
            let mut active = self.active.lock().await;
            if let Some(prior) = active.as_ref() {
                info!(
                    "Replacing active lecture {} with new upload {}.",
                    prior.id, record.id
                );
            }
            *active = Some(record.clone());
        }

        self.events.emit(EngineEvent::LectureStatusChanged {
            lecture_id: record.id,
            status: record.status,
        });

        tokio::spawn(analysis_process(
            self.app_state.clone(),
            self.active.clone(),
            self.events.clone(),
            record.id,
            record.title.clone(),
        ));

        Ok(record)
    }

    /// Returns a snapshot of the currently active record, if any.
    pub async fn active_lecture(&self) -> Option<LectureRecord> {
        self.active.lock().await.clone()
    }
}

/// The asynchronous "worker" task for one analysis run.
///
/// On completion it re-checks that its record is still the active one; a
/// superseded record's result is discarded without mutating state or firing
/// an event.
async fn analysis_process(
    app_state: Arc<AppState>,
    active: Arc<Mutex<Option<LectureRecord>>>,
    events: EventSender,
    record_id: Uuid,
    title: String,
) {
    let result = app_state.analyzer.analyze_video(&title).await;

    let mut guard = active.lock().await;
    let record = match guard.as_mut() {
        Some(record) if record.id == record_id => record,
        _ => {
            info!(
                "Analysis result for superseded lecture {} discarded.",
                record_id
            );
            return;
        }
    };

    match result {
        Ok(analysis) => {
            record.complete(analysis);
            info!("Lecture '{}' ({}) completed.", record.title, record.id);
        }
        Err(e) => {
            record.fail();
            error!("Lecture '{}' ({}) failed: {}", record.title, record.id, e);
        }
    }

    events.emit(EngineEvent::LectureStatusChanged {
        lecture_id: record.id,
        status: record.status,
    });
}
