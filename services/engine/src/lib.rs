//! services/engine/src/lib.rs
//!
//! The engine service: the lecture processing pipeline and the conversational
//! response engine, wired over the core ports. The presentation layer is the
//! caller on both sides: it submits uploads and utterances, and subscribes
//! to the [`events::EngineEvent`] stream to react to state changes.

pub mod adapters;
pub mod chat;
pub mod config;
pub mod error;
pub mod events;
pub mod export;
pub mod markup;
pub mod pipeline;
pub mod state;

use crate::{
    adapters::{analyzer::SimulatedAnalyzerAdapter, delay::TimerDelayAdapter},
    chat::ChatSession,
    config::EngineConfig,
    error::EngineError,
    events::{EngineEvent, EventSender},
    pipeline::LecturePipeline,
    state::AppState,
};
use lecture_assistant_core::domain::ConversationContext;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

/// The assembled engine: one pipeline plus a factory for conversation
/// sessions, all sharing one state and one event channel.
pub struct Engine {
    app_state: Arc<AppState>,
    pipeline: LecturePipeline,
    events: EventSender,
}

impl Engine {
    /// Builds an engine with the production adapters: the simulated analyzer
    /// and the randomized thinking-pause timer, both driven by `config`.
    pub fn new(config: EngineConfig) -> (Self, UnboundedReceiver<EngineEvent>) {
        let analyzer = Arc::new(SimulatedAnalyzerAdapter::new(config.processing_delay));
        let delay = Arc::new(TimerDelayAdapter::new(
            config.thinking_delay_base,
            config.thinking_delay_jitter,
        ));
        let app_state = Arc::new(AppState::new(analyzer, delay));
        Self::with_state(app_state)
    }

    /// Builds an engine from environment configuration. Fails with
    /// [`EngineError::Config`] when a timing variable does not parse.
    pub fn from_env() -> Result<(Self, UnboundedReceiver<EngineEvent>), EngineError> {
        let config = EngineConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Builds an engine around pre-assembled state. Callers substitute their
    /// own port implementations here; tests use the instant adapters.
    pub fn with_state(app_state: Arc<AppState>) -> (Self, UnboundedReceiver<EngineEvent>) {
        let (events, rx) = EventSender::channel();
        let pipeline = LecturePipeline::new(app_state.clone(), events.clone());
        (
            Self {
                app_state,
                pipeline,
                events,
            },
            rx,
        )
    }

    pub fn pipeline(&self) -> &LecturePipeline {
        &self.pipeline
    }

    /// Opens a conversation session with the given context.
    pub fn new_session(&self, context: ConversationContext) -> ChatSession {
        ChatSession::new(self.app_state.clone(), context, self.events.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::delay::InstantDelayAdapter;
    use crate::chat::intent::ResponseCategory;
    use lecture_assistant_core::domain::{ProcessingStatus, Sender, VideoUpload};
    use std::time::Duration;

    /// End-to-end: upload a video, watch it complete, feed the completed
    /// record into a chat session, and get a lecture-aware answer.
    #[tokio::test(start_paused = true)]
    async fn upload_to_lecture_aware_conversation() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let app_state = Arc::new(AppState::new(
            Arc::new(SimulatedAnalyzerAdapter::new(Duration::from_secs(3))),
            Arc::new(InstantDelayAdapter),
        ));
        let (engine, mut rx) = Engine::with_state(app_state);

        engine
            .pipeline()
            .submit_video(VideoUpload {
                file_name: "Neural Networks 101.mp4".to_string(),
                mime_type: "video/mp4".to_string(),
            })
            .await
            .unwrap();

        // Processing, then Completed: the caller reacts to the second event
        // by switching to the notes view and handing the record to the chat.
        let mut statuses = Vec::new();
        while statuses.len() < 2 {
            if let Some(events::EngineEvent::LectureStatusChanged { status, .. }) = rx.recv().await
            {
                statuses.push(status);
            }
        }
        assert_eq!(
            statuses,
            vec![ProcessingStatus::Processing, ProcessingStatus::Completed]
        );

        let lecture = engine.pipeline().active_lecture().await.unwrap();
        let session = engine.new_session(ConversationContext::with_lecture(lecture));
        session.submit_message("What are the key takeaways?").await;

        let messages = loop {
            let messages = session.messages().await;
            if messages.last().map(|m| m.sender) == Some(Sender::Assistant) && messages.len() >= 3 {
                break messages;
            }
            tokio::task::yield_now().await;
        };
        assert_eq!(
            messages.last().unwrap().text,
            chat::responder::generate(&ResponseCategory::LectureKeyConcepts).text
        );
    }
}
