//! services/engine/src/events.rs
//!
//! Defines the notification protocol between the engine and its caller
//! (the presentation layer). Events are delivered in order over an unbounded
//! `tokio::sync::mpsc` channel held by the subscriber.

use lecture_assistant_core::domain::{Message, ProcessingStatus};
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::debug;
use uuid::Uuid;

//=========================================================================================
// Events Sent FROM the Engine TO the Caller
//=========================================================================================

/// Represents the structured notifications the engine can emit.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineEvent {
    /// Fired on every lecture status transition. The caller uses
    /// `Completed`/`Error` to drive view changes.
    LectureStatusChanged {
        lecture_id: Uuid,
        status: ProcessingStatus,
    },

    /// Fired once per appended conversation message (user or assistant),
    /// including the initial welcome message.
    MessageAppended { message: Message },
}

/// The engine-side handle for emitting events.
///
/// Cheap to clone; a dropped subscriber is tolerated (the engine keeps
/// running, the notification is simply lost).
#[derive(Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<EngineEvent>,
}

impl EventSender {
    /// Creates a connected sender/subscriber pair.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<EngineEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn emit(&self, event: EngineEvent) {
        if self.tx.send(event).is_err() {
            debug!("Event subscriber is gone; notification dropped.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lecture_assistant_core::domain::ProcessingStatus;

    #[test]
    fn events_serialize_with_a_type_tag() {
        let event = EngineEvent::LectureStatusChanged {
            lecture_id: Uuid::nil(),
            status: ProcessingStatus::Processing,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "lecture_status_changed");
        assert_eq!(json["status"], "processing");
    }

    #[tokio::test]
    async fn emitting_without_a_subscriber_does_not_panic() {
        let (sender, rx) = EventSender::channel();
        drop(rx);
        sender.emit(EngineEvent::LectureStatusChanged {
            lecture_id: Uuid::nil(),
            status: ProcessingStatus::Error,
        });
    }
}
