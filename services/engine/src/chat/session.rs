//! services/engine/src/chat/session.rs
//!
//! A conversation session: the append-only message log and the state machine
//! driving the classify/generate cycle.
//!
//! The session alternates between `Idle` and `AwaitingResponse`. A user
//! message is appended synchronously; the assistant reply is delivered by a
//! spawned worker task after the thinking pause resolves. There is no
//! cancellation: once scheduled, a reply always delivers.

use crate::{
    chat::{intent, responder},
    events::{EngineEvent, EventSender},
    state::AppState,
};
use lecture_assistant_core::domain::{ConversationContext, LectureRecord, Message};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

/// An enum representing the current mode of the conversation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionMode {
    Idle,
    /// A user message is in, the assistant reply is not out yet. New
    /// submissions are suppressed until the reply lands.
    AwaitingResponse,
}

struct SessionInner {
    context: ConversationContext,
    messages: Vec<Message>,
    mode: SessionMode,
}

/// One user-facing conversation with the assistant.
pub struct ChatSession {
    pub id: Uuid,
    app_state: Arc<AppState>,
    inner: Arc<Mutex<SessionInner>>,
    events: EventSender,
}

impl ChatSession {
    /// Creates a session and seeds it with the context-dependent welcome
    /// message (emitted like any other appended message).
    pub fn new(app_state: Arc<AppState>, context: ConversationContext, events: EventSender) -> Self {
        let welcome = Message::assistant(welcome_text(&context), false);
        events.emit(EngineEvent::MessageAppended {
            message: welcome.clone(),
        });

        let id = Uuid::new_v4();
        info!("Conversation session {} created.", id);

        Self {
            id,
            app_state,
            inner: Arc::new(Mutex::new(SessionInner {
                context,
                messages: vec![welcome],
                mode: SessionMode::Idle,
            })),
            events,
        }
    }

    /// Submits a user utterance.
    ///
    /// Whitespace-only input and input arriving while a reply is pending are
    /// silently ignored. Otherwise the user message is appended immediately
    /// and the assistant reply is scheduled behind the thinking pause.
    pub async fn submit_message(&self, utterance: &str) {
        if utterance.trim().is_empty() {
            debug!("Session {}: empty submission ignored.", self.id);
            return;
        }

        let context = {
            let mut inner = self.inner.lock().await;
            if inner.mode == SessionMode::AwaitingResponse {
                debug!(
                    "Session {}: submission ignored while a response is pending.",
                    self.id
                );
                return;
            }

            let message = Message::user(utterance);
            inner.messages.push(message.clone());
            inner.mode = SessionMode::AwaitingResponse;
            self.events.emit(EngineEvent::MessageAppended { message });
            inner.context.clone()
        };

        tokio::spawn(respond_process(
            self.id,
            self.app_state.clone(),
            self.inner.clone(),
            self.events.clone(),
            utterance.to_string(),
            context,
        ));
    }

    /// Installs a completed lecture into the session's context.
    ///
    /// While the log still holds at most the original welcome message, the
    /// session resets to a fresh lecture-aware welcome; an in-progress
    /// conversation is never discarded.
    pub async fn set_lecture(&self, lecture: LectureRecord) {
        let mut inner = self.inner.lock().await;
        inner.context = ConversationContext::with_lecture(lecture);

        if inner.messages.len() <= 1 {
            let welcome = Message::assistant(welcome_text(&inner.context), false);
            inner.messages.clear();
            inner.messages.push(welcome.clone());
            self.events.emit(EngineEvent::MessageAppended { message: welcome });
            info!("Session {}: welcome message reset for new lecture.", self.id);
        }
    }

    /// Returns a snapshot of the message log in append order.
    pub async fn messages(&self) -> Vec<Message> {
        self.inner.lock().await.messages.clone()
    }

    /// Returns a snapshot of the current context.
    pub async fn context(&self) -> ConversationContext {
        self.inner.lock().await.context.clone()
    }

    /// True while an assistant reply is pending.
    pub async fn is_awaiting_response(&self) -> bool {
        self.inner.lock().await.mode == SessionMode::AwaitingResponse
    }
}

/// The asynchronous "worker" task for one assistant reply.
async fn respond_process(
    session_id: Uuid,
    app_state: Arc<AppState>,
    inner: Arc<Mutex<SessionInner>>,
    events: EventSender,
    utterance: String,
    context: ConversationContext,
) {
    app_state.delay.thinking_pause().await;

    let category = intent::classify(&utterance, &context);
    let reply = responder::generate(&category);
    debug!(
        "Session {}: utterance classified as '{}'.",
        session_id,
        category.label()
    );

    let message = Message::assistant(reply.text, reply.is_structured);
    {
        let mut inner = inner.lock().await;
        inner.messages.push(message.clone());
        inner.mode = SessionMode::Idle;
    }
    events.emit(EngineEvent::MessageAppended { message });
}

/// The welcome message for a context: a pure function of whether a lecture
/// is present and, if so, of its title.
pub fn welcome_text(context: &ConversationContext) -> String {
    match &context.lecture {
        Some(lecture) => format!(
            "Hello! I'm your AI assistant for the lecture \"{}\". I can help you understand \
             concepts, clarify doubts, and answer questions based on the lecture content. \
             What would you like to know?",
            lecture.title
        ),
        None => "Hello! I'm your AI assistant powered by advanced language models. I can help you with:\n\n\
- **Programming & Development** - Code examples, debugging, best practices\n\
- **Mathematics & Science** - Problem solving, explanations, formulas\n\
- **Academic Topics** - Research, writing, analysis\n\
- **General Knowledge** - Facts, explanations, creative tasks\n\n\
Ask me anything and I'll provide detailed, helpful responses!"
            .to_string(),
    }
}

/// The suggested starter prompts for a context.
pub fn suggested_prompts(context: &ConversationContext) -> &'static [&'static str] {
    if context.has_lecture() {
        &[
            "Can you explain the main concepts covered?",
            "What are the key takeaways from this lecture?",
            "Help me understand the difficult parts",
            "Create a summary of important points",
        ]
    } else {
        &[
            "Write a Python function to sort a list",
            "Explain quantum computing in simple terms",
            "How do I center a div in CSS?",
            "What's the difference between React and Vue?",
            "Solve: 2x + 5 = 15",
            "Explain photosynthesis process",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{analyzer::SimulatedAnalyzerAdapter, delay::InstantDelayAdapter};
    use crate::chat::intent::ResponseCategory;
    use lecture_assistant_core::domain::{LectureAnalysis, Sender};
    use lecture_assistant_core::ports::ResponseDelayService;
    use std::time::Duration;
    use tokio::sync::mpsc::UnboundedReceiver;

    fn app_state(delay: Arc<dyn ResponseDelayService>) -> Arc<AppState> {
        Arc::new(AppState::new(
            Arc::new(SimulatedAnalyzerAdapter::new(Duration::ZERO)),
            delay,
        ))
    }

    fn session_with(
        context: ConversationContext,
        delay: Arc<dyn ResponseDelayService>,
    ) -> (ChatSession, UnboundedReceiver<EngineEvent>) {
        let (events, rx) = EventSender::channel();
        (ChatSession::new(app_state(delay), context, events), rx)
    }

    fn completed_lecture(file_name: &str) -> LectureRecord {
        let mut record = LectureRecord::new_processing(file_name);
        record.complete(LectureAnalysis {
            transcript: "t".to_string(),
            notes: vec!["n".to_string()],
            doubts: vec![],
        });
        record
    }

    async fn next_message(rx: &mut UnboundedReceiver<EngineEvent>) -> Message {
        match rx.recv().await.unwrap() {
            EngineEvent::MessageAppended { message } => message,
            other => panic!("expected MessageAppended, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn general_session_starts_with_the_general_welcome() {
        let (session, mut rx) =
            session_with(ConversationContext::general(), Arc::new(InstantDelayAdapter));

        let welcome = next_message(&mut rx).await;
        assert_eq!(welcome.sender, Sender::Assistant);
        assert!(welcome.text.contains("advanced language models"));

        let messages = session.messages().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, welcome.id);
    }

    #[tokio::test]
    async fn lecture_session_welcome_names_the_lecture() {
        let context = ConversationContext::with_lecture(completed_lecture("Deep Learning.mp4"));
        let (_session, mut rx) = session_with(context, Arc::new(InstantDelayAdapter));

        let welcome = next_message(&mut rx).await;
        assert!(welcome.text.contains("\"Deep Learning\""));
    }

    #[tokio::test]
    async fn whitespace_submissions_append_nothing() {
        let (session, mut rx) =
            session_with(ConversationContext::general(), Arc::new(InstantDelayAdapter));
        next_message(&mut rx).await; // welcome

        session.submit_message("").await;
        session.submit_message("   \n\t").await;

        assert_eq!(session.messages().await.len(), 1);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn user_message_is_visible_before_its_reply() {
        let (session, mut rx) =
            session_with(ConversationContext::general(), Arc::new(InstantDelayAdapter));
        next_message(&mut rx).await; // welcome

        session.submit_message("Explain quantum computing in simple terms").await;

        // The user message is synchronously observable, right after the welcome.
        let snapshot = session.messages().await;
        assert_eq!(snapshot[1].sender, Sender::User);

        let user = next_message(&mut rx).await;
        assert_eq!(user.sender, Sender::User);
        let reply = next_message(&mut rx).await;
        assert_eq!(reply.sender, Sender::Assistant);
        assert_eq!(
            reply.text,
            responder::generate(&ResponseCategory::ScienceTopic(
                crate::chat::intent::ScienceField::QuantumComputing
            ))
            .text
        );
        assert!(!session.is_awaiting_response().await);
    }

    #[tokio::test(start_paused = true)]
    async fn submissions_while_awaiting_are_suppressed() {
        let delay = Arc::new(crate::adapters::delay::TimerDelayAdapter::new(
            Duration::from_secs(1),
            Duration::ZERO,
        ));
        let (session, mut rx) = session_with(ConversationContext::general(), delay);
        next_message(&mut rx).await; // welcome

        session.submit_message("first question").await;
        assert!(session.is_awaiting_response().await);
        session.submit_message("second question").await;

        next_message(&mut rx).await; // user: first question
        let reply = next_message(&mut rx).await;
        assert_eq!(reply.sender, Sender::Assistant);

        // Only welcome + first question + one reply; the duplicate vanished.
        assert_eq!(session.messages().await.len(), 3);
        assert!(rx.try_recv().is_err());

        // Back to idle, the session accepts input again.
        session.submit_message("third question").await;
        next_message(&mut rx).await;
        next_message(&mut rx).await;
        assert_eq!(session.messages().await.len(), 5);
    }

    #[tokio::test]
    async fn fresh_session_resets_welcome_when_a_lecture_arrives() {
        let (session, mut rx) =
            session_with(ConversationContext::general(), Arc::new(InstantDelayAdapter));
        next_message(&mut rx).await; // general welcome

        session.set_lecture(completed_lecture("Graph Theory.mp4")).await;

        let welcome = next_message(&mut rx).await;
        assert!(welcome.text.contains("\"Graph Theory\""));
        let messages = session.messages().await;
        assert_eq!(messages.len(), 1);
        assert!(messages[0].text.contains("Graph Theory"));
    }

    #[tokio::test(start_paused = true)]
    async fn in_progress_conversation_survives_a_lecture_arriving() {
        let (session, mut rx) =
            session_with(ConversationContext::general(), Arc::new(InstantDelayAdapter));
        next_message(&mut rx).await; // welcome

        session.submit_message("hello there").await;
        next_message(&mut rx).await; // user
        next_message(&mut rx).await; // assistant

        session.set_lecture(completed_lecture("Graph Theory.mp4")).await;

        // No reset: the log still holds the whole exchange.
        let messages = session.messages().await;
        assert_eq!(messages.len(), 3);
        assert!(rx.try_recv().is_err());

        // But classification is now lecture-aware.
        session.submit_message("What are the key takeaways?").await;
        next_message(&mut rx).await; // user
        let reply = next_message(&mut rx).await;
        assert_eq!(
            reply.text,
            responder::generate(&ResponseCategory::LectureKeyConcepts).text
        );
    }

    #[test]
    fn suggested_prompts_depend_only_on_lecture_presence() {
        let general = suggested_prompts(&ConversationContext::general());
        assert_eq!(general.len(), 6);
        assert!(general.contains(&"Solve: 2x + 5 = 15"));

        let with_lecture = suggested_prompts(&ConversationContext::with_lecture(
            completed_lecture("x.mp4"),
        ));
        assert_eq!(with_lecture.len(), 4);
        assert!(with_lecture.contains(&"What are the key takeaways from this lecture?"));
    }
}
