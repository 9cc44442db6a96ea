//! services/engine/src/state.rs
//!
//! Defines the engine's shared state.

use lecture_assistant_core::ports::{LectureAnalysisService, ResponseDelayService};
use std::sync::Arc;

//=========================================================================================
// AppState (Shared Across Pipeline and Sessions)
//=========================================================================================

/// The shared application state, created once at startup and passed to the
/// pipeline and every conversation session. Timing configuration lives in
/// the adapters, which bake their delays in at construction.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn LectureAnalysisService>,
    pub delay: Arc<dyn ResponseDelayService>,
}

impl AppState {
    pub fn new(
        analyzer: Arc<dyn LectureAnalysisService>,
        delay: Arc<dyn ResponseDelayService>,
    ) -> Self {
        Self { analyzer, delay }
    }
}
