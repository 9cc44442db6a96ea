//! crates/lecture_assistant_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of specific external implementations. Both ports are
//! "completion sources": one-shot deferred operations that eventually produce
//! a result, standing in for real transcription/inference backends.

use crate::domain::LectureAnalysis;
use async_trait::async_trait;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors of whatever backs the port
/// (a real inference service, or the simulated stand-in).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Turns an uploaded lecture video into its derived artifacts.
///
/// The result is produced atomically: either a full [`LectureAnalysis`]
/// (transcript, notes and doubts together) or an error. There is no partial
/// progress reporting and no cancellation. A production implementation would
/// run real speech-to-text and content analysis here; the shipped adapter
/// simulates that work behind the same contract.
#[async_trait]
pub trait LectureAnalysisService: Send + Sync {
    async fn analyze_video(&self, title: &str) -> PortResult<LectureAnalysis>;
}

/// The conversational "thinking" pause inserted before each assistant reply.
///
/// Resolving this future is the session's only suspension point. Production
/// code uses a randomized bounded timer; tests substitute an immediate
/// completion to keep the classify/generate cycle deterministic.
#[async_trait]
pub trait ResponseDelayService: Send + Sync {
    async fn thinking_pause(&self);
}
