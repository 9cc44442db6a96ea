//! services/engine/src/adapters/analyzer.rs
//!
//! This module contains the adapters for the lecture analysis step.
//! They implement the `LectureAnalysisService` port from the `core` crate.
//!
//! There is no real speech-to-text or content analysis here: the simulated
//! adapter stands in for that backend behind the same contract a production
//! implementation would use.

use async_trait::async_trait;
use lecture_assistant_core::{
    domain::{Doubt, LectureAnalysis},
    ports::{LectureAnalysisService, PortError, PortResult},
};
use std::time::Duration;
use tracing::info;

//=========================================================================================
// The Simulated Analyzer
//=========================================================================================

/// An adapter that implements `LectureAnalysisService` by waiting out a
/// configured processing delay and returning a canned analysis.
#[derive(Clone)]
pub struct SimulatedAnalyzerAdapter {
    processing_delay: Duration,
}

impl SimulatedAnalyzerAdapter {
    /// Creates a new `SimulatedAnalyzerAdapter`.
    pub fn new(processing_delay: Duration) -> Self {
        Self { processing_delay }
    }
}

#[async_trait]
impl LectureAnalysisService for SimulatedAnalyzerAdapter {
    /// Simulates transcription and analysis of the uploaded video.
    async fn analyze_video(&self, title: &str) -> PortResult<LectureAnalysis> {
        info!("Simulated analysis started for lecture '{}'.", title);
        tokio::time::sleep(self.processing_delay).await;
        info!("Simulated analysis finished for lecture '{}'.", title);
        Ok(sample_analysis())
    }
}

/// The fixture analysis every simulated run produces: a transcript
/// placeholder, five structured notes, and two detected doubts (one
/// unanswered with resource suggestions, one resolved in-lecture).
fn sample_analysis() -> LectureAnalysis {
    LectureAnalysis {
        transcript: "Sample transcript content would be generated here from the uploaded \
                     video using speech-to-text technology."
            .to_string(),
        notes: vec![
            "Introduction to Neural Networks".to_string(),
            "Types of activation functions: ReLU, Sigmoid, Tanh".to_string(),
            "Backpropagation algorithm explanation".to_string(),
            "Gradient descent optimization techniques".to_string(),
            "Overfitting and regularization methods".to_string(),
        ],
        doubts: vec![
            Doubt {
                question: "What is the intuition behind backpropagation?".to_string(),
                timestamp: "15:30".to_string(),
                answered: false,
                suggestions: vec![
                    "Backpropagation Intuition - 3Blue1Brown".to_string(),
                    "Neural Network Training Explained".to_string(),
                    "Gradient Descent Visualization".to_string(),
                ],
            },
            Doubt {
                question: "How do we prevent overfitting?".to_string(),
                timestamp: "28:45".to_string(),
                answered: true,
                suggestions: vec![],
            },
        ],
    }
}

//=========================================================================================
// The Failing Analyzer
//=========================================================================================

/// An adapter that always fails, driving the `Processing -> Error` path.
#[derive(Clone)]
pub struct FailingAnalyzerAdapter {
    processing_delay: Duration,
}

impl FailingAnalyzerAdapter {
    pub fn new(processing_delay: Duration) -> Self {
        Self { processing_delay }
    }
}

#[async_trait]
impl LectureAnalysisService for FailingAnalyzerAdapter {
    async fn analyze_video(&self, title: &str) -> PortResult<LectureAnalysis> {
        tokio::time::sleep(self.processing_delay).await;
        Err(PortError::AnalysisFailed(format!(
            "Could not analyze lecture '{}'.",
            title
        )))
    }
}
