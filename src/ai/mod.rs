//! Generative-Text Collaborator
//!
//! Three narrow text tasks behind a swappable generator. Failures
//! never escape this module: each task carries a fixed fallback string
//! so the surrounding flow always gets something renderable.

mod gemini;
pub mod prompts;

pub use gemini::{GeminiClient, GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::{AnswerSize, Client, Deliverable, DomainResult, Pillar, PillarScore, Tone};

/// Served when the executive summary cannot be generated.
pub const SUMMARY_FALLBACK: &str =
    "The executive summary could not be generated right now. Please try again later.";
/// Served when a chat answer cannot be generated.
pub const CHAT_FALLBACK: &str =
    "I could not reach the assistant just now. Please ask again in a moment.";
/// Served when an assessment note cannot be generated.
pub const NOTE_FALLBACK: &str = "No strategic note could be generated for this assessment.";

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> DomainResult<String>;
}

/// The three generation tasks over any [`TextGenerator`].
pub struct Assistant<G> {
    generator: G,
}

impl<G: TextGenerator> Assistant<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Executive summary of a client's assessment history.
    pub async fn executive_summary(&self, client: &Client) -> String {
        let prompt = prompts::executive_summary(client);
        self.ask(&prompt, SUMMARY_FALLBACK, "executive summary").await
    }

    /// Answer grounded on the selected deliverables.
    pub async fn chat_answer(
        &self,
        question: &str,
        sources: &[Deliverable],
        tone: Tone,
        size: AnswerSize,
        orientation: &str,
    ) -> String {
        let prompt = prompts::chat_answer(question, sources, tone, size, orientation);
        self.ask(&prompt, CHAT_FALLBACK, "chat answer").await
    }

    /// Short strategic note for one full score set.
    pub async fn assessment_note(&self, scores: &BTreeMap<Pillar, PillarScore>) -> String {
        let prompt = prompts::assessment_note(scores);
        self.ask(&prompt, NOTE_FALLBACK, "assessment note").await
    }

    async fn ask(&self, prompt: &str, fallback: &str, task: &str) -> String {
        match self.generator.generate(prompt).await {
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(task, error = %error, "text generation failed, serving fallback");
                fallback.to_string()
            }
        }
    }
}
