//! Chat Session Entities
//!
//! Per-client conversations with the assistant, grounded on selected
//! deliverables and shaped by tone/size/orientation parameters.

use serde::{Deserialize, Serialize};

use super::entity::{new_id, now_millis, Entity};

/// Voice the assistant answers in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Formal,
    Casual,
    Technical,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Casual => "casual",
            Tone::Technical => "technical",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "formal" => Some(Tone::Formal),
            "casual" => Some(Tone::Casual),
            "technical" => Some(Tone::Technical),
            _ => None,
        }
    }
}

/// How long answers should run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnswerSize {
    Short,
    #[default]
    Medium,
    Long,
}

impl AnswerSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerSize::Short => "short",
            AnswerSize::Medium => "medium",
            AnswerSize::Long => "long",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "short" => Some(AnswerSize::Short),
            "medium" => Some(AnswerSize::Medium),
            "long" => Some(AnswerSize::Long),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    #[default]
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    /// Epoch milliseconds
    pub date: i64,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            date: now_millis(),
        }
    }
}

/// One conversation thread owned by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub size: AnswerSize,
    /// Free-form steering instructions appended to every prompt
    #[serde(default)]
    pub orientation: String,
    /// Deliverable ids the assistant may quote from
    #[serde(default)]
    pub source_ids: Vec<String>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: new_id(),
            title: "new conversation".to_string(),
            messages: Vec::new(),
            tone: Tone::default(),
            size: AnswerSize::default(),
            orientation: String::new(),
            source_ids: Vec::new(),
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for ChatSession {
    fn id(&self) -> &str {
        &self.id
    }
}
