//! Domain Layer
//!
//! Contains all domain entities, scoring rules, and the stored-shape
//! normalization that upgrades old persisted blobs on read.

mod assessment;
mod chat;
mod client;
mod client_info;
mod deliverable;
mod entity;
mod journey;
mod normalize;
mod pillar;
mod plan;
mod user;

pub use assessment::{Assessment, PillarScore};
pub use chat::{AnswerSize, ChatMessage, ChatRole, ChatSession, Tone};
pub use client::Client;
pub use client_info::{
    default_client_info, Attachment, ClientInfo, ClientInfoQuestion, ClientInfoSection,
    SectionId,
};
pub use deliverable::Deliverable;
pub use entity::{new_id, now_millis, DomainError, DomainResult, Entity};
pub use journey::{Action, Initiative, Journey, KeyResult, Objective};
pub use normalize::{normalize_assessment, normalize_client, normalize_client_info};
pub use pillar::{overall_maturity, pillar_score, Pillar, RESPONSES_PER_PILLAR};
pub use plan::{
    next_monday, next_plan_start, CardStatus, KanbanCard, KanbanCardDraft, WeeklyPlan,
};
pub use user::{Role, User, View, DEFAULT_CLIENT_VIEWS};
