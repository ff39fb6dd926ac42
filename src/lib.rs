//! Pillar-Track Backend
//!
//! State engine for a commercial-maturity consulting dashboard.
//! Layered architecture:
//! - domain: Core entities, scoring rules and stored-shape normalization
//! - repository: Key-value blob persistence over SQLite
//! - store: The update engine, session and seed bootstrap
//! - ai: Generative-text collaborator (Gemini or any stub)
//! - files: Attachment encoding and data URLs

pub mod ai;
pub mod domain;
pub mod files;
pub mod logging;
pub mod repository;
pub mod seed;
pub mod store;

pub use ai::{Assistant, GeminiClient, GeminiConfig, TextGenerator};
pub use domain::{DomainError, DomainResult};
pub use repository::{KeyValueStore, SqliteStore, StateRepository};
pub use store::AppStore;
