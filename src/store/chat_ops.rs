//! Chat Session Operations
//!
//! Conversations with the generative collaborator, stored on the
//! client. `add_chat_session` is the one mutation that returns its
//! created entity: the caller needs the fresh id to route follow-up
//! messages immediately.

use super::{map_by_id, remove_by_id, AppStore};
use crate::domain::{
    AnswerSize, ChatMessage, ChatRole, ChatSession, DomainResult, Tone,
};

impl AppStore {
    /// Create a session with defaults. Returns `None` when no client
    /// matches, mirroring the silent no-op rule.
    pub async fn add_chat_session(&self, client_id: &str) -> DomainResult<Option<ChatSession>> {
        let session = ChatSession::new();
        self.update_clients_returning(|clients| {
            if !clients.iter().any(|c| c.id == client_id) {
                return (clients.to_vec(), None);
            }
            let next = map_by_id(clients, client_id, |client| {
                let mut client = client.clone();
                client.chat_sessions.push(session.clone());
                client
            });
            (next, Some(session))
        })
        .await
    }

    /// Partial merge of session fields, replacing whole collections
    /// when given.
    pub async fn update_chat_session(
        &self,
        client_id: &str,
        session_id: &str,
        title: Option<String>,
        messages: Option<Vec<ChatMessage>>,
        tone: Option<Tone>,
        size: Option<AnswerSize>,
        orientation: Option<String>,
        source_ids: Option<Vec<String>>,
    ) -> DomainResult<()> {
        self.update_clients(|clients| {
            map_by_id(clients, client_id, |client| {
                let mut client = client.clone();
                client.chat_sessions =
                    map_by_id(&client.chat_sessions, session_id, |existing| ChatSession {
                        id: existing.id.clone(),
                        title: title.unwrap_or_else(|| existing.title.clone()),
                        messages: messages.unwrap_or_else(|| existing.messages.clone()),
                        tone: tone.unwrap_or(existing.tone),
                        size: size.unwrap_or(existing.size),
                        orientation: orientation.unwrap_or_else(|| existing.orientation.clone()),
                        source_ids: source_ids.unwrap_or_else(|| existing.source_ids.clone()),
                    });
                client
            })
        })
        .await
    }

    /// Append one message to a session transcript.
    pub async fn append_chat_message(
        &self,
        client_id: &str,
        session_id: &str,
        role: ChatRole,
        text: impl Into<String>,
    ) -> DomainResult<()> {
        let message = ChatMessage::new(role, text);
        self.update_clients(|clients| {
            map_by_id(clients, client_id, |client| {
                let mut client = client.clone();
                client.chat_sessions = map_by_id(&client.chat_sessions, session_id, |session| {
                    let mut session = session.clone();
                    session.messages.push(message);
                    session
                });
                client
            })
        })
        .await
    }

    pub async fn delete_chat_session(&self, client_id: &str, session_id: &str) -> DomainResult<()> {
        self.update_clients(|clients| {
            map_by_id(clients, client_id, |client| {
                let mut client = client.clone();
                client.chat_sessions = remove_by_id(&client.chat_sessions, session_id);
                client
            })
        })
        .await
    }
}
