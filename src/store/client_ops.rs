//! Client Operations
//!
//! CRUD over the client collection plus the normalized read
//! projections the views consume.

use chrono::NaiveDate;

use super::{map_by_id, remove_by_id, AppStore};
use crate::domain::{normalize_client, Client, DomainResult, Role};

impl AppStore {
    /// Create a client with a fresh default questionnaire and make it
    /// the active selection.
    pub async fn add_client(&self, name: impl Into<String>) -> DomainResult<()> {
        let client = Client::new(name);
        let client_id = client.id.clone();

        self.update_clients(|clients| {
            let mut next = clients.to_vec();
            next.push(client);
            next
        })
        .await?;

        let mut session = self.session_snapshot().await;
        session.active_client_id = Some(client_id);
        self.commit_session(session).await
    }

    /// Shallow merge of top-level fields. Absent params keep the stored value.
    pub async fn update_client(
        &self,
        client_id: &str,
        name: Option<String>,
        logo_url: Option<String>,
        onboarding_date: Option<NaiveDate>,
        diagnostic_summary: Option<String>,
    ) -> DomainResult<()> {
        self.update_clients(|clients| {
            map_by_id(clients, client_id, |existing| Client {
                id: existing.id.clone(),
                name: name.unwrap_or_else(|| existing.name.clone()),
                logo_url: logo_url.or_else(|| existing.logo_url.clone()),
                onboarding_date: onboarding_date.unwrap_or(existing.onboarding_date),
                diagnostic_summary: diagnostic_summary
                    .unwrap_or_else(|| existing.diagnostic_summary.clone()),
                assessments: existing.assessments.clone(),
                deliverables: existing.deliverables.clone(),
                weekly_plans: existing.weekly_plans.clone(),
                journeys: existing.journeys.clone(),
                chat_sessions: existing.chat_sessions.clone(),
                client_info: existing.client_info.clone(),
            })
        })
        .await
    }

    /// Remove a client. When it was the active one, selection falls
    /// back to the first remaining client, or to none.
    pub async fn delete_client(&self, client_id: &str) -> DomainResult<()> {
        let fallback = self
            .update_clients_returning(|clients| {
                let next = remove_by_id(clients, client_id);
                let first = next.first().map(|c| c.id.clone());
                (next, first)
            })
            .await?;

        let mut session = self.session_snapshot().await;
        if session.active_client_id.as_deref() == Some(client_id) {
            session.active_client_id = fallback;
            self.commit_session(session).await?;
        }
        Ok(())
    }

    /// Cloned, normalized snapshot of every client.
    pub async fn clients(&self) -> Vec<Client> {
        self.clients.read().await.iter().map(normalize_client).collect()
    }

    /// One client by id, normalized.
    pub async fn client(&self, client_id: &str) -> Option<Client> {
        self.clients
            .read()
            .await
            .iter()
            .find(|c| c.id == client_id)
            .map(normalize_client)
    }

    pub async fn active_client_id(&self) -> Option<String> {
        self.session.read().await.active_client_id.clone()
    }

    /// Resolve the client the session points at, normalized.
    ///
    /// A client-role user is always scoped to their own client; when
    /// that client no longer exists the session cannot stand and the
    /// user is logged out implicitly.
    pub async fn active_client(&self) -> DomainResult<Option<Client>> {
        let session = self.session_snapshot().await;

        if let Some(user) = &session.current_user {
            if user.role == Role::Client {
                let scoped = {
                    let clients = self.clients.read().await;
                    user.client_id
                        .as_ref()
                        .and_then(|id| clients.iter().find(|c| c.id == *id).map(normalize_client))
                };
                return match scoped {
                    Some(client) => Ok(Some(client)),
                    None => {
                        tracing::warn!(
                            username = %user.username,
                            "client user points at a missing client, logging out"
                        );
                        self.logout().await?;
                        Ok(None)
                    }
                };
            }
        }

        let clients = self.clients.read().await;
        Ok(session
            .active_client_id
            .as_ref()
            .and_then(|id| clients.iter().find(|c| c.id == *id).map(normalize_client)))
    }
}
