//! Session
//!
//! Sign-in, sign-out and the active-client selection. Username
//! matching is case-insensitive, passwords are compared exactly. A
//! failed login returns `Ok(None)` and leaves the session untouched;
//! only storage trouble surfaces as an error.

use super::AppStore;
use crate::domain::{DomainResult, Role, User, View};

impl AppStore {
    /// Authenticate and install the user in the session. Admins who
    /// have never picked a client get the first one selected for them.
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<Option<User>> {
        let matched = {
            let users = self.users.read().await;
            users
                .iter()
                .find(|u| {
                    u.username.to_lowercase() == username.to_lowercase() && u.password == password
                })
                .cloned()
        };
        let user = match matched {
            Some(user) => user,
            None => {
                tracing::info!(username, "login rejected");
                return Ok(None);
            }
        };

        let mut session = self.session_snapshot().await;
        session.current_user = Some(user.clone());
        if user.role == Role::Admin && session.active_client_id.is_none() {
            session.active_client_id = self.clients.read().await.first().map(|c| c.id.clone());
        }
        self.commit_session(session).await?;

        tracing::info!(username = %user.username, role = ?user.role, "login accepted");
        Ok(Some(user))
    }

    /// Clear the signed-in user. The active-client selection survives
    /// so the next sign-in resumes where the last one left off.
    pub async fn logout(&self) -> DomainResult<()> {
        let mut session = self.session_snapshot().await;
        session.current_user = None;
        self.commit_session(session).await
    }

    pub async fn current_user(&self) -> Option<User> {
        self.session.read().await.current_user.clone()
    }

    /// Point the session at another client. Unknown ids are ignored.
    pub async fn set_active_client(&self, client_id: &str) -> DomainResult<()> {
        let exists = self.clients.read().await.iter().any(|c| c.id == client_id);
        if !exists {
            return Ok(());
        }
        let mut session = self.session_snapshot().await;
        session.active_client_id = Some(client_id.to_string());
        self.commit_session(session).await
    }

    /// Whether the signed-in user may open the given view. Nobody
    /// signed in means nothing is accessible.
    pub async fn can_access(&self, view: View) -> bool {
        self.session
            .read()
            .await
            .current_user
            .as_ref()
            .map(|u| u.can_access(view))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_util::seeded_store;

    #[tokio::test]
    async fn test_login_selects_the_first_client_for_admins() {
        let store = seeded_store().await;

        let user = store.login("admin", "master").await.unwrap();

        assert!(user.is_some());
        assert_eq!(user.unwrap().role, Role::Admin);
        let clients = store.clients().await;
        assert_eq!(store.active_client_id().await, Some(clients[0].id.clone()));
    }

    #[tokio::test]
    async fn test_login_username_is_case_insensitive() {
        let store = seeded_store().await;

        let user = store.login("ADMIN", "master").await.unwrap();

        assert!(user.is_some());
    }

    #[tokio::test]
    async fn test_login_password_is_not() {
        let store = seeded_store().await;

        let user = store.login("admin", "MASTER").await.unwrap();

        assert!(user.is_none());
        assert!(store.current_user().await.is_none());
    }

    #[tokio::test]
    async fn test_failed_login_leaves_the_session_alone() {
        let store = seeded_store().await;
        store.login("admin", "master").await.unwrap();

        let rejected = store.login("admin", "wrong").await.unwrap();

        assert!(rejected.is_none());
        assert_eq!(store.current_user().await.unwrap().username, "admin");
    }

    #[tokio::test]
    async fn test_logout_keeps_the_active_client() {
        let store = seeded_store().await;
        store.login("admin", "master").await.unwrap();
        let active = store.active_client_id().await;
        assert!(active.is_some());

        store.logout().await.unwrap();

        assert!(store.current_user().await.is_none());
        assert_eq!(store.active_client_id().await, active);
    }

    #[tokio::test]
    async fn test_set_active_client_ignores_unknown_ids() {
        let store = seeded_store().await;
        store.login("admin", "master").await.unwrap();
        let active = store.active_client_id().await;

        store.set_active_client("no-such-client").await.unwrap();

        assert_eq!(store.active_client_id().await, active);
    }

    #[tokio::test]
    async fn test_view_access_follows_the_role() {
        let store = seeded_store().await;

        assert!(!store.can_access(View::Users).await);

        store.login("client", "client123").await.unwrap();
        assert!(store.can_access(View::Dashboard).await);
        assert!(!store.can_access(View::Users).await);

        store.login("admin", "master").await.unwrap();
        assert!(store.can_access(View::Users).await);
    }
}
