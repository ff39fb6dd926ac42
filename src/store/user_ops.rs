//! User Administration
//!
//! Account management, admin-only in the UI. Validation failures are
//! explicit errors here, unlike the silent no-ops of the tree
//! operations: a duplicate username or a client user without a client
//! is refused before anything is written.

use std::collections::BTreeSet;

use super::{map_by_id, remove_by_id, AppStore};
use crate::domain::{DomainError, DomainResult, Role, User, View};

impl AppStore {
    /// Cloned snapshot of every account.
    pub async fn users(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    pub async fn add_user(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
        role: Role,
        client_id: Option<String>,
        accessible_views: Option<BTreeSet<View>>,
    ) -> DomainResult<()> {
        if role == Role::Client && client_id.is_none() {
            return Err(DomainError::InvalidInput(
                "Client users need an assigned client".to_string(),
            ));
        }

        let mut user = User::new(username, password, role, client_id);
        user.accessible_views = accessible_views;

        self.update_users(|users| {
            let taken = users
                .iter()
                .any(|u| u.username.to_lowercase() == user.username.to_lowercase());
            if taken {
                return Err(DomainError::Conflict(format!(
                    "Username '{}' already exists",
                    user.username
                )));
            }
            let mut next = users.to_vec();
            next.push(user);
            Ok(next)
        })
        .await
    }

    /// Partial merge of account fields. Editing an unknown id is a
    /// no-op; editing into a taken username or an unassigned client
    /// user is refused.
    pub async fn update_user(
        &self,
        user_id: &str,
        username: Option<String>,
        password: Option<String>,
        role: Option<Role>,
        client_id: Option<String>,
        accessible_views: Option<BTreeSet<View>>,
    ) -> DomainResult<()> {
        self.update_users(|users| {
            let existing = match users.iter().find(|u| u.id == user_id) {
                Some(user) => user,
                None => return Ok(users.to_vec()),
            };

            let merged = User {
                id: existing.id.clone(),
                username: username.unwrap_or_else(|| existing.username.clone()),
                password: password.unwrap_or_else(|| existing.password.clone()),
                role: role.unwrap_or(existing.role),
                client_id: client_id.or_else(|| existing.client_id.clone()),
                accessible_views: accessible_views.or_else(|| existing.accessible_views.clone()),
            };

            let taken = users.iter().any(|u| {
                u.id != user_id && u.username.to_lowercase() == merged.username.to_lowercase()
            });
            if taken {
                return Err(DomainError::Conflict(format!(
                    "Username '{}' already exists",
                    merged.username
                )));
            }
            if merged.role == Role::Client && merged.client_id.is_none() {
                return Err(DomainError::InvalidInput(
                    "Client users need an assigned client".to_string(),
                ));
            }

            Ok(map_by_id(users, user_id, |_| merged))
        })
        .await?;

        // keep the signed-in snapshot in step with its account
        let mut session = self.session_snapshot().await;
        let edited_self = session
            .current_user
            .as_ref()
            .map(|u| u.id == user_id)
            .unwrap_or(false);
        if edited_self {
            session.current_user = self.users.read().await.iter().find(|u| u.id == user_id).cloned();
            self.commit_session(session).await?;
        }
        Ok(())
    }

    /// Remove an account. Deleting the signed-in user logs out.
    pub async fn delete_user(&self, user_id: &str) -> DomainResult<()> {
        self.update_users(|users| Ok(remove_by_id(users, user_id))).await?;

        let mut session = self.session_snapshot().await;
        let deleted_self = session
            .current_user
            .as_ref()
            .map(|u| u.id == user_id)
            .unwrap_or(false);
        if deleted_self {
            session.current_user = None;
            self.commit_session(session).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_util::{empty_store, seeded_store};

    #[tokio::test]
    async fn test_add_user() {
        let store = empty_store().await;

        store
            .add_user("dana", "pw1", Role::Admin, None, None)
            .await
            .unwrap();

        let users = store.users().await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "dana");
    }

    #[tokio::test]
    async fn test_duplicate_username_differs_only_in_case() {
        let store = empty_store().await;
        store
            .add_user("Dana", "pw1", Role::Admin, None, None)
            .await
            .unwrap();

        let result = store.add_user("dana", "pw2", Role::Admin, None, None).await;

        assert!(matches!(result, Err(DomainError::Conflict(_))));
        assert_eq!(store.users().await.len(), 1);
    }

    #[tokio::test]
    async fn test_client_user_without_client_is_refused() {
        let store = empty_store().await;

        let result = store.add_user("viewer", "pw", Role::Client, None, None).await;

        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
        assert!(store.users().await.is_empty());
    }

    #[tokio::test]
    async fn test_update_user_merges_and_checks_collisions() {
        let store = empty_store().await;
        store.add_user("dana", "pw1", Role::Admin, None, None).await.unwrap();
        store.add_user("erin", "pw2", Role::Admin, None, None).await.unwrap();
        let erin_id = store.users().await[1].id.clone();

        let collision = store
            .update_user(&erin_id, Some("DANA".to_string()), None, None, None, None)
            .await;
        assert!(matches!(collision, Err(DomainError::Conflict(_))));

        store
            .update_user(&erin_id, None, Some("rotated".to_string()), None, None, None)
            .await
            .unwrap();
        let erin = store.users().await[1].clone();
        assert_eq!(erin.username, "erin");
        assert_eq!(erin.password, "rotated");
    }

    #[tokio::test]
    async fn test_update_unknown_user_is_a_no_op() {
        let store = empty_store().await;
        store.add_user("dana", "pw1", Role::Admin, None, None).await.unwrap();

        store
            .update_user("missing", Some("ghost".to_string()), None, None, None, None)
            .await
            .unwrap();

        assert_eq!(store.users().await[0].username, "dana");
    }

    #[tokio::test]
    async fn test_deleting_the_signed_in_user_logs_out() {
        let store = seeded_store().await;
        let admin = store.login("admin", "master").await.unwrap().unwrap();

        store.delete_user(&admin.id).await.unwrap();

        assert!(store.current_user().await.is_none());
        assert!(store.users().await.iter().all(|u| u.id != admin.id));
    }

    #[tokio::test]
    async fn test_editing_own_account_refreshes_the_session() {
        let store = seeded_store().await;
        let admin = store.login("admin", "master").await.unwrap().unwrap();

        store
            .update_user(&admin.id, Some("root".to_string()), None, None, None, None)
            .await
            .unwrap();

        let current = store.current_user().await.unwrap();
        assert_eq!(current.username, "root");
    }
}
