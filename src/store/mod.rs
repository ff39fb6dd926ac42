//! Store Layer
//!
//! Central application state and the update engine over it. Every
//! mutation follows the same discipline: build the next snapshot under
//! the write lock, persist it, then swap it into memory. A failed
//! persist leaves memory untouched, so readers never observe state
//! that is not on disk.

mod assessment_ops;
mod chat_ops;
mod client_info_ops;
mod client_ops;
mod deliverable_ops;
mod journey_ops;
mod plan_ops;
mod session_ops;
mod user_ops;

use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{Client, DomainResult, Entity, User};
use crate::repository::{KeyValueStore, SqliteStore, StateRepository};
use crate::seed;

/// Who is signed in and which client the views point at
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub current_user: Option<User>,
    pub active_client_id: Option<String>,
}

/// Application state holder
///
/// Owns the client and user collections plus the session, all behind
/// their own locks. Constructed once at startup and shared by handle.
pub struct AppStore {
    repo: StateRepository,
    clients: RwLock<Vec<Client>>,
    users: RwLock<Vec<User>>,
    session: RwLock<Session>,
}

impl AppStore {
    /// Open over a database file, creating it on first run.
    pub async fn open(db_path: &Path) -> DomainResult<Self> {
        let store = SqliteStore::open(db_path)?;
        Self::with_store(Arc::new(store)).await
    }

    /// Open over a fresh in-memory database.
    pub async fn open_in_memory() -> DomainResult<Self> {
        let store = SqliteStore::open_in_memory()?;
        Self::with_store(Arc::new(store)).await
    }

    /// Build the store over any persistence backend.
    ///
    /// Absent or unreadable blobs fall back to the built-in seed data,
    /// which is written back immediately so the next start is a plain
    /// load. Session pointers are validated against the loaded
    /// collections; a stale pointer degrades to "no selection".
    pub async fn with_store(store: Arc<dyn KeyValueStore>) -> DomainResult<Self> {
        let repo = StateRepository::new(store);

        let clients = match repo.load_clients().await? {
            Some(clients) => clients,
            None => {
                tracing::info!("no stored clients, seeding demo data");
                let clients = seed::demo_clients();
                repo.save_clients(&clients).await?;
                clients
            }
        };

        let users = match repo.load_users().await? {
            Some(users) => users,
            None => {
                tracing::info!("no stored users, seeding default accounts");
                let users = seed::default_users();
                repo.save_users(&users).await?;
                users
            }
        };

        let current_user = match repo.load_current_user_id().await? {
            Some(id) => users.iter().find(|u| u.id == id).cloned(),
            None => None,
        };

        let active_client_id = repo
            .load_active_client_id()
            .await?
            .filter(|id| clients.iter().any(|c| c.id == *id))
            .or_else(|| clients.first().map(|c| c.id.clone()));

        Ok(Self {
            repo,
            clients: RwLock::new(clients),
            users: RwLock::new(users),
            session: RwLock::new(Session {
                current_user,
                active_client_id,
            }),
        })
    }

    /// Write both session pointers, the teardown flush.
    ///
    /// Collection blobs are persisted inside every mutation already;
    /// only the pointers can drift between commits.
    pub async fn flush(&self) -> DomainResult<()> {
        let session = self.session.read().await.clone();
        self.repo
            .save_current_user_id(session.current_user.as_ref().map(|u| u.id.as_str()))
            .await?;
        self.repo
            .save_active_client_id(session.active_client_id.as_deref())
            .await?;
        Ok(())
    }

    /// Commit one mutation of the client collection.
    pub(crate) async fn update_clients<F>(&self, f: F) -> DomainResult<()>
    where
        F: FnOnce(&[Client]) -> Vec<Client>,
    {
        let mut guard = self.clients.write().await;
        let next = f(&guard);
        self.repo.save_clients(&next).await?;
        *guard = next;
        Ok(())
    }

    /// Commit one mutation of the client collection, handing a value back.
    pub(crate) async fn update_clients_returning<T, F>(&self, f: F) -> DomainResult<T>
    where
        F: FnOnce(&[Client]) -> (Vec<Client>, T),
    {
        let mut guard = self.clients.write().await;
        let (next, out) = f(&guard);
        self.repo.save_clients(&next).await?;
        *guard = next;
        Ok(out)
    }

    /// Commit one mutation of the user collection. The closure may
    /// refuse with a validation error before anything is written.
    pub(crate) async fn update_users<F>(&self, f: F) -> DomainResult<()>
    where
        F: FnOnce(&[User]) -> DomainResult<Vec<User>>,
    {
        let mut guard = self.users.write().await;
        let next = f(&guard)?;
        self.repo.save_users(&next).await?;
        *guard = next;
        Ok(())
    }

    /// Commit a new session, persisting both pointers first.
    pub(crate) async fn commit_session(&self, next: Session) -> DomainResult<()> {
        let mut guard = self.session.write().await;
        self.repo
            .save_current_user_id(next.current_user.as_ref().map(|u| u.id.as_str()))
            .await?;
        self.repo
            .save_active_client_id(next.active_client_id.as_deref())
            .await?;
        *guard = next;
        Ok(())
    }

    pub(crate) async fn session_snapshot(&self) -> Session {
        self.session.read().await.clone()
    }
}

/// Rebuild a collection with the matching entity replaced by `f`'s
/// output. A non-matching id leaves every element untouched, which
/// makes every tree operation a silent no-op on a bad path.
pub(crate) fn map_by_id<T, F>(items: &[T], id: &str, f: F) -> Vec<T>
where
    T: Entity,
    F: FnOnce(&T) -> T,
{
    let mut f = Some(f);
    items
        .iter()
        .map(|item| {
            if item.id() == id {
                if let Some(f) = f.take() {
                    return f(item);
                }
            }
            item.clone()
        })
        .collect()
}

/// Rebuild a collection without the matching entity.
pub(crate) fn remove_by_id<T: Entity>(items: &[T], id: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.id() != id)
        .cloned()
        .collect()
}


#[cfg(test)]
mod tests {
    use super::test_util::{empty_store, seeded_store};
    use super::*;
    use crate::domain::Role;

    #[derive(Debug, Clone, PartialEq)]
    struct Node {
        id: String,
        value: u32,
    }

    impl Entity for Node {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn nodes() -> Vec<Node> {
        vec![
            Node { id: "a".to_string(), value: 1 },
            Node { id: "b".to_string(), value: 2 },
            Node { id: "c".to_string(), value: 3 },
        ]
    }

    #[test]
    fn test_map_by_id_replaces_only_the_match() {
        let mapped = map_by_id(&nodes(), "b", |n| Node {
            id: n.id.clone(),
            value: 20,
        });
        assert_eq!(mapped[0].value, 1);
        assert_eq!(mapped[1].value, 20);
        assert_eq!(mapped[2].value, 3);
    }

    #[test]
    fn test_map_by_id_missing_id_is_a_no_op() {
        let original = nodes();
        let mapped = map_by_id(&original, "zzz", |n| Node {
            id: n.id.clone(),
            value: 99,
        });
        assert_eq!(mapped, original);
    }

    #[test]
    fn test_remove_by_id() {
        let removed = remove_by_id(&nodes(), "a");
        assert_eq!(removed.len(), 2);
        assert!(removed.iter().all(|n| n.id != "a"));

        let untouched = remove_by_id(&nodes(), "zzz");
        assert_eq!(untouched.len(), 3);
    }

    #[tokio::test]
    async fn test_first_run_seeds_and_persists() {
        let store = seeded_store().await;
        let clients = store.clients().await;
        let users = store.users().await;
        assert!(!clients.is_empty());
        assert!(users.iter().any(|u| u.role == Role::Admin));
    }

    #[tokio::test]
    async fn test_empty_blob_does_not_reseed() {
        let store = empty_store().await;
        assert!(store.clients().await.is_empty());
        assert!(store.users().await.is_empty());
    }

    #[tokio::test]
    async fn test_state_survives_reopen_over_same_backend() {
        let backend = Arc::new(SqliteStore::open_in_memory().expect("Failed to open store"));

        {
            let store = AppStore::with_store(backend.clone())
                .await
                .expect("Failed to open store");
            store.add_client("Reopened Industries").await.unwrap();
        }

        let store = AppStore::with_store(backend).await.expect("Failed to open store");
        let clients = store.clients().await;
        assert!(clients.iter().any(|c| c.name == "Reopened Industries"));
    }

    #[tokio::test]
    async fn test_corrupt_clients_blob_falls_back_to_seed() {
        let backend = Arc::new(SqliteStore::open_in_memory().expect("Failed to open store"));
        backend.set("clients", "{broken").await.unwrap();

        let store = AppStore::with_store(backend).await.expect("Failed to open store");
        assert!(!store.clients().await.is_empty());
    }

    #[tokio::test]
    async fn test_stale_active_pointer_degrades_to_first_client() {
        let backend = Arc::new(SqliteStore::open_in_memory().expect("Failed to open store"));
        backend.set("activeClientId", "no-such-client").await.unwrap();

        let store = AppStore::with_store(backend).await.expect("Failed to open store");
        let first = store.clients().await[0].id.clone();
        assert_eq!(store.active_client_id().await, Some(first));
    }

    #[tokio::test]
    async fn test_flush_writes_session_pointers() {
        let backend = Arc::new(SqliteStore::open_in_memory().expect("Failed to open store"));
        let store = AppStore::with_store(backend.clone())
            .await
            .expect("Failed to open store");

        store.login("admin", "master").await.unwrap();
        store.flush().await.unwrap();

        let user_id = backend.get("currentUserId").await.unwrap();
        assert!(user_id.is_some());
    }
}
