//! Deliverable Operations

use super::{map_by_id, remove_by_id, AppStore};
use crate::domain::{Deliverable, DomainResult};

impl AppStore {
    /// Prepend a deliverable; the list reads newest-first.
    pub async fn add_deliverable(
        &self,
        client_id: &str,
        name: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
    ) -> DomainResult<()> {
        let deliverable = Deliverable::new(name, description, content);
        self.update_clients(|clients| {
            map_by_id(clients, client_id, |client| {
                let mut client = client.clone();
                client.deliverables.insert(0, deliverable);
                client
            })
        })
        .await
    }

    pub async fn delete_deliverable(
        &self,
        client_id: &str,
        deliverable_id: &str,
    ) -> DomainResult<()> {
        self.update_clients(|clients| {
            map_by_id(clients, client_id, |client| {
                let mut client = client.clone();
                client.deliverables = remove_by_id(&client.deliverables, deliverable_id);
                client
            })
        })
        .await
    }
}
