//! Deliverable Entity
//!
//! A piece of consulting output (report, playbook, analysis) handed to
//! the client. Stored newest-first.

use serde::{Deserialize, Serialize};

use super::entity::{new_id, Entity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deliverable {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Free text / markdown body
    pub content: String,
}

impl Deliverable {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            description: description.into(),
            content: content.into(),
        }
    }
}

impl Entity for Deliverable {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deliverable_creation() {
        let deliverable = Deliverable::new("Q3 Diagnostic", "Scoring deep-dive", "# Findings");
        assert_eq!(deliverable.name, "Q3 Diagnostic");
        assert!(!deliverable.id().is_empty());
    }
}
