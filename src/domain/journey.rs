//! Journey Hierarchy Entities
//!
//! OKR-style tree, five levels deep:
//! Journey -> Objective -> KeyResult -> Initiative -> Action.
//! Progress values are stored as entered; nothing rolls up from children.

use serde::{Deserialize, Serialize};

use super::entity::{new_id, Entity};

/// Leaf of the journey tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_completed: bool,
    /// Mirrors the existence of a kanban card referencing this action;
    /// maintained by the store's card operations
    #[serde(default)]
    pub is_in_kanban: bool,
}

impl Action {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            is_completed: false,
            is_in_kanban: false,
        }
    }
}

impl Entity for Action {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Initiative {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl Initiative {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            actions: Vec::new(),
        }
    }
}

impl Entity for Initiative {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyResult {
    pub id: String,
    pub name: String,
    /// 0-100, set explicitly by operations
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub initiatives: Vec<Initiative>,
}

impl KeyResult {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            progress: 0,
            initiatives: Vec::new(),
        }
    }
}

impl Entity for KeyResult {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub key_results: Vec<KeyResult>,
    #[serde(default)]
    pub progress: u8,
}

impl Objective {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            key_results: Vec::new(),
            progress: 0,
        }
    }
}

impl Entity for Objective {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Top-level strategic initiative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    pub id: String,
    pub name: String,
    /// Accent color (hex, e.g. "#2563EB")
    pub color: String,
    #[serde(default)]
    pub objectives: Vec<Objective>,
    #[serde(default)]
    pub progress: u8,
}

impl Journey {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            color: color.into(),
            objectives: Vec::new(),
            progress: 0,
        }
    }
}

impl Entity for Journey {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_action_flags_start_false() {
        let action = Action::new("Interview top sellers");
        assert!(!action.is_completed);
        assert!(!action.is_in_kanban);
    }

    #[test]
    fn test_journey_starts_empty() {
        let journey = Journey::new("Pricing overhaul", "#2563EB");
        assert!(journey.objectives.is_empty());
        assert_eq!(journey.progress, 0);
    }

    #[test]
    fn test_camel_case_wire_fields() {
        let action = Action::new("Draft playbook");
        let json = serde_json::to_value(&action).unwrap();
        assert!(json.get("isCompleted").is_some());
        assert!(json.get("isInKanban").is_some());
    }
}
