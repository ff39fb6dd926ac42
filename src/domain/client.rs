//! Client Aggregate
//!
//! One client holds every per-engagement collection: assessments,
//! deliverables, weekly plans, journeys, chat sessions, and the
//! structured intake questionnaire.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::assessment::Assessment;
use super::chat::ChatSession;
use super::client_info::{default_client_info, ClientInfo};
use super::deliverable::Deliverable;
use super::entity::{new_id, Entity};
use super::journey::Journey;
use super::plan::WeeklyPlan;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    /// Data URL produced by the logo upload path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub onboarding_date: NaiveDate,
    /// Consultant-facing summary text, generated or hand-written
    #[serde(default)]
    pub diagnostic_summary: String,
    #[serde(default)]
    pub assessments: Vec<Assessment>,
    #[serde(default)]
    pub deliverables: Vec<Deliverable>,
    #[serde(default)]
    pub weekly_plans: Vec<WeeklyPlan>,
    #[serde(default)]
    pub journeys: Vec<Journey>,
    #[serde(default)]
    pub chat_sessions: Vec<ChatSession>,
    #[serde(default)]
    pub client_info: ClientInfo,
}

impl Client {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            logo_url: None,
            onboarding_date: Utc::now().date_naive(),
            diagnostic_summary: String::new(),
            assessments: Vec::new(),
            deliverables: Vec::new(),
            weekly_plans: Vec::new(),
            journeys: Vec::new(),
            chat_sessions: Vec::new(),
            client_info: default_client_info(),
        }
    }
}

impl Entity for Client {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client_info::SectionId;

    #[test]
    fn test_new_client_starts_with_full_questionnaire() {
        let client = Client::new("Acme");
        assert_eq!(client.client_info.len(), SectionId::ALL.len());
        assert!(client.assessments.is_empty());
        assert!(client.journeys.is_empty());
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let json = r#"{
            "id": "c1",
            "name": "Acme",
            "onboardingDate": "2026-01-05"
        }"#;
        let client: Client = serde_json::from_str(json).unwrap();
        assert!(client.deliverables.is_empty());
        assert!(client.weekly_plans.is_empty());
        assert!(client.chat_sessions.is_empty());
        assert!(client.client_info.is_empty());
        assert!(client.logo_url.is_none());
        assert_eq!(client.diagnostic_summary, "");
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let client = Client::new("Acme");
        let json = serde_json::to_value(&client).unwrap();
        assert!(json.get("onboardingDate").is_some());
        assert!(json.get("weeklyPlans").is_some());
        assert!(json.get("chatSessions").is_some());
        assert!(json.get("clientInfo").is_some());
    }
}
