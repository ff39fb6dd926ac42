//! Built-in Seed Data
//!
//! First-run accounts and one demo client so every view has something
//! to render. Ids are fixed strings, not generated: the client user's
//! `client_id` must still resolve when users and clients are seeded
//! independently after a partial blob loss.

use std::collections::BTreeMap;

use crate::domain::{
    Action, Assessment, Client, Deliverable, Initiative, Journey, KeyResult, Objective, Pillar,
    PillarScore, Role, User,
};

pub const SEED_CLIENT_ID: &str = "client-1";
pub const SEED_ADMIN_ID: &str = "user-admin";
pub const SEED_CLIENT_USER_ID: &str = "user-client";

/// Default accounts: one consultant, one client viewer.
pub fn default_users() -> Vec<User> {
    let mut admin = User::new("admin", "master", Role::Admin, None);
    admin.id = SEED_ADMIN_ID.to_string();

    let mut viewer = User::new(
        "client",
        "client123",
        Role::Client,
        Some(SEED_CLIENT_ID.to_string()),
    );
    viewer.id = SEED_CLIENT_USER_ID.to_string();

    vec![admin, viewer]
}

/// One demo client with a first assessment, a deliverable, and a
/// starter journey.
pub fn demo_clients() -> Vec<Client> {
    let mut client = Client::new("Northwind Trading");
    client.id = SEED_CLIENT_ID.to_string();
    client.diagnostic_summary =
        "Early-stage commercial organization with strong founder-led sales and \
         little process codification."
            .to_string();

    client.assessments.push(Assessment::new(
        demo_scores(),
        Some("Kickoff assessment from the onboarding workshop.".to_string()),
        None,
    ));

    client.deliverables.push(Deliverable::new(
        "Commercial Maturity Kickoff",
        "Findings and priorities from the onboarding workshop",
        "# Kickoff findings\n\nFounder-led sales carries the pipeline today. \
         The first ninety days focus on codifying the sales process and \
         instrumenting the funnel.",
    ));

    client.journeys.push(demo_journey());

    vec![client]
}

fn demo_scores() -> BTreeMap<Pillar, PillarScore> {
    let responses: [(Pillar, [u8; 10]); 7] = [
        (Pillar::Strategy, [50, 75, 50, 50, 25, 50, 75, 50, 50, 50]),
        (Pillar::Goals, [25, 50, 50, 25, 50, 25, 50, 50, 25, 50]),
        (Pillar::Channels, [25, 25, 50, 25, 25, 50, 25, 25, 50, 25]),
        (Pillar::Process, [0, 25, 25, 0, 25, 25, 50, 25, 0, 25]),
        (Pillar::Metrics, [25, 25, 0, 25, 50, 25, 25, 0, 25, 25]),
        (Pillar::Compensation, [50, 50, 25, 50, 50, 75, 50, 50, 25, 50]),
        (Pillar::Systems, [25, 0, 25, 25, 0, 25, 25, 50, 25, 25]),
    ];

    responses
        .into_iter()
        .map(|(pillar, values)| (pillar, PillarScore::from_responses(values.to_vec())))
        .collect()
}

fn demo_journey() -> Journey {
    let mut action_a = Action::new("Write the discovery call script");
    action_a.is_completed = true;
    let action_b = Action::new("Define exit criteria per funnel stage");

    let mut initiative = Initiative::new("Codify the sales process");
    initiative.actions = vec![action_a, action_b];

    let mut key_result = KeyResult::new("Documented process for every funnel stage");
    key_result.progress = 30;
    key_result.initiatives = vec![initiative];

    let mut objective = Objective::new("Make revenue generation repeatable");
    objective.progress = 20;
    objective.key_results = vec![key_result];

    let mut journey = Journey::new("Pipeline Discipline", "#3b82f6");
    journey.progress = 20;
    journey.objectives = vec![objective];

    journey
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_user_links_to_seed_client() {
        let users = default_users();
        let clients = demo_clients();

        let viewer = users.iter().find(|u| u.role == Role::Client).unwrap();
        let linked = clients.iter().any(|c| Some(&c.id) == viewer.client_id.as_ref());
        assert!(linked);
    }

    #[test]
    fn test_demo_assessment_covers_every_pillar() {
        let clients = demo_clients();
        let assessment = &clients[0].assessments[0];
        assert_eq!(assessment.scores.len(), 7);
        assert!(assessment.overall_maturity > 0);
    }

    #[test]
    fn test_seed_ids_are_stable() {
        assert_eq!(demo_clients()[0].id, demo_clients()[0].id);
        assert_eq!(default_users()[0].id, SEED_ADMIN_ID);
    }
}
