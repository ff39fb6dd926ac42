//! Journey Hierarchy Operations
//!
//! Five levels, each owned by its parent: Journey → Objective →
//! KeyResult → Initiative → Action. Every operation descends exactly
//! its id chain and rebuilds only that path; siblings keep their
//! content untouched. Progress values are stored as given, never
//! derived from children.

use super::{map_by_id, remove_by_id, AppStore};
use crate::domain::{
    Action, Client, DomainResult, Initiative, Journey, KeyResult, Objective,
};

fn with_journey<F>(clients: &[Client], client_id: &str, journey_id: &str, f: F) -> Vec<Client>
where
    F: FnOnce(&Journey) -> Journey,
{
    map_by_id(clients, client_id, |client| {
        let mut client = client.clone();
        client.journeys = map_by_id(&client.journeys, journey_id, f);
        client
    })
}

fn with_objective<F>(
    clients: &[Client],
    client_id: &str,
    journey_id: &str,
    objective_id: &str,
    f: F,
) -> Vec<Client>
where
    F: FnOnce(&Objective) -> Objective,
{
    with_journey(clients, client_id, journey_id, |journey| {
        let mut journey = journey.clone();
        journey.objectives = map_by_id(&journey.objectives, objective_id, f);
        journey
    })
}

fn with_key_result<F>(
    clients: &[Client],
    client_id: &str,
    journey_id: &str,
    objective_id: &str,
    key_result_id: &str,
    f: F,
) -> Vec<Client>
where
    F: FnOnce(&KeyResult) -> KeyResult,
{
    with_objective(clients, client_id, journey_id, objective_id, |objective| {
        let mut objective = objective.clone();
        objective.key_results = map_by_id(&objective.key_results, key_result_id, f);
        objective
    })
}

fn with_initiative<F>(
    clients: &[Client],
    client_id: &str,
    journey_id: &str,
    objective_id: &str,
    key_result_id: &str,
    initiative_id: &str,
    f: F,
) -> Vec<Client>
where
    F: FnOnce(&Initiative) -> Initiative,
{
    with_key_result(
        clients,
        client_id,
        journey_id,
        objective_id,
        key_result_id,
        |key_result| {
            let mut key_result = key_result.clone();
            key_result.initiatives = map_by_id(&key_result.initiatives, initiative_id, f);
            key_result
        },
    )
}

impl AppStore {
    pub async fn add_journey(
        &self,
        client_id: &str,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> DomainResult<()> {
        let journey = Journey::new(name, color);
        self.update_clients(|clients| {
            map_by_id(clients, client_id, |client| {
                let mut client = client.clone();
                client.journeys.push(journey);
                client
            })
        })
        .await
    }

    pub async fn update_journey(
        &self,
        client_id: &str,
        journey_id: &str,
        name: Option<String>,
        color: Option<String>,
        progress: Option<u8>,
    ) -> DomainResult<()> {
        self.update_clients(|clients| {
            with_journey(clients, client_id, journey_id, |existing| Journey {
                id: existing.id.clone(),
                name: name.unwrap_or_else(|| existing.name.clone()),
                color: color.unwrap_or_else(|| existing.color.clone()),
                objectives: existing.objectives.clone(),
                progress: progress.unwrap_or(existing.progress),
            })
        })
        .await
    }

    pub async fn delete_journey(&self, client_id: &str, journey_id: &str) -> DomainResult<()> {
        self.update_clients(|clients| {
            map_by_id(clients, client_id, |client| {
                let mut client = client.clone();
                client.journeys = remove_by_id(&client.journeys, journey_id);
                client
            })
        })
        .await
    }

    pub async fn add_objective(
        &self,
        client_id: &str,
        journey_id: &str,
        name: impl Into<String>,
    ) -> DomainResult<()> {
        let objective = Objective::new(name);
        self.update_clients(|clients| {
            with_journey(clients, client_id, journey_id, |journey| {
                let mut journey = journey.clone();
                journey.objectives.push(objective);
                journey
            })
        })
        .await
    }

    pub async fn update_objective(
        &self,
        client_id: &str,
        journey_id: &str,
        objective_id: &str,
        name: Option<String>,
        progress: Option<u8>,
    ) -> DomainResult<()> {
        self.update_clients(|clients| {
            with_objective(clients, client_id, journey_id, objective_id, |existing| {
                Objective {
                    id: existing.id.clone(),
                    name: name.unwrap_or_else(|| existing.name.clone()),
                    key_results: existing.key_results.clone(),
                    progress: progress.unwrap_or(existing.progress),
                }
            })
        })
        .await
    }

    pub async fn delete_objective(
        &self,
        client_id: &str,
        journey_id: &str,
        objective_id: &str,
    ) -> DomainResult<()> {
        self.update_clients(|clients| {
            with_journey(clients, client_id, journey_id, |journey| {
                let mut journey = journey.clone();
                journey.objectives = remove_by_id(&journey.objectives, objective_id);
                journey
            })
        })
        .await
    }

    pub async fn add_key_result(
        &self,
        client_id: &str,
        journey_id: &str,
        objective_id: &str,
        name: impl Into<String>,
    ) -> DomainResult<()> {
        let key_result = KeyResult::new(name);
        self.update_clients(|clients| {
            with_objective(clients, client_id, journey_id, objective_id, |objective| {
                let mut objective = objective.clone();
                objective.key_results.push(key_result);
                objective
            })
        })
        .await
    }

    pub async fn update_key_result(
        &self,
        client_id: &str,
        journey_id: &str,
        objective_id: &str,
        key_result_id: &str,
        name: Option<String>,
        progress: Option<u8>,
    ) -> DomainResult<()> {
        self.update_clients(|clients| {
            with_key_result(
                clients,
                client_id,
                journey_id,
                objective_id,
                key_result_id,
                |existing| KeyResult {
                    id: existing.id.clone(),
                    name: name.unwrap_or_else(|| existing.name.clone()),
                    progress: progress.unwrap_or(existing.progress),
                    initiatives: existing.initiatives.clone(),
                },
            )
        })
        .await
    }

    pub async fn delete_key_result(
        &self,
        client_id: &str,
        journey_id: &str,
        objective_id: &str,
        key_result_id: &str,
    ) -> DomainResult<()> {
        self.update_clients(|clients| {
            with_objective(clients, client_id, journey_id, objective_id, |objective| {
                let mut objective = objective.clone();
                objective.key_results = remove_by_id(&objective.key_results, key_result_id);
                objective
            })
        })
        .await
    }

    pub async fn add_initiative(
        &self,
        client_id: &str,
        journey_id: &str,
        objective_id: &str,
        key_result_id: &str,
        name: impl Into<String>,
    ) -> DomainResult<()> {
        let initiative = Initiative::new(name);
        self.update_clients(|clients| {
            with_key_result(
                clients,
                client_id,
                journey_id,
                objective_id,
                key_result_id,
                |key_result| {
                    let mut key_result = key_result.clone();
                    key_result.initiatives.push(initiative);
                    key_result
                },
            )
        })
        .await
    }

    pub async fn update_initiative(
        &self,
        client_id: &str,
        journey_id: &str,
        objective_id: &str,
        key_result_id: &str,
        initiative_id: &str,
        name: Option<String>,
    ) -> DomainResult<()> {
        self.update_clients(|clients| {
            with_initiative(
                clients,
                client_id,
                journey_id,
                objective_id,
                key_result_id,
                initiative_id,
                |existing| Initiative {
                    id: existing.id.clone(),
                    name: name.unwrap_or_else(|| existing.name.clone()),
                    actions: existing.actions.clone(),
                },
            )
        })
        .await
    }

    pub async fn delete_initiative(
        &self,
        client_id: &str,
        journey_id: &str,
        objective_id: &str,
        key_result_id: &str,
        initiative_id: &str,
    ) -> DomainResult<()> {
        self.update_clients(|clients| {
            with_key_result(
                clients,
                client_id,
                journey_id,
                objective_id,
                key_result_id,
                |key_result| {
                    let mut key_result = key_result.clone();
                    key_result.initiatives = remove_by_id(&key_result.initiatives, initiative_id);
                    key_result
                },
            )
        })
        .await
    }

    pub async fn add_action(
        &self,
        client_id: &str,
        journey_id: &str,
        objective_id: &str,
        key_result_id: &str,
        initiative_id: &str,
        name: impl Into<String>,
    ) -> DomainResult<()> {
        let action = Action::new(name);
        self.update_clients(|clients| {
            with_initiative(
                clients,
                client_id,
                journey_id,
                objective_id,
                key_result_id,
                initiative_id,
                |initiative| {
                    let mut initiative = initiative.clone();
                    initiative.actions.push(action);
                    initiative
                },
            )
        })
        .await
    }

    pub async fn update_action(
        &self,
        client_id: &str,
        journey_id: &str,
        objective_id: &str,
        key_result_id: &str,
        initiative_id: &str,
        action_id: &str,
        name: Option<String>,
    ) -> DomainResult<()> {
        self.update_clients(|clients| {
            with_initiative(
                clients,
                client_id,
                journey_id,
                objective_id,
                key_result_id,
                initiative_id,
                |initiative| {
                    let mut initiative = initiative.clone();
                    initiative.actions = map_by_id(&initiative.actions, action_id, |existing| {
                        Action {
                            id: existing.id.clone(),
                            name: name.unwrap_or_else(|| existing.name.clone()),
                            is_completed: existing.is_completed,
                            is_in_kanban: existing.is_in_kanban,
                        }
                    });
                    initiative
                },
            )
        })
        .await
    }

    pub async fn delete_action(
        &self,
        client_id: &str,
        journey_id: &str,
        objective_id: &str,
        key_result_id: &str,
        initiative_id: &str,
        action_id: &str,
    ) -> DomainResult<()> {
        self.update_clients(|clients| {
            with_initiative(
                clients,
                client_id,
                journey_id,
                objective_id,
                key_result_id,
                initiative_id,
                |initiative| {
                    let mut initiative = initiative.clone();
                    initiative.actions = remove_by_id(&initiative.actions, action_id);
                    initiative
                },
            )
        })
        .await
    }

    pub async fn toggle_action_complete(
        &self,
        client_id: &str,
        journey_id: &str,
        objective_id: &str,
        key_result_id: &str,
        initiative_id: &str,
        action_id: &str,
    ) -> DomainResult<()> {
        self.update_clients(|clients| {
            with_initiative(
                clients,
                client_id,
                journey_id,
                objective_id,
                key_result_id,
                initiative_id,
                |initiative| {
                    let mut initiative = initiative.clone();
                    initiative.actions = map_by_id(&initiative.actions, action_id, |action| {
                        let mut action = action.clone();
                        action.is_completed = !action.is_completed;
                        action
                    });
                    initiative
                },
            )
        })
        .await
    }
}
