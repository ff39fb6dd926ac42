//! Weekly Plan and Kanban Operations
//!
//! Plans chain back to back from the first upcoming Monday. Kanban
//! cards may link to a journey Action; the Action's `isInKanban` flag
//! mirrors card existence and is maintained here, the only writer of
//! that invariant.

use chrono::Utc;

use super::{map_by_id, remove_by_id, AppStore};
use crate::domain::{
    next_plan_start, Action, CardStatus, DomainResult, Journey, KanbanCard, KanbanCardDraft,
    WeeklyPlan,
};

/// Apply `f` to every action in every journey. Used for flag sync,
/// where only the action id is known, not its path.
fn map_actions<F>(journeys: &[Journey], f: F) -> Vec<Journey>
where
    F: Fn(&Action) -> Action,
{
    journeys
        .iter()
        .map(|journey| {
            let mut journey = journey.clone();
            journey.objectives = journey
                .objectives
                .iter()
                .map(|objective| {
                    let mut objective = objective.clone();
                    objective.key_results = objective
                        .key_results
                        .iter()
                        .map(|key_result| {
                            let mut key_result = key_result.clone();
                            key_result.initiatives = key_result
                                .initiatives
                                .iter()
                                .map(|initiative| {
                                    let mut initiative = initiative.clone();
                                    initiative.actions =
                                        initiative.actions.iter().map(&f).collect();
                                    initiative
                                })
                                .collect();
                            key_result
                        })
                        .collect();
                    objective
                })
                .collect();
            journey
        })
        .collect()
}

fn set_action_in_kanban(journeys: &[Journey], action_id: &str, in_kanban: bool) -> Vec<Journey> {
    map_actions(journeys, |action| {
        let mut action = action.clone();
        if action.id == action_id {
            action.is_in_kanban = in_kanban;
        }
        action
    })
}

impl AppStore {
    /// Append the next plan: the first starts on the upcoming Monday
    /// (today counts when today is Monday), later ones start the day
    /// after the previous plan ends.
    pub async fn add_weekly_plan(&self, client_id: &str) -> DomainResult<()> {
        let today = Utc::now().date_naive();
        self.update_clients(|clients| {
            map_by_id(clients, client_id, |client| {
                let mut client = client.clone();
                let start = next_plan_start(client.weekly_plans.last(), today);
                let number = client.weekly_plans.len() as u32 + 1;
                client.weekly_plans.push(WeeklyPlan::new(number, start));
                client
            })
        })
        .await
    }

    /// Remove a plan and renumber the survivors by position.
    pub async fn delete_weekly_plan(&self, client_id: &str, plan_id: &str) -> DomainResult<()> {
        self.update_clients(|clients| {
            map_by_id(clients, client_id, |client| {
                let mut client = client.clone();
                client.weekly_plans = remove_by_id(&client.weekly_plans, plan_id)
                    .into_iter()
                    .enumerate()
                    .map(|(position, mut plan)| {
                        plan.week_number = position as u32 + 1;
                        plan
                    })
                    .collect();
                client
            })
        })
        .await
    }

    /// Add a card to a plan's board. A linked action is flagged as
    /// on-the-board in the same commit.
    pub async fn add_kanban_card(
        &self,
        client_id: &str,
        plan_id: &str,
        draft: KanbanCardDraft,
        status: CardStatus,
    ) -> DomainResult<()> {
        let card = KanbanCard::from_draft(draft, status);
        self.update_clients(|clients| {
            map_by_id(clients, client_id, |client| {
                let mut client = client.clone();
                if let Some(action_id) = &card.action_id {
                    client.journeys = set_action_in_kanban(&client.journeys, action_id, true);
                }
                client.weekly_plans = map_by_id(&client.weekly_plans, plan_id, |plan| {
                    let mut plan = plan.clone();
                    plan.cards.push(card);
                    plan
                });
                client
            })
        })
        .await
    }

    /// Partial merge of card fields. The action link is fixed at creation.
    pub async fn update_kanban_card(
        &self,
        client_id: &str,
        plan_id: &str,
        card_id: &str,
        title: Option<String>,
        goal: Option<String>,
        description: Option<String>,
        assignee: Option<String>,
        due_date: Option<chrono::NaiveDate>,
        status: Option<CardStatus>,
    ) -> DomainResult<()> {
        self.update_clients(|clients| {
            map_by_id(clients, client_id, |client| {
                let mut client = client.clone();
                client.weekly_plans = map_by_id(&client.weekly_plans, plan_id, |plan| {
                    let mut plan = plan.clone();
                    plan.cards = map_by_id(&plan.cards, card_id, |existing| KanbanCard {
                        id: existing.id.clone(),
                        title: title.unwrap_or_else(|| existing.title.clone()),
                        goal: goal.unwrap_or_else(|| existing.goal.clone()),
                        description: description.unwrap_or_else(|| existing.description.clone()),
                        assignee: assignee.unwrap_or_else(|| existing.assignee.clone()),
                        due_date: due_date.or(existing.due_date),
                        status: status.unwrap_or(existing.status),
                        action_id: existing.action_id.clone(),
                    });
                    plan
                });
                client
            })
        })
        .await
    }

    /// Remove a card, clearing the linked action's flag first. The
    /// lookup runs against the same snapshot the removal applies to.
    pub async fn delete_kanban_card(
        &self,
        client_id: &str,
        plan_id: &str,
        card_id: &str,
    ) -> DomainResult<()> {
        self.update_clients(|clients| {
            map_by_id(clients, client_id, |client| {
                let mut client = client.clone();
                let linked_action = client
                    .weekly_plans
                    .iter()
                    .find(|p| p.id == plan_id)
                    .and_then(|p| p.cards.iter().find(|c| c.id == card_id))
                    .and_then(|c| c.action_id.clone());
                if let Some(action_id) = linked_action {
                    client.journeys = set_action_in_kanban(&client.journeys, &action_id, false);
                }
                client.weekly_plans = map_by_id(&client.weekly_plans, plan_id, |plan| {
                    let mut plan = plan.clone();
                    plan.cards = remove_by_id(&plan.cards, card_id);
                    plan
                });
                client
            })
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_util::empty_store;
    use chrono::{Datelike, Days, Weekday};

    async fn store_with_client() -> (AppStore, String) {
        let store = empty_store().await;
        store.add_client("Acme").await.unwrap();
        let client_id = store.active_client_id().await.unwrap();
        (store, client_id)
    }

    /// Build the full journey chain and return the deepest action's id.
    async fn store_with_action() -> (AppStore, String, String) {
        let (store, client_id) = store_with_client().await;

        store.add_journey(&client_id, "Growth", "#3b82f6").await.unwrap();
        let journey_id = store.client(&client_id).await.unwrap().journeys[0].id.clone();

        store
            .add_objective(&client_id, &journey_id, "Repeatable revenue")
            .await
            .unwrap();
        let objective_id = store.client(&client_id).await.unwrap().journeys[0].objectives[0]
            .id
            .clone();

        store
            .add_key_result(&client_id, &journey_id, &objective_id, "Process documented")
            .await
            .unwrap();
        let key_result_id = store.client(&client_id).await.unwrap().journeys[0].objectives[0]
            .key_results[0]
            .id
            .clone();

        store
            .add_initiative(
                &client_id,
                &journey_id,
                &objective_id,
                &key_result_id,
                "Codify the process",
            )
            .await
            .unwrap();
        let initiative_id = store.client(&client_id).await.unwrap().journeys[0].objectives[0]
            .key_results[0]
            .initiatives[0]
            .id
            .clone();

        store
            .add_action(
                &client_id,
                &journey_id,
                &objective_id,
                &key_result_id,
                &initiative_id,
                "Draft the call script",
            )
            .await
            .unwrap();
        let action_id = store.client(&client_id).await.unwrap().journeys[0].objectives[0]
            .key_results[0]
            .initiatives[0]
            .actions[0]
            .id
            .clone();

        (store, client_id, action_id)
    }

    fn find_action(
        store_client: &crate::domain::Client,
        action_id: &str,
    ) -> crate::domain::Action {
        store_client.journeys[0].objectives[0].key_results[0].initiatives[0]
            .actions
            .iter()
            .find(|a| a.id == action_id)
            .cloned()
            .unwrap()
    }

    #[tokio::test]
    async fn test_first_plan_starts_on_a_monday_and_spans_seven_days() {
        let (store, client_id) = store_with_client().await;

        store.add_weekly_plan(&client_id).await.unwrap();

        let client = store.client(&client_id).await.unwrap();
        let plan = &client.weekly_plans[0];
        assert_eq!(plan.week_number, 1);
        assert_eq!(plan.start_date.weekday(), Weekday::Mon);
        assert_eq!(plan.end_date, plan.start_date + Days::new(6));
    }

    #[tokio::test]
    async fn test_plans_chain_back_to_back() {
        let (store, client_id) = store_with_client().await;

        store.add_weekly_plan(&client_id).await.unwrap();
        store.add_weekly_plan(&client_id).await.unwrap();

        let client = store.client(&client_id).await.unwrap();
        assert_eq!(client.weekly_plans.len(), 2);
        let first = &client.weekly_plans[0];
        let second = &client.weekly_plans[1];
        assert_eq!(second.start_date, first.end_date + Days::new(1));
        assert_eq!(second.week_number, 2);
    }

    #[tokio::test]
    async fn test_delete_renumbers_remaining_plans() {
        let (store, client_id) = store_with_client().await;
        store.add_weekly_plan(&client_id).await.unwrap();
        store.add_weekly_plan(&client_id).await.unwrap();
        store.add_weekly_plan(&client_id).await.unwrap();
        let second_id = store.client(&client_id).await.unwrap().weekly_plans[1].id.clone();

        store.delete_weekly_plan(&client_id, &second_id).await.unwrap();

        let client = store.client(&client_id).await.unwrap();
        let numbers: Vec<u32> = client.weekly_plans.iter().map(|p| p.week_number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(client.weekly_plans.len(), 2);
    }

    #[tokio::test]
    async fn test_card_from_deep_action_sets_the_flag() {
        let (store, client_id, action_id) = store_with_action().await;
        store.add_weekly_plan(&client_id).await.unwrap();
        let plan_id = store.client(&client_id).await.unwrap().weekly_plans[0].id.clone();

        let draft = KanbanCardDraft {
            title: "Draft the call script".to_string(),
            action_id: Some(action_id.clone()),
            ..KanbanCardDraft::default()
        };
        store
            .add_kanban_card(&client_id, &plan_id, draft, CardStatus::Todo)
            .await
            .unwrap();

        let client = store.client(&client_id).await.unwrap();
        assert!(find_action(&client, &action_id).is_in_kanban);
        assert_eq!(client.weekly_plans[0].cards.len(), 1);
    }

    #[tokio::test]
    async fn test_deleting_the_card_clears_the_flag() {
        let (store, client_id, action_id) = store_with_action().await;
        store.add_weekly_plan(&client_id).await.unwrap();
        let plan_id = store.client(&client_id).await.unwrap().weekly_plans[0].id.clone();
        let draft = KanbanCardDraft {
            title: "Linked card".to_string(),
            action_id: Some(action_id.clone()),
            ..KanbanCardDraft::default()
        };
        store
            .add_kanban_card(&client_id, &plan_id, draft, CardStatus::Doing)
            .await
            .unwrap();
        let card_id = store.client(&client_id).await.unwrap().weekly_plans[0].cards[0]
            .id
            .clone();

        store
            .delete_kanban_card(&client_id, &plan_id, &card_id)
            .await
            .unwrap();

        let client = store.client(&client_id).await.unwrap();
        assert!(!find_action(&client, &action_id).is_in_kanban);
        assert!(client.weekly_plans[0].cards.is_empty());
    }

    #[tokio::test]
    async fn test_update_card_moves_columns_without_touching_the_link() {
        let (store, client_id, action_id) = store_with_action().await;
        store.add_weekly_plan(&client_id).await.unwrap();
        let plan_id = store.client(&client_id).await.unwrap().weekly_plans[0].id.clone();
        let draft = KanbanCardDraft {
            title: "Move me".to_string(),
            assignee: "Dana".to_string(),
            action_id: Some(action_id.clone()),
            ..KanbanCardDraft::default()
        };
        store
            .add_kanban_card(&client_id, &plan_id, draft, CardStatus::Todo)
            .await
            .unwrap();
        let card_id = store.client(&client_id).await.unwrap().weekly_plans[0].cards[0]
            .id
            .clone();

        store
            .update_kanban_card(
                &client_id,
                &plan_id,
                &card_id,
                None,
                Some("Ship it".to_string()),
                None,
                None,
                None,
                Some(CardStatus::Done),
            )
            .await
            .unwrap();

        let card = store.client(&client_id).await.unwrap().weekly_plans[0].cards[0].clone();
        assert_eq!(card.title, "Move me");
        assert_eq!(card.goal, "Ship it");
        assert_eq!(card.assignee, "Dana");
        assert_eq!(card.status, CardStatus::Done);
        assert_eq!(card.action_id.as_deref(), Some(action_id.as_str()));
    }

    #[tokio::test]
    async fn test_unlinked_card_leaves_journeys_alone() {
        let (store, client_id, action_id) = store_with_action().await;
        store.add_weekly_plan(&client_id).await.unwrap();
        let plan_id = store.client(&client_id).await.unwrap().weekly_plans[0].id.clone();

        let draft = KanbanCardDraft {
            title: "Standalone".to_string(),
            ..KanbanCardDraft::default()
        };
        store
            .add_kanban_card(&client_id, &plan_id, draft, CardStatus::Todo)
            .await
            .unwrap();

        let client = store.client(&client_id).await.unwrap();
        assert!(!find_action(&client, &action_id).is_in_kanban);
    }
}
