//! Weekly Plan and Kanban Card Entities
//!
//! Plans cover consecutive 7-day windows; each holds a small kanban board.
//! Week numbers are positional (1..N) and recomputed after deletions.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::entity::{new_id, Entity};

/// Kanban column a card sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    #[default]
    Todo,
    Doing,
    Done,
}

impl CardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardStatus::Todo => "todo",
            CardStatus::Doing => "doing",
            CardStatus::Done => "done",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(CardStatus::Todo),
            "doing" => Some(CardStatus::Doing),
            "done" => Some(CardStatus::Done),
            _ => None,
        }
    }
}

/// One card on a weekly plan board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanCard {
    pub id: String,
    pub title: String,
    pub goal: String,
    pub description: String,
    pub assignee: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: CardStatus,
    /// Back-reference to a journey Action; its `isInKanban` flag mirrors
    /// this card's existence (kept in sync by the store, not here)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
}

/// Fields a caller supplies when creating a card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanCardDraft {
    pub title: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub assignee: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
}

impl KanbanCard {
    pub fn from_draft(draft: KanbanCardDraft, status: CardStatus) -> Self {
        Self {
            id: new_id(),
            title: draft.title,
            goal: draft.goal,
            description: draft.description,
            assignee: draft.assignee,
            due_date: draft.due_date,
            status,
            action_id: draft.action_id,
        }
    }
}

impl Entity for KanbanCard {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A 7-day execution window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub id: String,
    /// 1-based position; not stable across deletions
    pub week_number: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub cards: Vec<KanbanCard>,
}

impl WeeklyPlan {
    pub fn new(week_number: u32, start_date: NaiveDate) -> Self {
        Self {
            id: new_id(),
            week_number,
            start_date,
            end_date: start_date + Days::new(6),
            cards: Vec::new(),
        }
    }
}

impl Entity for WeeklyPlan {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The Monday on or after `from` (same day when `from` is a Monday)
pub fn next_monday(from: NaiveDate) -> NaiveDate {
    let offset = (7 - from.weekday().num_days_from_monday()) % 7;
    from + Days::new(u64::from(offset))
}

/// Start date for the plan following `previous` (or the first plan, from `today`)
pub fn next_plan_start(previous: Option<&WeeklyPlan>, today: NaiveDate) -> NaiveDate {
    match previous {
        Some(plan) => plan.end_date + Days::new(1),
        None => next_monday(today),
    }
}
