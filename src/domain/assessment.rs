//! Assessment Entity
//!
//! A dated snapshot of all seven pillar scores for one client.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::entity::{new_id, now_millis, Entity};
use super::pillar::{overall_maturity, Pillar, RESPONSES_PER_PILLAR};

/// Raw questionnaire state behind one pillar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarScore {
    /// Ten responses, each one of 0/25/50/75/100
    #[serde(default)]
    pub responses: Vec<u8>,
    /// Target score agreed with the client (0-100)
    #[serde(default = "default_goal")]
    pub goal: u8,
    #[serde(default)]
    pub notes: String,
}

fn default_goal() -> u8 {
    80
}

impl Default for PillarScore {
    fn default() -> Self {
        Self {
            responses: vec![0; RESPONSES_PER_PILLAR],
            goal: default_goal(),
            notes: String::new(),
        }
    }
}

impl PillarScore {
    pub fn from_responses(responses: Vec<u8>) -> Self {
        Self {
            responses,
            ..Self::default()
        }
    }
}

/// A dated snapshot of every pillar's score
///
/// Assessments live in creation order; the dashboard treats the last
/// element as "latest" regardless of `date`, so a back-dated entry never
/// reorders the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: String,
    /// Epoch milliseconds; overridable at creation for back-dated entries
    pub date: i64,
    #[serde(default)]
    pub scores: BTreeMap<Pillar, PillarScore>,
    /// Derived from `scores`, never set by callers
    pub overall_maturity: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_note: Option<String>,
}

impl Assessment {
    /// Build a new assessment, computing `overall_maturity` from the scores.
    pub fn new(
        scores: BTreeMap<Pillar, PillarScore>,
        general_note: Option<String>,
        date: Option<i64>,
    ) -> Self {
        let overall = overall_maturity(&scores);
        Self {
            id: new_id(),
            date: date.unwrap_or_else(now_millis),
            scores,
            overall_maturity: overall,
            general_note,
        }
    }

    /// Replace the scores (and optionally note/date), recomputing the overall.
    pub fn with_scores(
        &self,
        scores: BTreeMap<Pillar, PillarScore>,
        general_note: Option<String>,
        date: Option<i64>,
    ) -> Self {
        let overall = overall_maturity(&scores);
        Self {
            id: self.id.clone(),
            date: date.unwrap_or(self.date),
            scores,
            overall_maturity: overall,
            general_note: general_note.or_else(|| self.general_note.clone()),
        }
    }
}

impl Entity for Assessment {
    fn id(&self) -> &str {
        &self.id
    }
}
