//! Assessment Operations
//!
//! Assessments append in creation order and keep that order across
//! updates; the overall score is recomputed on every write.

use std::collections::BTreeMap;

use super::{map_by_id, remove_by_id, AppStore};
use crate::domain::{Assessment, DomainResult, Pillar, PillarScore};

impl AppStore {
    /// Append a new assessment. `date` overrides "now" when supplied,
    /// which allows back-dated entries; position is append-only either way.
    pub async fn add_assessment(
        &self,
        client_id: &str,
        scores: BTreeMap<Pillar, PillarScore>,
        general_note: Option<String>,
        date: Option<i64>,
    ) -> DomainResult<()> {
        let assessment = Assessment::new(scores, general_note, date);
        self.update_clients(|clients| {
            map_by_id(clients, client_id, |client| {
                let mut client = client.clone();
                client.assessments.push(assessment);
                client
            })
        })
        .await
    }

    /// Replace scores (and optionally note/date) on one assessment,
    /// recomputing the overall. Array position is untouched.
    pub async fn update_assessment(
        &self,
        client_id: &str,
        assessment_id: &str,
        scores: BTreeMap<Pillar, PillarScore>,
        general_note: Option<String>,
        date: Option<i64>,
    ) -> DomainResult<()> {
        self.update_clients(|clients| {
            map_by_id(clients, client_id, |client| {
                let mut client = client.clone();
                client.assessments = map_by_id(&client.assessments, assessment_id, |existing| {
                    existing.with_scores(scores, general_note, date)
                });
                client
            })
        })
        .await
    }

    pub async fn delete_assessment(
        &self,
        client_id: &str,
        assessment_id: &str,
    ) -> DomainResult<()> {
        self.update_clients(|clients| {
            map_by_id(clients, client_id, |client| {
                let mut client = client.clone();
                client.assessments = remove_by_id(&client.assessments, assessment_id);
                client
            })
        })
        .await
    }
}
