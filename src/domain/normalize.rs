//! Stored-Shape Normalization
//!
//! Persisted blobs written by older versions may miss whole pillars,
//! carry short response vectors, or predate intake sections. Every read
//! path runs through these pure functions so the rest of the crate only
//! ever sees the current shape. Stored data is never widened in place;
//! callers get a normalized copy.

use crate::domain::assessment::{Assessment, PillarScore};
use crate::domain::client::Client;
use crate::domain::client_info::{default_client_info, ClientInfo};
use crate::domain::pillar::{Pillar, RESPONSES_PER_PILLAR};

/// Normalize every versioned collection of one client.
pub fn normalize_client(client: &Client) -> Client {
    let mut out = client.clone();
    out.assessments = client.assessments.iter().map(normalize_assessment).collect();
    out.client_info = normalize_client_info(&client.client_info);
    out
}

/// Fill missing pillars and repair malformed response vectors.
///
/// The stored overall score is kept as written; recomputation is the
/// update engine's job, not the read path's.
pub fn normalize_assessment(assessment: &Assessment) -> Assessment {
    let mut out = assessment.clone();
    out.scores = Pillar::ALL
        .into_iter()
        .map(|pillar| {
            let score = assessment
                .scores
                .get(&pillar)
                .map(normalize_pillar_score)
                .unwrap_or_default();
            (pillar, score)
        })
        .collect();
    out
}

fn normalize_pillar_score(score: &PillarScore) -> PillarScore {
    let mut out = score.clone();
    if out.responses.len() != RESPONSES_PER_PILLAR {
        out.responses = vec![0; RESPONSES_PER_PILLAR];
    }
    out
}

/// Bring an intake questionnaire up to the current section schema.
///
/// Sections absent from the stored map are inserted whole. Inside a
/// stored section the title is kept as written, missing default
/// questions are prepended in schema order, and everything the user
/// already answered or added stays put behind them.
pub fn normalize_client_info(info: &ClientInfo) -> ClientInfo {
    default_client_info()
        .into_iter()
        .map(|(section_id, template)| {
            let section = match info.get(&section_id) {
                Some(stored) => {
                    let mut questions: Vec<_> = template
                        .questions
                        .into_iter()
                        .filter(|default_q| {
                            !stored.questions.iter().any(|q| q.id == default_q.id)
                        })
                        .collect();
                    questions.extend(stored.questions.iter().cloned());
                    crate::domain::client_info::ClientInfoSection {
                        title: stored.title.clone(),
                        questions,
                    }
                }
                None => template,
            };
            (section_id, section)
        })
        .collect()
}
