//! Commercial Maturity Pillars
//!
//! The seven fixed dimensions every assessment scores, plus the pure
//! scoring functions derived from them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::assessment::PillarScore;

/// Number of questionnaire responses behind each pillar score
pub const RESPONSES_PER_PILLAR: usize = 10;

/// One of the seven fixed commercial-maturity dimensions
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Pillar {
    Strategy,
    Goals,
    Channels,
    Process,
    Metrics,
    Compensation,
    Systems,
}

impl Pillar {
    /// All pillars in scoring order
    pub const ALL: [Pillar; 7] = [
        Pillar::Strategy,
        Pillar::Goals,
        Pillar::Channels,
        Pillar::Process,
        Pillar::Metrics,
        Pillar::Compensation,
        Pillar::Systems,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pillar::Strategy => "strategy",
            Pillar::Goals => "goals",
            Pillar::Channels => "channels",
            Pillar::Process => "process",
            Pillar::Metrics => "metrics",
            Pillar::Compensation => "compensation",
            Pillar::Systems => "systems",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "strategy" => Some(Pillar::Strategy),
            "goals" => Some(Pillar::Goals),
            "channels" => Some(Pillar::Channels),
            "process" => Some(Pillar::Process),
            "metrics" => Some(Pillar::Metrics),
            "compensation" => Some(Pillar::Compensation),
            "systems" => Some(Pillar::Systems),
            _ => None,
        }
    }

    /// Display name for reports and prompts
    pub fn label(&self) -> &'static str {
        match self {
            Pillar::Strategy => "Strategy",
            Pillar::Goals => "Goals",
            Pillar::Channels => "Channels",
            Pillar::Process => "Process",
            Pillar::Metrics => "Metrics",
            Pillar::Compensation => "Compensation",
            Pillar::Systems => "Systems",
        }
    }
}

/// Score a single pillar: the rounded mean of its responses.
///
/// Total over any input: an empty slice scores 0.
pub fn pillar_score(responses: &[u8]) -> u8 {
    if responses.is_empty() {
        return 0;
    }
    let sum: u32 = responses.iter().map(|&r| u32::from(r)).sum();
    (f64::from(sum) / responses.len() as f64).round() as u8
}

/// Overall maturity: the rounded mean of all seven pillar scores.
///
/// A pillar missing from the map contributes 0; the divisor is always 7.
pub fn overall_maturity(scores: &BTreeMap<Pillar, PillarScore>) -> u8 {
    let sum: u32 = Pillar::ALL
        .iter()
        .map(|pillar| {
            scores
                .get(pillar)
                .map(|score| u32::from(pillar_score(&score.responses)))
                .unwrap_or(0)
        })
        .sum();
    (f64::from(sum) / Pillar::ALL.len() as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores_with(responses: [u8; RESPONSES_PER_PILLAR]) -> BTreeMap<Pillar, PillarScore> {
        Pillar::ALL
            .iter()
            .map(|&p| (p, PillarScore::from_responses(responses.to_vec())))
            .collect()
    }

    #[test]
    fn test_pillar_round_trip() {
        for pillar in Pillar::ALL {
            assert_eq!(Pillar::from_str(pillar.as_str()), Some(pillar));
        }
        assert_eq!(Pillar::from_str("culture"), None);
    }

    #[test]
    fn test_pillar_score_mixed() {
        assert_eq!(pillar_score(&[0, 25, 50, 75, 100, 0, 25, 50, 75, 100]), 50);
    }

    #[test]
    fn test_pillar_score_rounds_half_up() {
        // mean 27.5 -> 28
        assert_eq!(pillar_score(&[25, 25, 25, 25, 25, 25, 25, 25, 25, 50]), 28);
    }

    #[test]
    fn test_pillar_score_empty_is_zero() {
        assert_eq!(pillar_score(&[]), 0);
    }

    #[test]
    fn test_overall_maturity_bounds() {
        assert_eq!(overall_maturity(&scores_with([0; 10])), 0);
        assert_eq!(overall_maturity(&scores_with([100; 10])), 100);
    }

    #[test]
    fn test_overall_maturity_missing_pillar_counts_as_zero() {
        let mut scores = scores_with([100; 10]);
        scores.remove(&Pillar::Systems);
        // six pillars at 100, one absent: 600 / 7 = 85.7 -> 86
        assert_eq!(overall_maturity(&scores), 86);
    }

    #[test]
    fn test_single_response_flip_moves_overall_at_most_two() {
        let base = scores_with([50; 10]);
        let baseline = overall_maturity(&base);
        for pillar in Pillar::ALL {
            for slot in 0..RESPONSES_PER_PILLAR {
                let mut perturbed = base.clone();
                let score = perturbed.get_mut(&pillar).unwrap();
                score.responses[slot] = 100;
                let delta = i32::from(overall_maturity(&perturbed)) - i32::from(baseline);
                assert!(delta.abs() <= 2, "flip moved overall by {}", delta);
            }
        }
    }
}
