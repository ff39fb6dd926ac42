//! Prompt Builders
//!
//! Plain-text prompts for the three generation tasks. Pure functions,
//! separate from the transport so tests can inspect the exact text a
//! task sends.

use std::collections::BTreeMap;

use chrono::DateTime;

use crate::domain::{pillar_score, AnswerSize, Client, Deliverable, Pillar, PillarScore, Tone};

fn format_date(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|date| date.date_naive().to_string())
        .unwrap_or_else(|| "unknown date".to_string())
}

fn push_score_lines(out: &mut String, scores: &BTreeMap<Pillar, PillarScore>) {
    for pillar in Pillar::ALL {
        let value = scores
            .get(&pillar)
            .map(|score| pillar_score(&score.responses))
            .unwrap_or(0);
        out.push_str(&format!("- {}: {}/100\n", pillar.label(), value));
    }
}

/// Executive summary over the client's full assessment history.
pub fn executive_summary(client: &Client) -> String {
    let mut prompt = String::from(
        "You are a commercial-maturity consultant writing for an executive audience.\n\
         Write a concise executive summary (three short paragraphs) of the engagement \
         below. Focus on the trajectory, the strongest pillars and the weakest ones. \
         Do not invent numbers.\n\n",
    );

    prompt.push_str(&format!("Client: {}\n", client.name));
    prompt.push_str(&format!("Onboarded: {}\n", client.onboarding_date));
    if !client.diagnostic_summary.is_empty() {
        prompt.push_str(&format!("Diagnostic notes: {}\n", client.diagnostic_summary));
    }

    prompt.push_str("\nAssessment history (oldest first):\n");
    if client.assessments.is_empty() {
        prompt.push_str("No assessments recorded yet.\n");
    }
    for assessment in &client.assessments {
        prompt.push_str(&format!(
            "\n{} - overall maturity {}/100\n",
            format_date(assessment.date),
            assessment.overall_maturity
        ));
        push_score_lines(&mut prompt, &assessment.scores);
        if let Some(note) = &assessment.general_note {
            prompt.push_str(&format!("Consultant note: {}\n", note));
        }
    }

    prompt
}

/// Grounded chat answer over the selected deliverables.
pub fn chat_answer(
    question: &str,
    sources: &[Deliverable],
    tone: Tone,
    size: AnswerSize,
    orientation: &str,
) -> String {
    let mut prompt = String::from(
        "You are the consulting assistant for this engagement. Answer the question \
         using only the reference documents below. If they do not cover it, say so \
         plainly.\n\n",
    );

    prompt.push_str(&format!("Tone: {}\n", tone.as_str()));
    prompt.push_str(&format!("Answer length: {}\n", size.as_str()));
    if !orientation.is_empty() {
        prompt.push_str(&format!("Additional orientation: {}\n", orientation));
    }

    prompt.push_str("\nReference documents:\n");
    if sources.is_empty() {
        prompt.push_str("(no reference documents selected)\n");
    }
    for source in sources {
        prompt.push_str(&format!("\n## {}\n", source.name));
        if !source.description.is_empty() {
            prompt.push_str(&format!("{}\n", source.description));
        }
        prompt.push_str(&format!("\n{}\n", source.content));
    }

    prompt.push_str(&format!("\nQuestion: {}\n", question));
    prompt
}

/// Short strategic note for one full score set.
pub fn assessment_note(scores: &BTreeMap<Pillar, PillarScore>) -> String {
    let mut prompt = String::from(
        "Write a short strategic note (two to three sentences) for a commercial-maturity \
         assessment with these pillar scores:\n\n",
    );
    push_score_lines(&mut prompt, scores);
    prompt.push_str(
        "\nName the strongest pillar, the weakest pillar, and one concrete next step.\n",
    );
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Assessment, RESPONSES_PER_PILLAR};

    fn uniform_scores(value: u8) -> BTreeMap<Pillar, PillarScore> {
        Pillar::ALL
            .iter()
            .map(|&p| (p, PillarScore::from_responses(vec![value; RESPONSES_PER_PILLAR])))
            .collect()
    }

    #[test]
    fn test_summary_prompt_carries_the_history() {
        let mut client = Client::new("Acme Industrial");
        client.assessments.push(Assessment::new(
            uniform_scores(50),
            Some("steady quarter".to_string()),
            Some(1_700_000_000_000),
        ));

        let prompt = executive_summary(&client);

        assert!(prompt.contains("Acme Industrial"));
        assert!(prompt.contains("overall maturity 50/100"));
        assert!(prompt.contains("- Strategy: 50/100"));
        assert!(prompt.contains("Consultant note: steady quarter"));
        assert!(prompt.contains("2023-11-14"));
    }

    #[test]
    fn test_summary_prompt_with_no_history() {
        let prompt = executive_summary(&Client::new("Acme"));
        assert!(prompt.contains("No assessments recorded yet."));
    }

    #[test]
    fn test_chat_prompt_renders_style_and_sources() {
        let sources = vec![Deliverable::new(
            "Funnel Audit",
            "Q2 pipeline review",
            "Conversion drops at stage three.",
        )];

        let prompt = chat_answer(
            "Where does the funnel leak?",
            &sources,
            Tone::Casual,
            AnswerSize::Long,
            "answer in Portuguese",
        );

        assert!(prompt.contains("Tone: casual"));
        assert!(prompt.contains("Answer length: long"));
        assert!(prompt.contains("Additional orientation: answer in Portuguese"));
        assert!(prompt.contains("## Funnel Audit"));
        assert!(prompt.contains("Conversion drops at stage three."));
        assert!(prompt.contains("Question: Where does the funnel leak?"));
    }

    #[test]
    fn test_chat_prompt_without_sources_or_orientation() {
        let prompt = chat_answer("Hello?", &[], Tone::Formal, AnswerSize::Short, "");
        assert!(prompt.contains("(no reference documents selected)"));
        assert!(!prompt.contains("Additional orientation"));
    }

    #[test]
    fn test_note_prompt_lists_all_seven_pillars() {
        let prompt = assessment_note(&uniform_scores(75));
        for pillar in Pillar::ALL {
            assert!(prompt.contains(&format!("- {}: 75/100", pillar.label())));
        }
    }
}
