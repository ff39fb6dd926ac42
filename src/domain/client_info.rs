//! Client Info Entities
//!
//! A fixed nine-section questionnaire about the client organization.
//! Each section carries schema-defined default questions (stable ids) plus
//! any custom questions an admin added; answers may carry file attachments.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::entity::{new_id, Entity};

/// The nine fixed client-info sections
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Summary,
    Basic,
    Metrics,
    Funnel,
    Competitors,
    Materials,
    Background,
    Goals,
    Contacts,
}

impl SectionId {
    pub const ALL: [SectionId; 9] = [
        SectionId::Summary,
        SectionId::Basic,
        SectionId::Metrics,
        SectionId::Funnel,
        SectionId::Competitors,
        SectionId::Materials,
        SectionId::Background,
        SectionId::Goals,
        SectionId::Contacts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Summary => "summary",
            SectionId::Basic => "basic",
            SectionId::Metrics => "metrics",
            SectionId::Funnel => "funnel",
            SectionId::Competitors => "competitors",
            SectionId::Materials => "materials",
            SectionId::Background => "background",
            SectionId::Goals => "goals",
            SectionId::Contacts => "contacts",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "summary" => Some(SectionId::Summary),
            "basic" => Some(SectionId::Basic),
            "metrics" => Some(SectionId::Metrics),
            "funnel" => Some(SectionId::Funnel),
            "competitors" => Some(SectionId::Competitors),
            "materials" => Some(SectionId::Materials),
            "background" => Some(SectionId::Background),
            "goals" => Some(SectionId::Goals),
            "contacts" => Some(SectionId::Contacts),
            _ => None,
        }
    }
}

/// A file attached to a question's answer (base64 payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub data: String,
}

impl Attachment {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }
}

impl Entity for Attachment {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One question inside a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfoQuestion {
    pub id: String,
    pub question: String,
    #[serde(default)]
    pub answer: String,
    /// Schema-defined questions are `true`; admin-added ones `false`
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl ClientInfoQuestion {
    /// An admin-added custom question (empty answer, no attachments)
    pub fn custom(question: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            question: question.into(),
            answer: String::new(),
            is_default: false,
            attachments: Vec::new(),
        }
    }
}

impl Entity for ClientInfoQuestion {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfoSection {
    pub title: String,
    #[serde(default)]
    pub questions: Vec<ClientInfoQuestion>,
}

/// Fixed-shape map from section id to its content
pub type ClientInfo = BTreeMap<SectionId, ClientInfoSection>;

fn default_question(id: &str, question: &str) -> ClientInfoQuestion {
    ClientInfoQuestion {
        id: id.to_string(),
        question: question.to_string(),
        answer: String::new(),
        is_default: true,
        attachments: Vec::new(),
    }
}

fn section(title: &str, questions: Vec<ClientInfoQuestion>) -> ClientInfoSection {
    ClientInfoSection {
        title: title.to_string(),
        questions,
    }
}

/// The full default schema: nine sections with their default questions.
///
/// Question ids are stable so the normalization pass can match them inside
/// stored clients across schema versions.
pub fn default_client_info() -> ClientInfo {
    let mut info = ClientInfo::new();
    info.insert(
        SectionId::Summary,
        section(
            "Company Summary",
            vec![
                default_question("summary-offering", "What does the company sell, and to whom?"),
                default_question("summary-team", "How is the commercial team staffed today?"),
            ],
        ),
    );
    info.insert(
        SectionId::Basic,
        section(
            "Basic Information",
            vec![
                default_question("basic-legal", "Legal name and headquarters location?"),
                default_question("basic-founding", "Founding year and ownership structure?"),
                default_question("basic-revenue", "Current annual revenue range?"),
            ],
        ),
    );
    info.insert(
        SectionId::Metrics,
        section(
            "Commercial Metrics",
            vec![
                default_question("metrics-recurring", "Current MRR/ARR, if applicable?"),
                default_question("metrics-ticket", "Average ticket and sales cycle length?"),
                default_question("metrics-conversion", "Lead-to-close conversion rate?"),
            ],
        ),
    );
    info.insert(
        SectionId::Funnel,
        section(
            "Sales Funnel",
            vec![
                default_question("funnel-stages", "Which stages does the funnel have today?"),
                default_question("funnel-bottleneck", "Where do most deals stall?"),
            ],
        ),
    );
    info.insert(
        SectionId::Competitors,
        section(
            "Competitors",
            vec![
                default_question("competitors-main", "Who are the three main competitors?"),
                default_question("competitors-pricing", "How does pricing compare to them?"),
            ],
        ),
    );
    info.insert(
        SectionId::Materials,
        section(
            "Sales Materials",
            vec![
                default_question("materials-collateral", "Which sales collateral exists today?"),
                default_question("materials-proposals", "Where are proposals produced and stored?"),
            ],
        ),
    );
    info.insert(
        SectionId::Background,
        section(
            "Company Background",
            vec![
                default_question("background-growth", "How did the company reach its current size?"),
                default_question("background-markets", "Which markets were entered in the last five years?"),
            ],
        ),
    );
    info.insert(
        SectionId::Goals,
        section(
            "Goals & Expectations",
            vec![
                default_question("goals-success", "What does success look like in 12 months?"),
                default_question("goals-target", "Which revenue target is set for this year?"),
            ],
        ),
    );
    info.insert(
        SectionId::Contacts,
        section(
            "Key Contacts",
            vec![
                default_question("contacts-sponsor", "Who sponsors this engagement?"),
                default_question("contacts-owner", "Who owns the commercial area day to day?"),
            ],
        ),
    );
    info
}
