//! User Entity and View Access
//!
//! Users are either consultants (admin) or client-side viewers. View
//! identifiers form a closed enum; persisted strings that match nothing
//! are dropped at the parse boundary rather than trusted.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

use super::entity::{new_id, Entity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Client,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Client => "client",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "client" => Some(Role::Client),
            _ => None,
        }
    }
}

/// Every view the dashboard can route to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum View {
    Dashboard,
    Assessments,
    Evolution,
    Journeys,
    WeeklyPlan,
    Deliverables,
    ClientInfo,
    Chat,
    Reports,
    Users,
}

impl View {
    pub const ALL: [View; 10] = [
        View::Dashboard,
        View::Assessments,
        View::Evolution,
        View::Journeys,
        View::WeeklyPlan,
        View::Deliverables,
        View::ClientInfo,
        View::Chat,
        View::Reports,
        View::Users,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Assessments => "assessments",
            View::Evolution => "evolution",
            View::Journeys => "journeys",
            View::WeeklyPlan => "weeklyPlan",
            View::Deliverables => "deliverables",
            View::ClientInfo => "clientInfo",
            View::Chat => "chat",
            View::Reports => "reports",
            View::Users => "users",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "dashboard" => Some(View::Dashboard),
            "assessments" => Some(View::Assessments),
            "evolution" => Some(View::Evolution),
            "journeys" => Some(View::Journeys),
            "weeklyPlan" => Some(View::WeeklyPlan),
            "deliverables" => Some(View::Deliverables),
            "clientInfo" => Some(View::ClientInfo),
            "chat" => Some(View::Chat),
            "reports" => Some(View::Reports),
            "users" => Some(View::Users),
            _ => None,
        }
    }
}

/// Views a client-role user reaches when no explicit allow-list is set
pub const DEFAULT_CLIENT_VIEWS: [View; 7] = [
    View::Dashboard,
    View::Assessments,
    View::Evolution,
    View::Journeys,
    View::WeeklyPlan,
    View::Deliverables,
    View::Chat,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    /// Unique across all users, compared case-insensitively
    pub username: String,
    /// Compared as stored; plaintext for parity with the legacy data
    pub password: String,
    #[serde(default)]
    pub role: Role,
    /// Required for client-role users; the client they are scoped to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Explicit allow-list overriding the role default
    #[serde(
        default,
        deserialize_with = "views_from_wire",
        skip_serializing_if = "Option::is_none"
    )]
    pub accessible_views: Option<BTreeSet<View>>,
}

/// Parse persisted view identifiers, dropping anything outside the enum.
fn views_from_wire<'de, D>(deserializer: D) -> Result<Option<BTreeSet<View>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|ids| {
        ids.iter()
            .filter_map(|id| {
                let view = View::from_str(id);
                if view.is_none() {
                    tracing::warn!(view = %id, "dropping unknown view identifier");
                }
                view
            })
            .collect()
    }))
}

impl User {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        role: Role,
        client_id: Option<String>,
    ) -> Self {
        Self {
            id: new_id(),
            username: username.into(),
            password: password.into(),
            role,
            client_id,
            accessible_views: None,
        }
    }

    /// The views this user may reach: everything for admins, the explicit
    /// allow-list or the fixed default subset for client users.
    pub fn allowed_views(&self) -> BTreeSet<View> {
        match self.role {
            Role::Admin => View::ALL.into_iter().collect(),
            Role::Client => self
                .accessible_views
                .clone()
                .unwrap_or_else(|| DEFAULT_CLIENT_VIEWS.into_iter().collect()),
        }
    }

    pub fn can_access(&self, view: View) -> bool {
        self.allowed_views().contains(&view)
    }
}

impl Entity for User {
    fn id(&self) -> &str {
        &self.id
    }
}
