//! Manage items. Field names follow the API's camelCase.

use serde::{Deserialize, Serialize};

use super::Reference;

/// A team on a service board (`service/boards/{id}/teams`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardTeam {
    /// Record id; `None` for teams not yet created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Team name.
    pub name: String,
    /// Member leading the team.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_leader: Option<Reference>,
    /// Member record ids on the team.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<i64>,
    /// True if this is the board's default team.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_flag: Option<bool>,
    /// Notify the team when a ticket is deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_on_ticket_delete: Option<bool>,
    /// Board the team belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_id: Option<i64>,
    /// Location of the team.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
    /// Business unit (department) of the team.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_unit_id: Option<i64>,
}

/// A project ticket (`project/tickets`).
///
/// Only the commonly used fields are typed; request the rest as
/// `serde_json::Value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTicket {
    /// Record id; `None` for tickets not yet created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// One-line ticket summary.
    pub summary: String,
    /// Project the ticket belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Reference>,
    /// Project phase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<Reference>,
    /// Service board.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<Reference>,
    /// Ticket status on the board.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Reference>,
    /// Customer company.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Reference>,
    /// Ticket priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Reference>,
    /// Hours budgeted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_hours: Option<f64>,
    /// Hours logged so far.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_hours: Option<f64>,
    /// True once the ticket is closed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_flag: Option<bool>,
    /// Due date as sent by the server (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_date: Option<String>,
}
