//! Ticket resource types.

use super::common::{ApiResource, PaginatedResponse, Relationship, RelationshipList, SingleResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Open,
    Closed,
    Replied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
}

/// Departments are capitalized on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketDepartment {
    Support,
    Sales,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketAttributes {
    pub id: u64,
    pub subject: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub assigned_to: Option<u64>,
    pub user_id: u64,
    pub department: Option<TicketDepartment>,
    pub updated_at: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketRelationships {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<RelationshipList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Relationship>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<Relationship>,
}

pub type TicketResource = ApiResource<TicketAttributes, TicketRelationships>;
pub type TicketResponse = SingleResponse<TicketResource>;
pub type TicketListResponse = PaginatedResponse<TicketResource>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTicketRequest {
    pub subject: String,
    pub user_id: u64,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<TicketDepartment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTicketRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<TicketDepartment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TicketPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(rename = "filter[id]", skip_serializing_if = "Option::is_none")]
    pub filter_id: Option<String>,
    #[serde(rename = "filter[user_id]", skip_serializing_if = "Option::is_none")]
    pub filter_user_id: Option<String>,
    #[serde(rename = "filter[status]", skip_serializing_if = "Option::is_none")]
    pub filter_status: Option<String>,
    #[serde(rename = "filter[priority]", skip_serializing_if = "Option::is_none")]
    pub filter_priority: Option<String>,
    #[serde(rename = "filter[department]", skip_serializing_if = "Option::is_none")]
    pub filter_department: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn department_keeps_wire_capitalization() {
        assert_eq!(
            serde_json::to_string(&TicketDepartment::Support).unwrap(),
            "\"Support\""
        );
        let parsed: TicketDepartment = serde_json::from_str("\"Sales\"").unwrap();
        assert_eq!(parsed, TicketDepartment::Sales);
    }

    #[test]
    fn priority_is_lowercase_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&TicketPriority::High).unwrap(),
            "\"high\""
        );
    }
}
