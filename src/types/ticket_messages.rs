//! Ticket message resource types.
//!
//! Messages are immutable once created, so there is no update request type.

use super::common::{ApiResource, PaginatedResponse, Relationship, RelationshipList, SingleResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketMessageAttributes {
    pub id: u64,
    pub message: String,
    pub updated_at: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketMessageRelationships {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Relationship>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<Relationship>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<RelationshipList>,
}

pub type TicketMessageResource = ApiResource<TicketMessageAttributes, TicketMessageRelationships>;
pub type TicketMessageResponse = SingleResponse<TicketMessageResource>;
pub type TicketMessageListResponse = PaginatedResponse<TicketMessageResource>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTicketMessageRequest {
    pub message: String,
    pub user_id: u64,
    pub ticket_id: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketMessageListParams {
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
}
