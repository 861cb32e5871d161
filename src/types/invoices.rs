//! Invoice resource types.

use super::common::{ApiResource, PaginatedResponse, Relationship, RelationshipList, SingleResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceAttributes {
    pub id: u64,
    pub status: InvoiceStatus,
    pub currency_code: String,
    pub due_at: Option<String>,
    pub updated_at: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRelationships {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Relationship>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<RelationshipList>,
}

pub type InvoiceResource = ApiResource<InvoiceAttributes, InvoiceRelationships>;
pub type InvoiceResponse = SingleResponse<InvoiceResource>;
pub type InvoiceListResponse = PaginatedResponse<InvoiceResource>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvoiceRequest {
    pub user_id: u64,
    pub currency_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateInvoiceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceListParams {
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
    #[serde(rename = "filter[currency_code]", skip_serializing_if = "Option::is_none")]
    pub filter_currency_code: Option<String>,
    #[serde(rename = "filter[user_id]", skip_serializing_if = "Option::is_none")]
    pub filter_user_id: Option<String>,
    #[serde(rename = "filter[status]", skip_serializing_if = "Option::is_none")]
    pub filter_status: Option<String>,
}
