//! Order resource types.

use super::common::{ApiResource, PaginatedResponse, Relationship, RelationshipList, SingleResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderAttributes {
    pub id: u64,
    pub currency_code: String,
    pub user_id: u64,
    pub updated_at: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRelationships {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<RelationshipList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Relationship>,
}

pub type OrderResource = ApiResource<OrderAttributes, OrderRelationships>;
pub type OrderResponse = SingleResponse<OrderResource>;
pub type OrderListResponse = PaginatedResponse<OrderResource>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: u64,
    pub currency_code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderListParams {
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
}
