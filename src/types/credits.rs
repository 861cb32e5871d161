//! Credit resource types.

use super::common::{ApiResource, PaginatedResponse, Relationship, SingleResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditAttributes {
    pub id: u64,
    pub currency_code: String,
    /// Decimal amount serialized as a string by the API
    pub amount: String,
    pub updated_at: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditRelationships {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Relationship>,
}

pub type CreditResource = ApiResource<CreditAttributes, CreditRelationships>;
pub type CreditResponse = SingleResponse<CreditResource>;
pub type CreditListResponse = PaginatedResponse<CreditResource>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCreditRequest {
    pub user_id: u64,
    pub currency_code: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCreditRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreditListParams {
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
}
