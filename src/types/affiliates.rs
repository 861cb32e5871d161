//! Affiliate resource types.

use super::common::{ApiResource, PaginatedResponse, Relationship, RelationshipList, SingleResponse};
use serde::{Deserialize, Serialize};

/// The API serializes affiliate counters as strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffiliateAttributes {
    pub id: String,
    pub code: String,
    pub enabled: String,
    pub visitors: String,
    pub reward: String,
    pub discount: String,
    pub earnings: String,
    pub updated_at: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffiliateRelationships {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Relationship>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<RelationshipList>,
}

pub type AffiliateResource = ApiResource<AffiliateAttributes, AffiliateRelationships>;
pub type AffiliateResponse = SingleResponse<AffiliateResource>;
pub type AffiliateListResponse = PaginatedResponse<AffiliateResource>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAffiliateRequest {
    pub user_id: u64,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAffiliateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AffiliateListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(rename = "filter[affiliate_id]", skip_serializing_if = "Option::is_none")]
    pub filter_affiliate_id: Option<String>,
    #[serde(rename = "filter[code]", skip_serializing_if = "Option::is_none")]
    pub filter_code: Option<String>,
    #[serde(rename = "filter[visitors]", skip_serializing_if = "Option::is_none")]
    pub filter_visitors: Option<String>,
    #[serde(rename = "filter[reward]", skip_serializing_if = "Option::is_none")]
    pub filter_reward: Option<String>,
    #[serde(rename = "filter[discount]", skip_serializing_if = "Option::is_none")]
    pub filter_discount: Option<String>,
}
