//! Service resource types.

use super::common::{ApiResource, PaginatedResponse, Relationship, RelationshipList, SingleResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Pending,
    Active,
    Cancelled,
    Suspended,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceAttributes {
    pub id: u64,
    pub quantity: u32,
    /// Decimal amount serialized as a string by the API
    pub price: String,
    pub status: ServiceStatus,
    pub currency_code: String,
    pub expires_at: Option<String>,
    pub updated_at: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRelationships {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<Relationship>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Relationship>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Relationship>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Relationship>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoices: Option<RelationshipList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<Relationship>,
}

pub type ServiceResource = ApiResource<ServiceAttributes, ServiceRelationships>;
pub type ServiceResponse = SingleResponse<ServiceResource>;
pub type ServiceListResponse = PaginatedResponse<ServiceResource>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServiceRequest {
    pub product_id: u64,
    pub plan_id: u64,
    pub user_id: u64,
    pub currency_code: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ServiceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateServiceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ServiceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(rename = "filter[quantity]", skip_serializing_if = "Option::is_none")]
    pub filter_quantity: Option<String>,
    #[serde(rename = "filter[price]", skip_serializing_if = "Option::is_none")]
    pub filter_price: Option<String>,
    #[serde(rename = "filter[expires_at]", skip_serializing_if = "Option::is_none")]
    pub filter_expires_at: Option<String>,
    #[serde(rename = "filter[subscription_id]", skip_serializing_if = "Option::is_none")]
    pub filter_subscription_id: Option<String>,
    #[serde(rename = "filter[status]", skip_serializing_if = "Option::is_none")]
    pub filter_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ServiceStatus::Suspended).unwrap(),
            "\"suspended\""
        );
        let parsed: ServiceStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(parsed, ServiceStatus::Active);
    }
}
