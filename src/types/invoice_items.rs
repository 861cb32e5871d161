//! Invoice item resource types.

use super::common::{ApiResource, PaginatedResponse, Relationship, SingleResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceItemAttributes {
    pub id: u64,
    pub description: Option<String>,
    pub quantity: u32,
    /// Decimal amount serialized as a string by the API
    pub price: String,
    pub reference_type: Option<String>,
    pub reference_id: Option<u64>,
    pub updated_at: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceItemRelationships {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Relationship>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice: Option<Relationship>,
}

pub type InvoiceItemResource = ApiResource<InvoiceItemAttributes, InvoiceItemRelationships>;
pub type InvoiceItemResponse = SingleResponse<InvoiceItemResource>;
pub type InvoiceItemListResponse = PaginatedResponse<InvoiceItemResource>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvoiceItemRequest {
    pub invoice_id: u64,
    pub description: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateInvoiceItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceItemListParams {
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
    #[serde(rename = "filter[quantity]", skip_serializing_if = "Option::is_none")]
    pub filter_quantity: Option<String>,
    #[serde(rename = "filter[price]", skip_serializing_if = "Option::is_none")]
    pub filter_price: Option<String>,
    #[serde(rename = "filter[reference_type]", skip_serializing_if = "Option::is_none")]
    pub filter_reference_type: Option<String>,
    #[serde(rename = "filter[reference_id]", skip_serializing_if = "Option::is_none")]
    pub filter_reference_id: Option<String>,
}
