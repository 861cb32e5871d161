//! Invoice Items API client.

use crate::error::Result;
use crate::http::{ApiRequest, ApiResponse, HttpClient};
use crate::types::invoice_items::{
    CreateInvoiceItemRequest, InvoiceItemListParams, InvoiceItemListResponse, InvoiceItemResponse, UpdateInvoiceItemRequest
};
use reqwest::Method;
use serde_json::{json, Value};

const BASE_PATH: &str = "/v1/admin/invoice-items";

/// Client for the invoice items resource.
#[derive(Debug, Clone, Copy)]
pub struct InvoiceItemsClient<'a> {
    http: &'a HttpClient,
}

impl<'a> InvoiceItemsClient<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List invoice items, optionally filtered, sorted and paginated.
    pub async fn list(
        &self,
        params: Option<&InvoiceItemListParams>,
    ) -> Result<ApiResponse<InvoiceItemListResponse>> {
        let mut request = ApiRequest::new(Method::GET, BASE_PATH);
        if let Some(params) = params {
            request = request.query(params)?;
        }
        self.http.request(request).await
    }

    /// Fetch one invoice item by id, optionally including related resources.
    pub async fn get(
        &self,
        invoice_item_id: u64,
        include: Option<&str>,
    ) -> Result<ApiResponse<InvoiceItemResponse>> {
        let mut request = ApiRequest::new(Method::GET, format!("{}/{}", BASE_PATH, invoice_item_id));
        if let Some(include) = include {
            request = request.query(&json!({ "include": include }))?;
        }
        self.http.request(request).await
    }

    /// Create an invoice item.
    pub async fn create(
        &self,
        data: &CreateInvoiceItemRequest,
    ) -> Result<ApiResponse<InvoiceItemResponse>> {
        let request = ApiRequest::new(Method::POST, BASE_PATH).body(data)?;
        self.http.request(request).await
    }

    /// Update an existing invoice item.
    pub async fn update(
        &self,
        invoice_item_id: u64,
        data: &UpdateInvoiceItemRequest,
    ) -> Result<ApiResponse<InvoiceItemResponse>> {
        let request =
            ApiRequest::new(Method::PUT, format!("{}/{}", BASE_PATH, invoice_item_id)).body(data)?;
        self.http.request(request).await
    }

    /// Delete an invoice item.
    pub async fn delete(&self, invoice_item_id: u64) -> Result<ApiResponse<Value>> {
        let request = ApiRequest::new(Method::DELETE, format!("{}/{}", BASE_PATH, invoice_item_id));
        self.http.request(request).await
    }
}
