//! Invoices API client.

use crate::error::Result;
use crate::http::{ApiRequest, ApiResponse, HttpClient};
use crate::types::invoices::{
    CreateInvoiceRequest, InvoiceListParams, InvoiceListResponse, InvoiceResponse, UpdateInvoiceRequest
};
use reqwest::Method;
use serde_json::{json, Value};

const BASE_PATH: &str = "/v1/admin/invoices";

/// Client for the invoices resource.
#[derive(Debug, Clone, Copy)]
pub struct InvoicesClient<'a> {
    http: &'a HttpClient,
}

impl<'a> InvoicesClient<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List invoices, optionally filtered, sorted and paginated.
    pub async fn list(
        &self,
        params: Option<&InvoiceListParams>,
    ) -> Result<ApiResponse<InvoiceListResponse>> {
        let mut request = ApiRequest::new(Method::GET, BASE_PATH);
        if let Some(params) = params {
            request = request.query(params)?;
        }
        self.http.request(request).await
    }

    /// Fetch one invoice by id, optionally including related resources.
    pub async fn get(
        &self,
        invoice_id: u64,
        include: Option<&str>,
    ) -> Result<ApiResponse<InvoiceResponse>> {
        let mut request = ApiRequest::new(Method::GET, format!("{}/{}", BASE_PATH, invoice_id));
        if let Some(include) = include {
            request = request.query(&json!({ "include": include }))?;
        }
        self.http.request(request).await
    }

    /// Create an invoice.
    pub async fn create(
        &self,
        data: &CreateInvoiceRequest,
    ) -> Result<ApiResponse<InvoiceResponse>> {
        let request = ApiRequest::new(Method::POST, BASE_PATH).body(data)?;
        self.http.request(request).await
    }

    /// Update an existing invoice.
    pub async fn update(
        &self,
        invoice_id: u64,
        data: &UpdateInvoiceRequest,
    ) -> Result<ApiResponse<InvoiceResponse>> {
        let request =
            ApiRequest::new(Method::PUT, format!("{}/{}", BASE_PATH, invoice_id)).body(data)?;
        self.http.request(request).await
    }

    /// Delete an invoice.
    pub async fn delete(&self, invoice_id: u64) -> Result<ApiResponse<Value>> {
        let request = ApiRequest::new(Method::DELETE, format!("{}/{}", BASE_PATH, invoice_id));
        self.http.request(request).await
    }
}
