//! Credits API client.

use crate::error::Result;
use crate::http::{ApiRequest, ApiResponse, HttpClient};
use crate::types::credits::{
    CreateCreditRequest, CreditListParams, CreditListResponse, CreditResponse, UpdateCreditRequest
};
use reqwest::Method;
use serde_json::{json, Value};

const BASE_PATH: &str = "/v1/admin/credits";

/// Client for the credits resource.
#[derive(Debug, Clone, Copy)]
pub struct CreditsClient<'a> {
    http: &'a HttpClient,
}

impl<'a> CreditsClient<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List credits, optionally filtered, sorted and paginated.
    pub async fn list(
        &self,
        params: Option<&CreditListParams>,
    ) -> Result<ApiResponse<CreditListResponse>> {
        let mut request = ApiRequest::new(Method::GET, BASE_PATH);
        if let Some(params) = params {
            request = request.query(params)?;
        }
        self.http.request(request).await
    }

    /// Fetch one credit by id, optionally including related resources.
    pub async fn get(
        &self,
        credit_id: u64,
        include: Option<&str>,
    ) -> Result<ApiResponse<CreditResponse>> {
        let mut request = ApiRequest::new(Method::GET, format!("{}/{}", BASE_PATH, credit_id));
        if let Some(include) = include {
            request = request.query(&json!({ "include": include }))?;
        }
        self.http.request(request).await
    }

    /// Create a credit.
    pub async fn create(
        &self,
        data: &CreateCreditRequest,
    ) -> Result<ApiResponse<CreditResponse>> {
        let request = ApiRequest::new(Method::POST, BASE_PATH).body(data)?;
        self.http.request(request).await
    }

    /// Update an existing credit.
    pub async fn update(
        &self,
        credit_id: u64,
        data: &UpdateCreditRequest,
    ) -> Result<ApiResponse<CreditResponse>> {
        let request =
            ApiRequest::new(Method::PUT, format!("{}/{}", BASE_PATH, credit_id)).body(data)?;
        self.http.request(request).await
    }

    /// Delete a credit.
    pub async fn delete(&self, credit_id: u64) -> Result<ApiResponse<Value>> {
        let request = ApiRequest::new(Method::DELETE, format!("{}/{}", BASE_PATH, credit_id));
        self.http.request(request).await
    }
}
