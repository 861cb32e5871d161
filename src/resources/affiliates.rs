//! Affiliates API client.

use crate::error::Result;
use crate::http::{ApiRequest, ApiResponse, HttpClient};
use crate::types::affiliates::{
    AffiliateListParams, AffiliateListResponse, AffiliateResponse, CreateAffiliateRequest, UpdateAffiliateRequest
};
use reqwest::Method;
use serde_json::{json, Value};

const BASE_PATH: &str = "/v1/admin/affiliates";

/// Client for the affiliates resource.
#[derive(Debug, Clone, Copy)]
pub struct AffiliatesClient<'a> {
    http: &'a HttpClient,
}

impl<'a> AffiliatesClient<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List affiliates, optionally filtered, sorted and paginated.
    pub async fn list(
        &self,
        params: Option<&AffiliateListParams>,
    ) -> Result<ApiResponse<AffiliateListResponse>> {
        let mut request = ApiRequest::new(Method::GET, BASE_PATH);
        if let Some(params) = params {
            request = request.query(params)?;
        }
        self.http.request(request).await
    }

    /// Fetch one affiliate by id, optionally including related resources.
    pub async fn get(
        &self,
        affiliate_id: u64,
        include: Option<&str>,
    ) -> Result<ApiResponse<AffiliateResponse>> {
        let mut request = ApiRequest::new(Method::GET, format!("{}/{}", BASE_PATH, affiliate_id));
        if let Some(include) = include {
            request = request.query(&json!({ "include": include }))?;
        }
        self.http.request(request).await
    }

    /// Create an affiliate.
    pub async fn create(
        &self,
        data: &CreateAffiliateRequest,
    ) -> Result<ApiResponse<AffiliateResponse>> {
        let request = ApiRequest::new(Method::POST, BASE_PATH).body(data)?;
        self.http.request(request).await
    }

    /// Update an existing affiliate.
    pub async fn update(
        &self,
        affiliate_id: u64,
        data: &UpdateAffiliateRequest,
    ) -> Result<ApiResponse<AffiliateResponse>> {
        let request =
            ApiRequest::new(Method::PUT, format!("{}/{}", BASE_PATH, affiliate_id)).body(data)?;
        self.http.request(request).await
    }

    /// Delete an affiliate.
    pub async fn delete(&self, affiliate_id: u64) -> Result<ApiResponse<Value>> {
        let request = ApiRequest::new(Method::DELETE, format!("{}/{}", BASE_PATH, affiliate_id));
        self.http.request(request).await
    }
}
