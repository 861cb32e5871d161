//! Services API client.

use crate::error::Result;
use crate::http::{ApiRequest, ApiResponse, HttpClient};
use crate::types::services::{
    CreateServiceRequest, ServiceListParams, ServiceListResponse, ServiceResponse, UpdateServiceRequest
};
use reqwest::Method;
use serde_json::{json, Value};

const BASE_PATH: &str = "/v1/admin/services";

/// Client for the services resource.
#[derive(Debug, Clone, Copy)]
pub struct ServicesClient<'a> {
    http: &'a HttpClient,
}

impl<'a> ServicesClient<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List services, optionally filtered, sorted and paginated.
    pub async fn list(
        &self,
        params: Option<&ServiceListParams>,
    ) -> Result<ApiResponse<ServiceListResponse>> {
        let mut request = ApiRequest::new(Method::GET, BASE_PATH);
        if let Some(params) = params {
            request = request.query(params)?;
        }
        self.http.request(request).await
    }

    /// Fetch one service by id, optionally including related resources.
    pub async fn get(
        &self,
        service_id: u64,
        include: Option<&str>,
    ) -> Result<ApiResponse<ServiceResponse>> {
        let mut request = ApiRequest::new(Method::GET, format!("{}/{}", BASE_PATH, service_id));
        if let Some(include) = include {
            request = request.query(&json!({ "include": include }))?;
        }
        self.http.request(request).await
    }

    /// Create a service.
    pub async fn create(
        &self,
        data: &CreateServiceRequest,
    ) -> Result<ApiResponse<ServiceResponse>> {
        let request = ApiRequest::new(Method::POST, BASE_PATH).body(data)?;
        self.http.request(request).await
    }

    /// Update an existing service.
    pub async fn update(
        &self,
        service_id: u64,
        data: &UpdateServiceRequest,
    ) -> Result<ApiResponse<ServiceResponse>> {
        let request =
            ApiRequest::new(Method::PUT, format!("{}/{}", BASE_PATH, service_id)).body(data)?;
        self.http.request(request).await
    }

    /// Delete a service.
    pub async fn delete(&self, service_id: u64) -> Result<ApiResponse<Value>> {
        let request = ApiRequest::new(Method::DELETE, format!("{}/{}", BASE_PATH, service_id));
        self.http.request(request).await
    }
}
