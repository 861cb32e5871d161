//! Users API client.

use crate::error::Result;
use crate::http::{ApiRequest, ApiResponse, HttpClient};
use crate::types::users::{
    CreateUserRequest, UpdateUserRequest, UserListParams, UserListResponse, UserResponse,
};
use reqwest::Method;
use serde_json::{json, Value};

const BASE_PATH: &str = "/v1/admin/users";

/// Client for the users resource.
#[derive(Debug, Clone, Copy)]
pub struct UsersClient<'a> {
    http: &'a HttpClient,
}

impl<'a> UsersClient<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List users, optionally filtered, sorted and paginated.
    pub async fn list(
        &self,
        params: Option<&UserListParams>,
    ) -> Result<ApiResponse<UserListResponse>> {
        let mut request = ApiRequest::new(Method::GET, BASE_PATH);
        if let Some(params) = params {
            request = request.query(params)?;
        }
        self.http.request(request).await
    }

    /// Fetch one user by id, optionally including related resources.
    pub async fn get(&self, user_id: u64, include: Option<&str>) -> Result<ApiResponse<UserResponse>> {
        let mut request = ApiRequest::new(Method::GET, format!("{}/{}", BASE_PATH, user_id));
        if let Some(include) = include {
            request = request.query(&json!({ "include": include }))?;
        }
        self.http.request(request).await
    }

    /// Create a user.
    pub async fn create(&self, data: &CreateUserRequest) -> Result<ApiResponse<UserResponse>> {
        let request = ApiRequest::new(Method::POST, BASE_PATH).body(data)?;
        self.http.request(request).await
    }

    /// Update an existing user.
    pub async fn update(
        &self,
        user_id: u64,
        data: &UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>> {
        let request =
            ApiRequest::new(Method::PUT, format!("{}/{}", BASE_PATH, user_id)).body(data)?;
        self.http.request(request).await
    }

    /// Delete a user.
    pub async fn delete(&self, user_id: u64) -> Result<ApiResponse<Value>> {
        let request = ApiRequest::new(Method::DELETE, format!("{}/{}", BASE_PATH, user_id));
        self.http.request(request).await
    }
}
