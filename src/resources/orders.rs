//! Orders API client.

use crate::error::Result;
use crate::http::{ApiRequest, ApiResponse, HttpClient};
use crate::types::orders::{
    CreateOrderRequest, OrderListParams, OrderListResponse, OrderResponse, UpdateOrderRequest
};
use reqwest::Method;
use serde_json::{json, Value};

const BASE_PATH: &str = "/v1/admin/orders";

/// Client for the orders resource.
#[derive(Debug, Clone, Copy)]
pub struct OrdersClient<'a> {
    http: &'a HttpClient,
}

impl<'a> OrdersClient<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List orders, optionally filtered, sorted and paginated.
    pub async fn list(
        &self,
        params: Option<&OrderListParams>,
    ) -> Result<ApiResponse<OrderListResponse>> {
        let mut request = ApiRequest::new(Method::GET, BASE_PATH);
        if let Some(params) = params {
            request = request.query(params)?;
        }
        self.http.request(request).await
    }

    /// Fetch one order by id, optionally including related resources.
    pub async fn get(
        &self,
        order_id: u64,
        include: Option<&str>,
    ) -> Result<ApiResponse<OrderResponse>> {
        let mut request = ApiRequest::new(Method::GET, format!("{}/{}", BASE_PATH, order_id));
        if let Some(include) = include {
            request = request.query(&json!({ "include": include }))?;
        }
        self.http.request(request).await
    }

    /// Create an order.
    pub async fn create(
        &self,
        data: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>> {
        let request = ApiRequest::new(Method::POST, BASE_PATH).body(data)?;
        self.http.request(request).await
    }

    /// Update an existing order.
    pub async fn update(
        &self,
        order_id: u64,
        data: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>> {
        let request =
            ApiRequest::new(Method::PUT, format!("{}/{}", BASE_PATH, order_id)).body(data)?;
        self.http.request(request).await
    }

    /// Delete an order.
    pub async fn delete(&self, order_id: u64) -> Result<ApiResponse<Value>> {
        let request = ApiRequest::new(Method::DELETE, format!("{}/{}", BASE_PATH, order_id));
        self.http.request(request).await
    }
}
