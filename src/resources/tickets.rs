//! Tickets API client.

use crate::error::Result;
use crate::http::{ApiRequest, ApiResponse, HttpClient};
use crate::types::tickets::{
    CreateTicketRequest, TicketListParams, TicketListResponse, TicketResponse, UpdateTicketRequest
};
use reqwest::Method;
use serde_json::{json, Value};

const BASE_PATH: &str = "/v1/admin/tickets";

/// Client for the tickets resource.
#[derive(Debug, Clone, Copy)]
pub struct TicketsClient<'a> {
    http: &'a HttpClient,
}

impl<'a> TicketsClient<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List tickets, optionally filtered, sorted and paginated.
    pub async fn list(
        &self,
        params: Option<&TicketListParams>,
    ) -> Result<ApiResponse<TicketListResponse>> {
        let mut request = ApiRequest::new(Method::GET, BASE_PATH);
        if let Some(params) = params {
            request = request.query(params)?;
        }
        self.http.request(request).await
    }

    /// Fetch one ticket by id, optionally including related resources.
    pub async fn get(
        &self,
        ticket_id: u64,
        include: Option<&str>,
    ) -> Result<ApiResponse<TicketResponse>> {
        let mut request = ApiRequest::new(Method::GET, format!("{}/{}", BASE_PATH, ticket_id));
        if let Some(include) = include {
            request = request.query(&json!({ "include": include }))?;
        }
        self.http.request(request).await
    }

    /// Create a ticket.
    pub async fn create(
        &self,
        data: &CreateTicketRequest,
    ) -> Result<ApiResponse<TicketResponse>> {
        let request = ApiRequest::new(Method::POST, BASE_PATH).body(data)?;
        self.http.request(request).await
    }

    /// Update an existing ticket.
    pub async fn update(
        &self,
        ticket_id: u64,
        data: &UpdateTicketRequest,
    ) -> Result<ApiResponse<TicketResponse>> {
        let request =
            ApiRequest::new(Method::PUT, format!("{}/{}", BASE_PATH, ticket_id)).body(data)?;
        self.http.request(request).await
    }

    /// Delete a ticket.
    pub async fn delete(&self, ticket_id: u64) -> Result<ApiResponse<Value>> {
        let request = ApiRequest::new(Method::DELETE, format!("{}/{}", BASE_PATH, ticket_id));
        self.http.request(request).await
    }
}
