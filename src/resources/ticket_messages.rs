//! Ticket Messages API client.
//!
//! Messages are immutable once created, so this client exposes no `update`
//! operation.

use crate::error::Result;
use crate::http::{ApiRequest, ApiResponse, HttpClient};
use crate::types::ticket_messages::{
    CreateTicketMessageRequest, TicketMessageListParams, TicketMessageListResponse, TicketMessageResponse
};
use reqwest::Method;
use serde_json::{json, Value};

const BASE_PATH: &str = "/v1/admin/ticket-messages";

/// Client for the ticket messages resource.
#[derive(Debug, Clone, Copy)]
pub struct TicketMessagesClient<'a> {
    http: &'a HttpClient,
}

impl<'a> TicketMessagesClient<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List ticket messages, optionally filtered, sorted and paginated.
    pub async fn list(
        &self,
        params: Option<&TicketMessageListParams>,
    ) -> Result<ApiResponse<TicketMessageListResponse>> {
        let mut request = ApiRequest::new(Method::GET, BASE_PATH);
        if let Some(params) = params {
            request = request.query(params)?;
        }
        self.http.request(request).await
    }

    /// Fetch one ticket message by id, optionally including related resources.
    pub async fn get(
        &self,
        ticket_message_id: u64,
        include: Option<&str>,
    ) -> Result<ApiResponse<TicketMessageResponse>> {
        let mut request = ApiRequest::new(Method::GET, format!("{}/{}", BASE_PATH, ticket_message_id));
        if let Some(include) = include {
            request = request.query(&json!({ "include": include }))?;
        }
        self.http.request(request).await
    }

    /// Create a ticket message.
    pub async fn create(
        &self,
        data: &CreateTicketMessageRequest,
    ) -> Result<ApiResponse<TicketMessageResponse>> {
        let request = ApiRequest::new(Method::POST, BASE_PATH).body(data)?;
        self.http.request(request).await
    }

    /// Delete a ticket message.
    pub async fn delete(&self, ticket_message_id: u64) -> Result<ApiResponse<Value>> {
        let request = ApiRequest::new(Method::DELETE, format!("{}/{}", BASE_PATH, ticket_message_id));
        self.http.request(request).await
    }
}
