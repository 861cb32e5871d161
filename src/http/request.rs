use crate::error::{PaymenterError, Result};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Declarative description of one HTTP call against the API.
///
/// Resource clients build one of these per operation; the executor turns it
/// into exactly one network request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Leading-slash path relative to the configured base URL
    pub path: String,
    /// JSON body; ignored for GET requests
    pub body: Option<Value>,
    /// Query map: scalar, scalar-array or null values
    pub query: Option<Value>,
    /// Header overrides; caller values win over the defaults on collision
    pub headers: Option<HashMap<String, String>>,
}

impl ApiRequest {
    /// Create a request descriptor for the given method and path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: None,
            headers: None,
        }
    }

    /// Attach query parameters, serialized to a flat JSON map.
    pub fn query<T: Serialize>(mut self, params: &T) -> Result<Self> {
        self.query = Some(serde_json::to_value(params).map_err(PaymenterError::network)?);
        Ok(self)
    }

    /// Attach a JSON body.
    pub fn body<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body).map_err(PaymenterError::network)?);
        Ok(self)
    }

    /// Set a header override.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }
}

/// Resolve the headers for a request: fixed defaults first, caller
/// overrides layered on top (overrides win on key collision).
pub fn build_headers(
    api_key: &str,
    overrides: Option<&HashMap<String, String>>,
) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("Authorization".to_string(), format!("Bearer {}", api_key));
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers.insert("Accept".to_string(), "application/vnd.api+json".to_string());

    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            headers.insert(key.clone(), value.clone());
        }
    }

    headers
}
