use crate::config::PaymenterConfig;
use crate::error::{PaymenterError, Result};
use crate::http::request::{build_headers, ApiRequest};
use crate::http::response::{classify, is_json_content_type, ApiResponse};
use crate::url_builder::build_url;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Request executor: performs exactly one HTTP call per invocation.
///
/// Holds the shared read-only configuration and the underlying transport.
/// Concurrent requests through one executor are fully independent.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: PaymenterConfig,
}

impl HttpClient {
    /// Create an executor from a configuration.
    ///
    /// The timeout, if configured, is bound to every request issued through
    /// this executor and aborts the in-flight call once it elapses.
    pub fn new(config: PaymenterConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Execute one request described by `request`.
    ///
    /// Returns the success envelope for 2xx responses; every non-2xx
    /// response and every transport failure is raised as a typed error,
    /// never swallowed.
    pub async fn request<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<ApiResponse<T>> {
        let url = build_url(&self.config.base_url, &request.path, request.query.as_ref())?;
        let headers = build_headers(&self.config.api_key, request.headers.as_ref());

        let mut builder = self.client.request(request.method.clone(), url);
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        // A body is never sent with GET, even if the caller supplied one
        if request.method != Method::GET {
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }
        }

        let response = builder.send().await.map_err(PaymenterError::network)?;

        let status = response.status();
        let response_headers = collect_headers(&response);
        let content_type = response_headers.get("content-type").cloned();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify(status, content_type.as_deref(), &body));
        }

        let data = if status.as_u16() == 204 || !is_json_content_type(content_type.as_deref()) {
            None
        } else {
            let body = response.text().await.map_err(PaymenterError::network)?;
            Some(serde_json::from_str(&body).map_err(PaymenterError::network)?)
        };

        Ok(ApiResponse {
            data,
            status: status.as_u16(),
            headers: response_headers,
        })
    }
}

/// Collect all response headers into a map with lower-cased keys.
/// Values of repeated headers are joined with `", "`.
fn collect_headers(response: &reqwest::Response) -> HashMap<String, String> {
    let mut headers: HashMap<String, String> = HashMap::new();
    for (name, value) in response.headers() {
        if let Ok(value) = value.to_str() {
            headers
                .entry(name.as_str().to_string())
                .and_modify(|existing| {
                    existing.push_str(", ");
                    existing.push_str(value);
                })
                .or_insert_with(|| value.to_string());
        }
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn executor_builds_without_timeout() {
        let config = PaymenterConfig::new("https://example.com/api", "key").unwrap();
        assert!(HttpClient::new(config).is_ok());
    }

    #[test]
    fn executor_builds_with_timeout() {
        let config = PaymenterConfig::new("https://example.com/api", "key")
            .unwrap()
            .with_timeout(Duration::from_secs(10))
            .unwrap();
        assert!(HttpClient::new(config).is_ok());
    }
}
