use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde_json::Value;

use crate::api::endpoint::{ApiRequest, Endpoint, Method};
use crate::api::error::ApiError;

/// Thin blocking client over the wordbook backend. Callers run it off the
/// UI thread; see `api::task`.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// `timeout: None` disables the transport timeout entirely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("wordbook/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Run one request to completion. Reads return the decoded JSON body;
    /// mutations return whatever JSON the server sent, or `Null`.
    pub fn execute(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        let endpoint = request.endpoint();
        match endpoint.method() {
            Method::Get => self.get(endpoint),
            Method::Post => {
                let body = request.body().unwrap_or(Value::Null);
                self.post(endpoint, &body)
            }
        }
    }

    pub fn get(&self, endpoint: Endpoint) -> Result<Value, ApiError> {
        let response = self.http.get(self.url(endpoint)).send()?;
        let response = ensure_success(endpoint, response)?;
        let text = response.text()?;
        serde_json::from_str(&text).map_err(|source| ApiError::Decode {
            path: endpoint.path(),
            source,
        })
    }

    pub fn post(&self, endpoint: Endpoint, body: &Value) -> Result<Value, ApiError> {
        let response = self.http.post(self.url(endpoint)).json(body).send()?;
        let response = ensure_success(endpoint, response)?;
        // A 2xx is all the caller relies on; the body is best-effort.
        let text = response.text().unwrap_or_default();
        Ok(serde_json::from_str(&text).unwrap_or(Value::Null))
    }
}

fn ensure_success(endpoint: Endpoint, response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            path: endpoint.path(),
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:8000/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url(Endpoint::Dashboard), "http://localhost:8000/");
        assert_eq!(
            client.url(Endpoint::UpdateBookmark),
            "http://localhost:8000/update/bookmark"
        );
    }

    #[test]
    fn test_url_keeps_path_prefix() {
        let client = ApiClient::new("http://example.test/api", None).unwrap();
        assert_eq!(client.url(Endpoint::Learning), "http://example.test/api/learning");
    }
}
