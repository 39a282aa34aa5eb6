//! HTTP transport: request construction and the network round trip.

use crate::config::ClientConfig;
use crate::endpoint::Method;
use crate::error::Error;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

/// Request body and its content type.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// Serialized as `application/json`. Operations without a payload send
    /// `Json(Value::Null)`, which the service accepts as an empty body.
    Json(Value),
    /// Passed through verbatim as `application/sql`.
    Sql(String),
}

/// A fully resolved request: the key has already been selected and the URL
/// already composed by the facade.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub key: String,
    pub body: RequestBody,
}

/// Raw response before decoding.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Seam between the facade and the network. Production code uses
/// [`HttpTransport`]; tests substitute a mock.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, Error>;
}

/// Transport over a shared `reqwest::Client`. Reentrant; holds no per-call
/// state, so one instance serves any number of concurrent callers.
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;
        Ok(HttpTransport { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, Error> {
        tracing::debug!(method = request.method.as_str(), url = %request.url, "request");
        let builder = self
            .http
            .request(request.method.as_http(), &request.url)
            .header(AUTHORIZATION, request.key);
        let builder = match request.body {
            RequestBody::Json(payload) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(payload.to_string()),
            RequestBody::Sql(statement) => builder
                .header(CONTENT_TYPE, "application/sql")
                .body(statement),
        };
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_body_serializes_verbatim() {
        let body = RequestBody::Json(json!({"user1": {"age": 22}}));
        match body {
            RequestBody::Json(v) => assert_eq!(v.to_string(), r#"{"user1":{"age":22}}"#),
            _ => unreachable!(),
        }
    }

    #[test]
    fn insecure_tls_is_opt_in() {
        let config = ClientConfig::default();
        assert!(!config.accept_invalid_certs);
        assert!(HttpTransport::new(&config).is_ok());
        assert!(HttpTransport::new(&config.accept_invalid_certs(true)).is_ok());
    }
}
