//! Response decoding and service-error detection.

use crate::error::Error;
use crate::transport::RawResponse;
use serde_json::{Map, Value};

/// Decode a raw response into the service's JSON object, mapping the error
/// envelope and non-2xx statuses into [`Error::Service`].
pub fn decode(response: RawResponse) -> Result<Map<String, Value>, Error> {
    let RawResponse { status, body } = response;

    let object = match serde_json::from_str::<Value>(&body) {
        Ok(Value::Object(object)) if !object.is_empty() => object,
        _ => return Err(Error::service_raw("Response parsing error", body, status)),
    };

    // Service-reported errors come wrapped in an `errors` list; the first
    // entry is authoritative.
    if let Some(Value::Array(errors)) = object.get("errors") {
        if let Some(Value::Object(first)) = errors.first() {
            let message = first
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown Error")
                .to_string();
            let more_info = first.get("more-info").filter(|v| !v.is_null()).cloned();
            return Err(Error::Service {
                message,
                more_info,
                code: status,
            });
        }
    }

    if status >= 400 {
        return Err(Error::service_raw("Unknown Error", body, status));
    }

    Ok(object)
}
