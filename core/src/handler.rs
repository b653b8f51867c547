use std::collections::HashMap;

use serde::Serialize;
use tracing::info;

use crate::errors::Result;
use crate::event::{InboundRequest, OutboundResponse, ResponseBody};

pub const GREETING: &str = "Hello from test-function!";
pub const SUCCESS_STATUS: &str = "success";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Returns the caller's authorization header, or an empty string.
///
/// The exact-case `Authorization` key takes precedence over the lowercase
/// `authorization` key, even when its value is empty. Values are returned
/// as-is.
pub fn extract_authorization(headers: Option<&HashMap<String, String>>) -> &str {
    let Some(headers) = headers else {
        return "";
    };
    headers
        .get("Authorization")
        .or_else(|| headers.get("authorization"))
        .map(String::as_str)
        .unwrap_or("")
}

/// Handles a single gateway request.
///
/// Method and path are ignored. The response always carries the greeting,
/// the success status and the echoed authorization header.
pub fn handle(request: &InboundRequest) -> Result<OutboundResponse> {
    info!("Received event: {:?}", request);

    let body = ResponseBody {
        message: GREETING.to_string(),
        status: SUCCESS_STATUS.to_string(),
        authorization: extract_authorization(request.headers.as_ref()).to_string(),
    };

    render_json(200, &body)
}

/// Serializes `value` into a JSON response with the given status code.
pub fn render_json<T: Serialize>(status_code: u16, value: &T) -> Result<OutboundResponse> {
    let body = serde_json::to_string(value)?;
    Ok(OutboundResponse::new(status_code, body).with_header("Content-Type", CONTENT_TYPE_JSON))
}
