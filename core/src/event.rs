use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An API Gateway proxy event as delivered by the hosting runtime.
///
/// Only the fields the handler looks at are modelled; everything else in the
/// gateway payload (`resource`, `queryStringParameters`, `body`, ...) is ignored
/// on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct InboundRequest {
    #[serde(rename = "httpMethod", default)]
    pub method: String,
    #[serde(default)]
    pub path: String,
    /// The gateway sends `null` when the request carried no headers.
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
}

impl InboundRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            headers: None,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }
}

/// JSON payload returned in the response body.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResponseBody {
    pub message: String,
    pub status: String,
    /// Echoed header value, empty when the caller sent none.
    pub authorization: String,
}

/// An API Gateway proxy response handed back to the hosting runtime.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundResponse {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    pub body: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_base64_encoded: bool,
}

impl OutboundResponse {
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            headers: HashMap::new(),
            body: body.into(),
            is_base64_encoded: false,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
