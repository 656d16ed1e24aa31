use serde::Deserialize;
use serde_json::{Map, Value};

/// The submit payload as the client sent it. Fields are optional so a
/// missing key and an empty string fail validation the same way.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SubmitRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub response: Option<String>,
}

/// A validated submission, ready to insert.
#[derive(Debug)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub response: String,
}

impl SubmitRequest {
    /// Presence check only: every field must be there and non-empty. No
    /// format validation, matching what the form accepts.
    pub fn validate(self) -> Result<NewSubmission, String> {
        match (
            non_empty(self.name),
            non_empty(self.email),
            non_empty(self.response),
        ) {
            (Some(name), Some(email), Some(response)) => Ok(NewSubmission {
                name,
                email,
                response,
            }),
            _ => Err("Missing required fields".to_string()),
        }
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

/// Parse a request body based on Content-Type header.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<SubmitRequest, String> {
    let ct = content_type.unwrap_or("application/json");

    if ct.contains("application/json") {
        serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))
    } else if ct.contains("application/x-www-form-urlencoded") {
        parse_form_urlencoded(body)
    } else {
        // Try JSON first, then form-urlencoded
        serde_json::from_slice(body)
            .map_err(|e| format!("Unable to parse body: {e}"))
            .or_else(|_| parse_form_urlencoded(body))
    }
}

fn parse_form_urlencoded(body: &[u8]) -> Result<SubmitRequest, String> {
    let body_str = std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;

    let mut map = Map::new();
    for (k, v) in form_urlencoded::parse(body_str.as_bytes()) {
        map.insert(k.into_owned(), Value::String(v.into_owned()));
    }

    serde_json::from_value(Value::Object(map)).map_err(|e| format!("Invalid form data: {e}"))
}
