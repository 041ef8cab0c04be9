//! Avatar service request/response types.

use serde::{Deserialize, Serialize};

/// Script portion of a talk creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalkScript {
    /// Script kind; always `"text"` here
    #[serde(rename = "type")]
    pub kind: String,
    /// The spoken text
    pub input: String,
}

/// Body of `POST /talks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTalkRequest {
    pub script: TalkScript,
    /// Publicly reachable URL of the presenter image
    pub source_url: String,
}

impl CreateTalkRequest {
    pub fn text(script: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            script: TalkScript {
                kind: "text".to_string(),
                input: script.into(),
            },
            source_url: source_url.into(),
        }
    }
}

/// Response of `POST /talks`.
///
/// On failure the service answers 2xx without an `id` and describes the
/// problem in `kind`/`description`/`message`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTalkResponse {
    pub id: Option<String>,
    pub kind: Option<String>,
    pub description: Option<String>,
    pub message: Option<String>,
}

impl CreateTalkResponse {
    /// Best-effort error detail for a response without an id.
    pub fn error_detail(&self) -> String {
        let desc = self
            .description
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| "Unknown error".to_string());
        match &self.kind {
            Some(kind) => format!("{kind} - {desc}"),
            None => desc,
        }
    }
}

/// Response of `GET /talks/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TalkStatusResponse {
    pub status: String,
    pub result_url: Option<String>,
    /// Error payload; shape varies across failures, so it is kept opaque
    pub error: Option<serde_json::Value>,
    pub result: Option<TalkResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TalkResult {
    pub error: Option<serde_json::Value>,
}

impl TalkStatusResponse {
    /// Best-effort error detail for an errored talk.
    pub fn error_detail(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.result.as_ref().and_then(|r| r.error.clone()))
            .map(|v| match v {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .unwrap_or_else(|| "Unknown processing error".to_string())
    }
}
