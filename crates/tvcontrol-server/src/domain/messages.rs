//! JSON request and response bodies for the browser-facing HTTP API.
//!
//! Every request body is a flat JSON object whose fields are all optional at
//! the serde level.  Missing or blank required fields are reported by the
//! application layer as validation errors with a specific message, rather
//! than as opaque deserialization failures.
//!
//! # Message flow
//!
//! ```text
//! Browser → Server:  JSON body  →  *Request   →  RemoteService
//! Server  → Browser: *Response  →  JSON body
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use tvcontrol_core::Device;

// ── Requests ──────────────────────────────────────────────────────────────────

/// `POST /api/connect`
#[derive(Debug, Default, Deserialize)]
pub struct ConnectRequest {
    /// `address:port` of the TV.
    pub host: Option<String>,
}

/// `POST /api/disconnect`
#[derive(Debug, Default, Deserialize)]
pub struct DisconnectRequest {
    /// Disconnect only this host; absent disconnects everything.
    pub host: Option<String>,
}

/// `POST /api/command`
#[derive(Debug, Default, Deserialize)]
pub struct CommandRequest {
    pub action: Option<String>,
    pub serial: Option<String>,
}

/// `POST /api/channel`
///
/// The channel may be sent as `number`, `channel` or `value`, and as either a
/// JSON string or a JSON number.  The first non-null field wins.
#[derive(Debug, Default, Deserialize)]
pub struct ChannelRequest {
    pub number: Option<Value>,
    pub channel: Option<Value>,
    pub value: Option<Value>,
    /// Append an enter key after the digits.  Absent or `null` means `true`;
    /// otherwise read by truthiness, so `0` and `""` mean `false`.
    pub confirm: Option<Value>,
    pub serial: Option<String>,
}

impl ChannelRequest {
    /// Returns the channel as text, or an empty string if none was sent.
    pub fn channel_text(&self) -> String {
        let raw = [&self.number, &self.channel, &self.value]
            .into_iter()
            .flatten()
            .find(|v| !v.is_null());

        match raw {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }

    pub fn confirm(&self) -> bool {
        match &self.confirm {
            None | Some(Value::Null) => true,
            Some(v) => is_truthy(v),
        }
    }
}

/// `POST /api/text`
///
/// `text` may be any JSON scalar; numbers and booleans are typed as their
/// textual form.
#[derive(Debug, Default, Deserialize)]
pub struct TextRequest {
    pub text: Option<Value>,
    pub serial: Option<String>,
}

impl TextRequest {
    /// The text to type, or `None` when it is missing or falsy
    /// (`""`, `0`, `false`, `null`).
    pub fn text_value(&self) -> Option<String> {
        match self.text.as_ref().filter(|v| is_truthy(v))? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// JavaScript-style truthiness, the way browser clients build these bodies.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// ── Responses ─────────────────────────────────────────────────────────────────

/// `GET /api/status`
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub devices: Vec<Device>,
}

/// `POST /api/connect`
#[derive(Debug, Serialize)]
pub struct ConnectResponse {
    /// The tool's own output, e.g. `connected to 192.168.1.30:5555`.
    pub message: String,
    pub connected: bool,
}

/// `POST /api/disconnect`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `POST /api/command`
#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub success: bool,
    pub action: String,
}

/// `POST /api/channel`
#[derive(Debug, Serialize)]
pub struct ChannelResponse {
    pub success: bool,
    pub channel: String,
}

/// `POST /api/text`
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// `GET /healthz`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u128,
}

/// Body of every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Message safe to show the user.
    pub error: String,
    /// Underlying error text, present only for server-side failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
