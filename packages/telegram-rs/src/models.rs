use serde::{Deserialize, Serialize};

/// Request body for the `sendMessage` method.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub chat_id: String,
    pub text: String,
    pub parse_mode: String,
    pub disable_web_page_preview: bool,
}

/// Envelope every Bot API method answers with.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub result: Option<T>,
}

/// The delivered message, as echoed back by the Bot API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SentMessage {
    pub message_id: i64,
}
