//! Minimal Telegram Bot API client.
//!
//! Covers the one method the watcher needs: sending a MarkdownV2 text message
//! to a group chat.

pub mod error;
pub mod models;

pub use error::{Result, TelegramError};
pub use models::{ApiResponse, SendMessageRequest, SentMessage};

const BASE_URL: &str = "https://api.telegram.org";

/// Characters MarkdownV2 requires escaping in regular text.
const MARKDOWN_RESERVED: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

#[derive(Debug, Clone)]
pub struct TelegramOptions {
    pub bot_token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone)]
pub struct TelegramService {
    options: TelegramOptions,
    client: reqwest::Client,
}

impl TelegramService {
    pub fn new(options: TelegramOptions) -> Self {
        Self {
            options,
            client: reqwest::Client::new(),
        }
    }

    /// Send a MarkdownV2 message to the configured group chat.
    pub async fn send_group_message(&self, text: &str) -> Result<SentMessage> {
        let url = format!("{}/bot{}/sendMessage", BASE_URL, self.options.bot_token);

        let body = SendMessageRequest {
            chat_id: self.options.chat_id.clone(),
            text: text.to_string(),
            parse_mode: "MarkdownV2".to_string(),
            disable_web_page_preview: true,
        };

        let resp = self.client.post(&url).json(&body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(TelegramError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiResponse<SentMessage> = resp.json().await?;
        if !envelope.ok {
            return Err(TelegramError::Rejected {
                description: envelope
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            });
        }

        let message = envelope.result.ok_or_else(|| TelegramError::Rejected {
            description: "ok response without result".to_string(),
        })?;

        tracing::info!(message_id = message.message_id, "Message delivered");
        Ok(message)
    }
}

/// Escape reserved MarkdownV2 characters in regular text.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_RESERVED.contains(&c) || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escape the characters MarkdownV2 reserves inside an inline link target.
pub fn escape_url(url: &str) -> String {
    let mut escaped = String::with_capacity(url.len());
    for c in url.chars() {
        if c == '(' || c == ')' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markdown() {
        assert_eq!(
            escape_markdown("org/model-v1.2_beta"),
            "org/model\\-v1\\.2\\_beta"
        );
        assert_eq!(escape_markdown("plain"), "plain");
        assert_eq!(escape_markdown("a*b[c]"), "a\\*b\\[c\\]");
    }

    #[test]
    fn test_escape_markdown_backslash() {
        assert_eq!(escape_markdown("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_escape_url_only_touches_link_reserved_chars() {
        assert_eq!(
            escape_url("https://huggingface.co/org/model-v1.2(beta)"),
            "https://huggingface.co/org/model-v1.2\\(beta\\)"
        );
        assert_eq!(
            escape_url("https://huggingface.co/org/model"),
            "https://huggingface.co/org/model"
        );
    }
}
