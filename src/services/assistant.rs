//! Teacher AI assistant chat.

use serde_json::json;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::types::ChatReply;

pub const GREETING: &str =
    "Hello! I'm your AI assistant. Ask me anything about your classes, students, or performance!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub content: String,
}

/// Conversation shown in the chat panel; starts with the greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage { speaker: Speaker::Assistant, content: GREETING.to_owned() }],
        }
    }
}

impl ChatLog {
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push_user(&mut self, content: &str) {
        self.messages.push(ChatMessage { speaker: Speaker::User, content: content.to_owned() });
    }

    /// Record the outcome of a chat call as an assistant message.
    pub fn push_result(&mut self, result: Result<ChatReply, ApiError>) {
        let content = match result {
            Ok(reply) => reply.reply,
            Err(e) => format!("Sorry, I encountered an error: {}", e.user_message("Unknown error")),
        };
        self.messages.push(ChatMessage { speaker: Speaker::Assistant, content });
    }
}

/// `POST /teacher/chat` with `{teacher_id, message}`.
///
/// # Errors
///
/// [`ApiError::Rejected`] for a blank message; otherwise the classified
/// request failure.
pub async fn teacher_chat(api: &ApiClient, teacher_id: &str, message: &str) -> Result<ChatReply, ApiError> {
    let message = message.trim();
    if message.is_empty() {
        return Err(ApiError::Rejected("Type a question first.".to_owned()));
    }
    api.post("/teacher/chat")
        .json(json!({"teacher_id": teacher_id, "message": message}))
        .fetch()
        .await
}

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;
