use crate::constants::prompts::CHAT_GREETING;
use crate::enums::chat_role::ChatRole;
use crate::structs::chat_message::ChatMessage;

/// Display-side chat history. Append-only; streamed replies are
/// accumulated into the last model message.
#[derive(Debug, Clone, Default)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    pub fn with_greeting() -> Self {
        Self {
            messages: vec![ChatMessage::model(CHAT_GREETING)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push_user(&mut self, content: &str) {
        self.messages.push(ChatMessage::user(content));
    }

    /// Placeholder model message that increments are appended to.
    pub fn begin_model_turn(&mut self) {
        self.messages.push(ChatMessage::model(""));
    }

    pub fn append_to_last(&mut self, delta: &str) {
        match self.messages.last_mut() {
            Some(last) if last.role == ChatRole::Model => last.content.push_str(delta),
            _ => self.messages.push(ChatMessage::model(delta)),
        }
    }

    pub fn push_error(&mut self, error_message: &str) {
        self.messages.push(ChatMessage::model(format!("Sorry, I ran into an error: {}", error_message)));
    }
}
