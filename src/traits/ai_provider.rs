use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::chat_message::ChatMessage;
use crate::structs::schema_node::SchemaNode;
use crate::structs::stream_item::StreamItem;

pub type ProviderStream = Pin<Box<dyn Stream<Item = Result<StreamItem, AiProviderError>> + Send>>;

#[async_trait]
pub trait AiProvider: Send + Sync {

    /// One-shot completion constrained to `schema`; returns the raw JSON text.
    async fn generate_structured(&self, prompt: String, schema: &SchemaNode) -> Result<String, AiProviderError>;

    /// Streams the model's reply to `history`, whose last entry is the
    /// newest user turn.
    async fn stream_chat(&self, history: Vec<ChatMessage>) -> Result<ProviderStream, AiProviderError>;
}
