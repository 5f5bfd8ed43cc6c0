use std::collections::VecDeque;
use std::sync::Mutex;
use async_trait::async_trait;
use futures::StreamExt;
use code_forensics::enums::ai_provider_error::AiProviderError;
use code_forensics::structs::chat_message::ChatMessage;
use code_forensics::structs::schema_node::SchemaNode;
use code_forensics::structs::source_file::SourceFile;
use code_forensics::structs::stream_item::StreamItem;
use code_forensics::traits::ai_provider::{AiProvider, ProviderStream};

/// Scripted reply for one `stream_chat` call.
pub enum ChatScript {
    Reply(Vec<&'static str>),
    FailMidway(Vec<&'static str>),
    /// Yields the parts, then never produces another item.
    Stall(Vec<&'static str>),
    /// Yields the parts and ends without a finish reason.
    Truncated(Vec<&'static str>),
    Refuse,
}

/// In-process provider that records every request and answers from a script.
#[derive(Default)]
pub struct FakeProvider {
    structured: Mutex<VecDeque<Result<String, AiProviderError>>>,
    chats: Mutex<VecDeque<ChatScript>>,
    pub prompts: Mutex<Vec<String>>,
    pub schemas: Mutex<Vec<SchemaNode>>,
    pub histories: Mutex<Vec<Vec<ChatMessage>>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_structured(self, reply: Result<String, AiProviderError>) -> Self {
        self.structured.lock().unwrap().push_back(reply);
        self
    }

    pub fn with_chat(self, script: ChatScript) -> Self {
        self.chats.lock().unwrap().push_back(script);
        self
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len() + self.histories.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> String {
        self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
    }

    pub fn last_schema(&self) -> SchemaNode {
        self.schemas.lock().unwrap().last().cloned().expect("no structured call recorded")
    }
}

#[async_trait]
impl AiProvider for FakeProvider {
    async fn generate_structured(&self, prompt: String, schema: &SchemaNode) -> Result<String, AiProviderError> {
        self.prompts.lock().unwrap().push(prompt);
        self.schemas.lock().unwrap().push(schema.clone());
        self.structured
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AiProviderError::ApiError("no scripted reply".to_string())))
    }

    async fn stream_chat(&self, history: Vec<ChatMessage>) -> Result<ProviderStream, AiProviderError> {
        self.histories.lock().unwrap().push(history);
        let script = self.chats.lock().unwrap().pop_front().unwrap_or(ChatScript::Refuse);

        let items: Vec<Result<StreamItem, AiProviderError>> = match script {
            ChatScript::Refuse => return Err(AiProviderError::NetworkError("connection refused".to_string())),
            ChatScript::Reply(parts) => {
                let last = parts.len().saturating_sub(1);
                parts
                    .into_iter()
                    .enumerate()
                    .map(|(i, part)| {
                        if i == last {
                            Ok(StreamItem::complete(part.to_string(), Some("STOP".to_string())))
                        } else {
                            Ok(StreamItem::new(part.to_string()))
                        }
                    })
                    .collect()
            }
            ChatScript::Stall(parts) => {
                let items: Vec<Result<StreamItem, AiProviderError>> =
                    parts.into_iter().map(|part| Ok(StreamItem::new(part.to_string()))).collect();
                return Ok(Box::pin(futures::stream::iter(items).chain(futures::stream::pending())));
            }
            ChatScript::Truncated(parts) => parts
                .into_iter()
                .map(|part| Ok(StreamItem::new(part.to_string())))
                .collect(),
            ChatScript::FailMidway(parts) => parts
                .into_iter()
                .map(|part| Ok(StreamItem::new(part.to_string())))
                .chain(std::iter::once(Err(AiProviderError::NetworkError("stream reset".to_string()))))
                .collect(),
        };

        Ok(Box::pin(futures::stream::iter(items)))
    }
}

pub fn sample_files() -> Vec<SourceFile> {
    vec![
        SourceFile::new("src/app.js", "function add(a, b) {\n  return a - b;\n}\n"),
        SourceFile::new("README.md", "# Demo\n"),
    ]
}
