use async_trait::async_trait;
use reqwest::Client;
use futures::{future, Stream, StreamExt};
use crate::enums::ai_provider_error::AiProviderError;
use crate::services::rate_limiter::ApiRateLimiter;
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::chat_message::ChatMessage;
use crate::structs::config::ai_config::AiConfig;
use crate::structs::schema_node::SchemaNode;
use crate::structs::stream_item::StreamItem;
use crate::traits::ai_provider::{AiProvider, ProviderStream};

#[derive(Clone)]
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    max_output_tokens: u32,
    temperature: Option<f64>,
    rate_limiter: ApiRateLimiter,
}

impl GeminiProvider {
    /// The key is injected here; nothing is read from the environment.
    pub fn new(api_key: String, config: &AiConfig) -> Self {
        Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            model: config.model.clone(),
            max_output_tokens: config.max_output_tokens,
            temperature: config.temperature,
            rate_limiter: ApiRateLimiter::from_limits(config.rate_limit_per_minute, config.rate_limit_per_second),
        }
    }

    fn generation_config(&self) -> GeminiGenerationConfig {
        GeminiGenerationConfig {
            temperature: self.temperature,
            max_output_tokens: Some(self.max_output_tokens),
            candidate_count: Some(1),
            ..GeminiGenerationConfig::default()
        }
    }

    pub fn structured_request(&self, prompt: String, schema: &SchemaNode) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent::user(prompt)],
            generation_config: Some(GeminiGenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema.to_json()),
                ..self.generation_config()
            }),
        }
    }

    pub fn chat_request(&self, history: &[ChatMessage]) -> GeminiRequest {
        GeminiRequest {
            contents: history.iter().map(GeminiContent::from).collect(),
            generation_config: Some(self.generation_config()),
        }
    }

    async fn make_request(&self, url: String, request_body: &GeminiRequest, stream: bool) -> Result<reqwest::Response, AiProviderError> {
        self.rate_limiter.acquire().await;
        log::debug!("📦 Request model: {}", self.model);

        let mut request_builder = self.client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(request_body);

        if stream {
            request_builder = request_builder.header("Accept", "text/event-stream");
        }

        let response = request_builder
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match status.as_u16() {
                400 => AiProviderError::ApiError(format!("Bad request: {}", error_text)),
                401 => AiProviderError::AuthenticationError(error_text),
                403 => AiProviderError::ApiError(format!("Forbidden: {}", error_text)),
                429 => AiProviderError::ApiError(format!("Rate limit exceeded: {}", error_text)),
                _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, error_text)),
            });
        }

        Ok(response)
    }

    /// Concatenated text of the first candidate's parts.
    pub fn extract_candidate_text(json: &serde_json::Value) -> Option<String> {
        let parts = json
            .get("candidates")
            .and_then(|candidates| candidates.as_array())
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array())?;

        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text").and_then(|text| text.as_str()))
            .collect();

        if text.is_empty() { None } else { Some(text) }
    }

    pub fn parse_gemini_sse_line(line: &str) -> Option<Result<StreamItem, AiProviderError>> {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || !line.starts_with("data: ") {
            return None;
        }

        let data = &line[6..];

        if data.trim() == "[DONE]" {
            return None;
        }

        match serde_json::from_str::<serde_json::Value>(data) {
            Ok(json) => {
                if let Some(error) = json.get("error") {
                    let error_message = error.get("message")
                        .and_then(|m| m.as_str())
                        .unwrap_or("Unknown error");
                    let error_code = error.get("code")
                        .and_then(|c| c.as_i64())
                        .unwrap_or(0);

                    return Some(Err(AiProviderError::ApiError(format!("Code {}: {}", error_code, error_message))));
                }

                let text = Self::extract_candidate_text(&json).unwrap_or_default();
                let finish_reason = json
                    .get("candidates")
                    .and_then(|c| c.as_array())
                    .and_then(|c| c.first())
                    .and_then(|candidate| candidate.get("finishReason"))
                    .and_then(|f| f.as_str())
                    .map(str::to_string);

                match finish_reason {
                    Some(reason) => Some(Ok(StreamItem::complete(text, Some(reason)))),
                    None if !text.is_empty() => Some(Ok(StreamItem::new(text))),
                    None => None,
                }
            }
            Err(e) => Some(Err(AiProviderError::SerializationError(format!("Failed to parse Gemini event: {}", e))))
        }
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn generate_structured(&self, prompt: String, schema: &SchemaNode) -> Result<String, AiProviderError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let request_body = self.structured_request(prompt, schema);

        let response = self.make_request(url, &request_body, false).await?;

        let json: serde_json::Value = response.json().await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        Self::extract_candidate_text(&json)
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))
    }

    async fn stream_chat(&self, history: Vec<ChatMessage>) -> Result<ProviderStream, AiProviderError> {
        let url = format!("{}/models/{}:streamGenerateContent?alt=sse", self.base_url, self.model);
        let request_body = self.chat_request(&history);

        let response = self.make_request(url, &request_body, true).await?;

        Ok(Self::decode_sse_stream(response.bytes_stream()))
    }
}

impl GeminiProvider {
    /// Turns raw SSE body chunks into stream items. Chunks are buffered as
    /// bytes and only complete lines are decoded, so a multi-byte character
    /// split across chunks stays intact.
    pub fn decode_sse_stream<S, B, E>(chunks: S) -> ProviderStream
    where
        S: Stream<Item = Result<B, E>> + Send + 'static,
        B: AsRef<[u8]> + 'static,
        E: std::fmt::Display + 'static,
    {
        let stream = chunks
            .scan(Vec::<u8>::new(), |buffer, chunk_result| {
                future::ready(match chunk_result {
                    Ok(bytes) => {
                        buffer.extend_from_slice(bytes.as_ref());

                        let mut items = Vec::new();
                        while let Some(newline_pos) = buffer.iter().position(|byte| *byte == b'\n') {
                            let line: Vec<u8> = buffer.drain(..=newline_pos).collect();

                            match std::str::from_utf8(&line[..newline_pos]) {
                                Ok(line) => {
                                    if let Some(result) = Self::parse_gemini_sse_line(line) {
                                        items.push(result);
                                    }
                                }
                                Err(e) => items.push(Err(AiProviderError::SerializationError(
                                    format!("Gemini event is not valid UTF-8: {}", e),
                                ))),
                            }
                        }

                        Some(futures::stream::iter(items))
                    }
                    Err(e) => {
                        let error = AiProviderError::NetworkError(format!("Stream error: {}", e));
                        Some(futures::stream::iter(vec![Err(error)]))
                    }
                })
            })
            .flatten();

        Box::pin(stream)
    }
}
