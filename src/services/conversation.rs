use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};
use futures::{Stream, StreamExt};
use tokio::sync::{mpsc, Mutex};
use uuid::Uuid;
use crate::constants::prompts::CHAT_ACKNOWLEDGEMENT;
use crate::errors::{ForensicError, ForensicResult, Operation};
use crate::helpers::input_validator::{ensure_files_present, ensure_not_blank};
use crate::helpers::prompt_generator;
use crate::structs::chat_message::ChatMessage;
use crate::structs::source_file::SourceFile;
use crate::traits::ai_provider::AiProvider;

pub struct ConversationService {
    ai_provider: Arc<dyn AiProvider>,
}

impl ConversationService {
    pub fn new(ai_provider: Arc<dyn AiProvider>) -> Self {
        Self { ai_provider }
    }

    /// Opens a conversation grounded in `files`. The history starts with a
    /// synthetic user turn carrying the instructions and code, answered by a
    /// synthetic model acknowledgement.
    pub fn start_conversation(&self, files: &[SourceFile], issue_description: &str) -> ForensicResult<ConversationHandle> {
        ensure_files_present(files)?;

        let handle = ConversationHandle {
            id: Uuid::new_v4(),
            ai_provider: Arc::clone(&self.ai_provider),
            history: Arc::new(Mutex::new(seed_history(files, issue_description))),
            in_flight: Arc::new(AtomicBool::new(false)),
        };
        log::info!("💬 Conversation {} started with {} files", handle.id, files.len());
        Ok(handle)
    }
}

pub fn seed_history(files: &[SourceFile], issue_description: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::user(prompt_generator::generate_chat_seed_prompt(files, issue_description)),
        ChatMessage::model(CHAT_ACKNOWLEDGEMENT),
    ]
}

/// A seeded conversation. At most one `send_message` may be in flight.
pub struct ConversationHandle {
    id: Uuid,
    ai_provider: Arc<dyn AiProvider>,
    history: Arc<Mutex<Vec<ChatMessage>>>,
    in_flight: Arc<AtomicBool>,
}

enum RelayOutcome {
    Completed(String),
    Failed(ForensicError),
    Abandoned,
}

impl ConversationHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Model-facing history, seed turns included.
    pub async fn history(&self) -> Vec<ChatMessage> {
        self.history.lock().await.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Sends `text` and returns the reply as a stream of text increments.
    ///
    /// The user turn and the full reply are committed to the history only
    /// once the reply finished; a failed, truncated or abandoned reply leaves
    /// the history untouched. Dropping the returned stream abandons the reply.
    pub async fn send_message(&self, text: &str) -> ForensicResult<ChatStream> {
        ensure_not_blank("message", text)?;

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(ForensicError::validation_error(
                "message",
                "a message is already in flight for this conversation",
                Some("Wait for the current reply to finish"),
            ));
        }

        let user_turn = ChatMessage::user(text);
        let mut request_history = self.history.lock().await.clone();
        request_history.push(user_turn.clone());

        let (tx, rx) = mpsc::unbounded_channel();
        let ai_provider = Arc::clone(&self.ai_provider);
        let history = Arc::clone(&self.history);
        let in_flight = Arc::clone(&self.in_flight);
        let id = self.id;

        tokio::spawn(async move {
            let outcome = relay_reply(ai_provider.as_ref(), request_history, &tx).await;

            let failure = match outcome {
                RelayOutcome::Completed(reply) => {
                    let mut history = history.lock().await;
                    history.push(user_turn);
                    history.push(ChatMessage::model(reply));
                    log::debug!("Conversation {} now has {} turns", id, history.len());
                    None
                }
                RelayOutcome::Failed(error) => Some(error),
                RelayOutcome::Abandoned => {
                    log::info!("Conversation {}: reply abandoned by consumer", id);
                    None
                }
            };

            in_flight.store(false, Ordering::SeqCst);
            if let Some(error) = failure {
                let _ = tx.send(Err(error));
            }
        });

        Ok(ChatStream { rx })
    }
}

/// Forwards increments until the reply completes. A closed channel means
/// the consumer dropped its `ChatStream`; the relay stops at once.
async fn relay_reply(
    ai_provider: &dyn AiProvider,
    request_history: Vec<ChatMessage>,
    tx: &mpsc::UnboundedSender<ForensicResult<String>>,
) -> RelayOutcome {
    let opened = tokio::select! {
        biased;
        _ = tx.closed() => return RelayOutcome::Abandoned,
        opened = ai_provider.stream_chat(request_history) => opened,
    };
    let mut stream = match opened {
        Ok(stream) => stream,
        Err(e) => return RelayOutcome::Failed(ForensicError::from_provider(Operation::Chat, e)),
    };

    let mut reply = String::new();
    loop {
        let next = tokio::select! {
            biased;
            _ = tx.closed() => return RelayOutcome::Abandoned,
            next = stream.next() => next,
        };

        match next {
            Some(Ok(item)) => {
                if !item.content.is_empty() {
                    reply.push_str(&item.content);
                    if tx.send(Ok(item.content)).is_err() {
                        return RelayOutcome::Abandoned;
                    }
                }
                if item.is_complete {
                    break;
                }
            }
            Some(Err(e)) => return RelayOutcome::Failed(ForensicError::from_provider(Operation::Chat, e)),
            None => {
                log::warn!("Chat stream ended without a finish reason after {} bytes", reply.len());
                return RelayOutcome::Failed(ForensicError::model_response_error(
                    Operation::Chat,
                    "reply ended before the model finished",
                ));
            }
        }
    }

    if tx.is_closed() {
        return RelayOutcome::Abandoned;
    }
    RelayOutcome::Completed(reply)
}

/// Text increments of one reply, in emission order. Ends when the reply is
/// complete; a failure arrives as the last item.
pub struct ChatStream {
    rx: mpsc::UnboundedReceiver<ForensicResult<String>>,
}

impl Stream for ChatStream {
    type Item = ForensicResult<String>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}
