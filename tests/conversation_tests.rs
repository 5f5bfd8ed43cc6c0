use std::sync::Arc;
use std::time::Duration;
use futures::StreamExt;
use code_forensics::enums::chat_role::ChatRole;
use code_forensics::errors::{ForensicError, ForensicResult};
use code_forensics::services::conversation::{ChatStream, ConversationHandle, ConversationService};
use code_forensics::structs::chat_message::ChatMessage;
use crate::common::{sample_files, ChatScript, FakeProvider};

async fn drain(stream: ChatStream) -> Vec<ForensicResult<String>> {
    stream.collect().await
}

#[tokio::test]
async fn conversation_is_seeded_with_code_and_acknowledgement() {
    let service = ConversationService::new(Arc::new(FakeProvider::new()));
    let handle = service.start_conversation(&sample_files(), "tests fail").unwrap();

    let history = handle.history().await;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, ChatRole::User);
    assert!(history[0].content.contains("The user's primary problem is: \"tests fail\""));
    assert!(history[0].content.contains("/* FILE: src/app.js */"));
    assert_eq!(history[1].role, ChatRole::Model);
    assert!(history[1].content.starts_with("Understood."));
}

#[tokio::test]
async fn reply_streams_in_order_and_is_committed() {
    let provider = Arc::new(FakeProvider::new().with_chat(ChatScript::Reply(vec!["It ", "subtracts ", "instead."])));
    let service = ConversationService::new(provider.clone());
    let handle = service.start_conversation(&sample_files(), "").unwrap();

    let stream = handle.send_message("What is wrong with add?").await.unwrap();
    let increments: Vec<String> = drain(stream).await.into_iter().map(Result::unwrap).collect();

    assert_eq!(increments, vec!["It ", "subtracts ", "instead."]);

    let sent = provider.histories.lock().unwrap()[0].clone();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[2], ChatMessage::user("What is wrong with add?"));

    let history = handle.history().await;
    assert_eq!(history.len(), 4);
    assert_eq!(history[3], ChatMessage::model("It subtracts instead."));
    assert!(!handle.is_busy());
}

#[tokio::test]
async fn blank_message_is_rejected() {
    let provider = Arc::new(FakeProvider::new());
    let service = ConversationService::new(provider.clone());
    let handle = service.start_conversation(&sample_files(), "").unwrap();

    let error = handle.send_message("  \n").await.err().unwrap();
    assert!(matches!(error, ForensicError::Validation { .. }));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn second_send_while_in_flight_is_rejected() {
    let provider = Arc::new(FakeProvider::new().with_chat(ChatScript::Reply(vec!["done"])));
    let service = ConversationService::new(provider);
    let handle = service.start_conversation(&sample_files(), "").unwrap();

    let first = handle.send_message("one").await.unwrap();
    let second = handle.send_message("two").await.err().unwrap();
    assert!(matches!(second, ForensicError::Validation { .. }));

    drain(first).await;
    assert_eq!(handle.history().await.len(), 4);
}

#[tokio::test]
async fn failed_reply_leaves_history_untouched() {
    let provider = Arc::new(
        FakeProvider::new()
            .with_chat(ChatScript::FailMidway(vec!["par"]))
            .with_chat(ChatScript::Refuse)
            .with_chat(ChatScript::Reply(vec!["recovered"])),
    );
    let service = ConversationService::new(provider);
    let handle = service.start_conversation(&sample_files(), "").unwrap();

    let midway = drain(handle.send_message("first").await.unwrap()).await;
    assert_eq!(midway.len(), 2);
    assert_eq!(midway[0].as_deref().ok(), Some("par"));
    assert!(matches!(midway[1], Err(ForensicError::Transport { .. })));
    assert_eq!(handle.history().await.len(), 2);

    let refused = drain(handle.send_message("second").await.unwrap()).await;
    assert_eq!(refused.len(), 1);
    let error = refused.into_iter().next().unwrap().unwrap_err();
    assert_eq!(error.to_string(), "An error occurred while chatting with the AI.");
    assert_eq!(handle.history().await.len(), 2);

    let recovered = drain(handle.send_message("third").await.unwrap()).await;
    assert_eq!(recovered.len(), 1);
    assert_eq!(handle.history().await.len(), 4);
}

async fn wait_until_idle(handle: &ConversationHandle) {
    for _ in 0..100 {
        if !handle.is_busy() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test]
async fn dropping_the_stream_abandons_a_stalled_reply() {
    let provider = Arc::new(
        FakeProvider::new()
            .with_chat(ChatScript::Stall(vec!["partial"]))
            .with_chat(ChatScript::Reply(vec!["fresh answer"])),
    );
    let service = ConversationService::new(provider);
    let handle = service.start_conversation(&sample_files(), "").unwrap();

    let mut stream = handle.send_message("first").await.unwrap();
    assert_eq!(stream.next().await.unwrap().unwrap(), "partial");
    drop(stream);

    wait_until_idle(&handle).await;
    assert!(!handle.is_busy());
    assert_eq!(handle.history().await.len(), 2);

    let increments = drain(handle.send_message("second").await.unwrap()).await;
    assert_eq!(increments.len(), 1);
    let history = handle.history().await;
    assert_eq!(history.len(), 4);
    assert_eq!(history[2], ChatMessage::user("second"));
    assert_eq!(history[3], ChatMessage::model("fresh answer"));
}

#[tokio::test]
async fn reply_without_finish_reason_is_not_committed() {
    let provider = Arc::new(FakeProvider::new().with_chat(ChatScript::Truncated(vec!["half ", "an answer"])));
    let service = ConversationService::new(provider);
    let handle = service.start_conversation(&sample_files(), "").unwrap();

    let items = drain(handle.send_message("explain").await.unwrap()).await;

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].as_deref().ok(), Some("half "));
    assert_eq!(items[1].as_deref().ok(), Some("an answer"));
    assert!(matches!(items[2], Err(ForensicError::ModelResponse { .. })));
    assert_eq!(handle.history().await.len(), 2);
    assert!(!handle.is_busy());
}

#[tokio::test]
async fn conversation_needs_files() {
    let service = ConversationService::new(Arc::new(FakeProvider::new()));
    let error = service.start_conversation(&[], "").err().unwrap();
    assert!(matches!(error, ForensicError::Validation { .. }));
}
