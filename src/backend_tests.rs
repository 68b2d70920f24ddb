//! Backend-facing tests: channel protocol and wire parsing.

use crossbeam_channel::unbounded;

use crate::bubble::BubbleSet;
use crate::protocol::{
    batch_from_wire, BackendAction, BotEvent, MessageContent, Sender, WireMessage,
};

/// Test backend action channel communication
#[test]
fn test_backend_action_channel() {
    let (action_tx, action_rx) = unbounded::<BackendAction>();
    let mut bubbles = BubbleSet::new();
    let bubble = bubbles.spawn(Sender::Bot);

    action_tx
        .send(BackendAction::SendText("hello bot".to_string()))
        .unwrap();
    action_tx
        .send(BackendAction::FetchImage {
            bubble,
            url: "http://example.com/cat.png".to_string(),
        })
        .unwrap();

    // Verify actions are received in order
    match action_rx.recv().unwrap() {
        BackendAction::SendText(text) => assert_eq!(text, "hello bot"),
        other => panic!("Expected SendText action, got {:?}", other),
    }

    match action_rx.recv().unwrap() {
        BackendAction::FetchImage { bubble: b, url } => {
            assert_eq!(b, bubble);
            assert_eq!(url, "http://example.com/cat.png");
        }
        other => panic!("Expected FetchImage action, got {:?}", other),
    }
}

/// Test bot event channel communication
#[test]
fn test_bot_event_channel() {
    let (event_tx, event_rx) = unbounded::<BotEvent>();
    let mut bubbles = BubbleSet::new();
    let bubble = bubbles.spawn(Sender::Bot);

    event_tx.send(BotEvent::Online(true)).unwrap();
    event_tx
        .send(BotEvent::BatchReceived(batch_from_wire(&[serde_json::from_value::<WireMessage>(
            serde_json::json!({"recipient_id": "user", "text": "hi"}),
        )
        .unwrap()])))
        .unwrap();
    event_tx
        .send(BotEvent::ImageFetched {
            bubble,
            bytes: vec![1, 2, 3],
        })
        .unwrap();
    event_tx
        .send(BotEvent::Error("connection refused".to_string()))
        .unwrap();

    assert!(matches!(event_rx.recv().unwrap(), BotEvent::Online(true)));

    match event_rx.recv().unwrap() {
        BotEvent::BatchReceived(batch) => {
            assert_eq!(batch.messages.len(), 1);
            assert_eq!(batch.messages[0].sender, Sender::Bot);
        }
        other => panic!("Expected BatchReceived event, got {:?}", other),
    }

    match event_rx.recv().unwrap() {
        BotEvent::ImageFetched { bubble: b, bytes } => {
            assert_eq!(b, bubble);
            assert_eq!(bytes, vec![1, 2, 3]);
        }
        other => panic!("Expected ImageFetched event, got {:?}", other),
    }

    assert!(matches!(event_rx.recv().unwrap(), BotEvent::Error(_)));
}

/// Test parsing a realistic webhook response body
#[test]
fn test_webhook_response_parsing() {
    let body = r#"[
        {"recipient_id": "user", "text": "Hello! How can I help?"},
        {"recipient_id": "user", "image": "http://example.com/map.png"},
        {"recipient_id": "user", "text": "Anything else?", "buttons": [{"title": "No"}]}
    ]"#;

    let records: Vec<WireMessage> = serde_json::from_str(body).unwrap();
    let batch = batch_from_wire(&records);

    assert_eq!(batch.messages.len(), 4);
    assert_eq!(
        batch.messages[0].content,
        MessageContent::Text("Hello! How can I help?".into())
    );
    assert_eq!(
        batch.messages[1].content,
        MessageContent::Image("http://example.com/map.png".into())
    );
    assert_eq!(
        batch.messages[2].content,
        MessageContent::Text("Anything else?".into())
    );
    assert_eq!(batch.messages[3].content, MessageContent::Buttons);
    assert!(batch.messages.iter().all(|m| m.sender == Sender::Bot));
}

/// Test that a malformed record degrades instead of failing the batch
#[test]
fn test_webhook_response_with_malformed_fields() {
    let body = r#"[
        {"recipient_id": "user", "text": 7},
        {"recipient_id": "user", "text": "still fine"}
    ]"#;

    let records: Vec<WireMessage> = serde_json::from_str(body).unwrap();
    let batch = batch_from_wire(&records);

    assert_eq!(batch.messages.len(), 1);
    assert_eq!(
        batch.messages[0].content,
        MessageContent::Text("still fine".into())
    );
}

/// Test empty webhook response
#[test]
fn test_empty_webhook_response() {
    let records: Vec<WireMessage> = serde_json::from_str("[]").unwrap();
    assert!(batch_from_wire(&records).messages.is_empty());
}
