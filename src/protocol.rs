//! UI <-> backend channel protocol and the typed chat message model.

use serde::Deserialize;
use serde_json::Value;

use crate::bubble::BubbleId;

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Send the user's text to the bot webhook (fire-and-forget)
    SendText(String),
    /// Fetch image bytes for a revealed image bubble (best-effort)
    FetchImage { bubble: BubbleId, url: String },
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum BotEvent {
    /// Live "bot online" flag from the health poll
    Online(bool),
    /// One webhook response, already exploded into typed messages
    BatchReceived(MessageBatch),
    /// Pixel data for an image bubble; never sent when the fetch fails
    ImageFetched { bubble: BubbleId, bytes: Vec<u8> },
    /// Backend error for the system log
    Error(String),
}

/// Who a bubble belongs to.
///
/// Wire tags other than "user"/"bot" degrade to `Unknown`, which renders
/// centered instead of failing the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    User,
    Bot,
    Unknown,
}

impl Sender {
    /// Parse a wire sender tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "user" => Self::User,
            "bot" => Self::Bot,
            _ => Self::Unknown,
        }
    }
}

/// Exactly one content kind per message.
///
/// `Attachment`, `Buttons`, `Elements` and `QuickReplies` are accepted as
/// valid but currently render nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageContent {
    Text(String),
    Image(String),
    AnimationPlaceholder,
    Attachment,
    Buttons,
    Elements,
    QuickReplies,
}

/// One renderable chat message.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub sender: Sender,
    pub content: MessageContent,
}

/// Ordered messages produced by one webhook response; revealed strictly in
/// order, one bubble cycle per message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageBatch {
    pub messages: Vec<Message>,
}

/// One record from the bot webhook response.
///
/// Every field is optional; values are kept as raw JSON so a malformed field
/// degrades to "absent" instead of failing the whole record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireMessage {
    #[serde(default)]
    pub recipient_id: Option<Value>,
    /// Optional speaker tag; absent means the bot itself
    #[serde(default)]
    pub sender: Option<Value>,
    #[serde(default)]
    pub text: Option<Value>,
    #[serde(default)]
    pub image: Option<Value>,
    #[serde(default)]
    pub attachment: Option<Value>,
    #[serde(default)]
    pub buttons: Option<Value>,
    #[serde(default)]
    pub elements: Option<Value>,
    #[serde(default)]
    pub quick_replies: Option<Value>,
}

impl WireMessage {
    /// Explode populated fields into bot messages, in field order.
    ///
    /// `recipient_id` routes the response and never produces a message.
    /// Null fields and fields that are not extractable as the expected shape
    /// are skipped silently.
    pub fn explode(&self) -> Vec<Message> {
        let sender = self
            .sender
            .as_ref()
            .and_then(Value::as_str)
            .map(Sender::from_tag)
            .unwrap_or(Sender::Bot);

        let mut messages = Vec::new();

        if let Some(text) = self.text.as_ref().and_then(Value::as_str) {
            messages.push(Message {
                sender,
                content: MessageContent::Text(text.to_string()),
            });
        }

        if let Some(url) = self.image.as_ref().and_then(Value::as_str) {
            messages.push(Message {
                sender,
                content: MessageContent::Image(url.to_string()),
            });
        }

        // Reserved kinds: accepted when present, rendered as empty bubbles
        let reserved = [
            (&self.attachment, MessageContent::Attachment),
            (&self.buttons, MessageContent::Buttons),
            (&self.elements, MessageContent::Elements),
            (&self.quick_replies, MessageContent::QuickReplies),
        ];
        for (value, content) in reserved {
            if value.as_ref().is_some_and(|v| !v.is_null()) {
                messages.push(Message { sender, content });
            }
        }

        messages
    }
}

/// Collect all records of one webhook response into a single ordered batch.
pub fn batch_from_wire(records: &[WireMessage]) -> MessageBatch {
    MessageBatch {
        messages: records.iter().flat_map(WireMessage::explode).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wire(value: serde_json::Value) -> WireMessage {
        serde_json::from_value(value).expect("wire record should deserialize")
    }

    #[test]
    fn test_recipient_id_never_renders() {
        let record = wire(json!({"recipient_id": "user", "text": "hi"}));
        let messages = record.explode();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, MessageContent::Text("hi".into()));
    }

    #[test]
    fn test_explode_preserves_field_order() {
        let record = wire(json!({
            "text": "caption",
            "image": "http://example.com/cat.png",
            "buttons": [{"title": "yes"}]
        }));
        let messages = record.explode();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].content, MessageContent::Text("caption".into()));
        assert_eq!(
            messages[1].content,
            MessageContent::Image("http://example.com/cat.png".into())
        );
        assert_eq!(messages[2].content, MessageContent::Buttons);
    }

    #[test]
    fn test_empty_record_produces_no_messages() {
        assert!(wire(json!({"recipient_id": "user"})).explode().is_empty());
        assert!(WireMessage::default().explode().is_empty());
    }

    #[test]
    fn test_unextractable_field_is_treated_as_absent() {
        // a numeric "text" cannot be shown as a label; skipped, not an error
        let record = wire(json!({"text": 42, "image": null, "buttons": null}));
        assert!(record.explode().is_empty());
    }

    #[test]
    fn test_batch_flattens_records_in_order() {
        let records = vec![
            wire(json!({"text": "first"})),
            wire(json!({"text": "second", "image": "http://example.com/a.png"})),
        ];
        let batch = batch_from_wire(&records);
        assert_eq!(batch.messages.len(), 3);
        assert_eq!(batch.messages[0].content, MessageContent::Text("first".into()));
        assert_eq!(batch.messages[1].content, MessageContent::Text("second".into()));
        assert_eq!(
            batch.messages[2].content,
            MessageContent::Image("http://example.com/a.png".into())
        );
    }

    #[test]
    fn test_sender_tag_parsing_degrades_gracefully() {
        assert_eq!(Sender::from_tag("user"), Sender::User);
        assert_eq!(Sender::from_tag("bot"), Sender::Bot);
        assert_eq!(Sender::from_tag("moderator"), Sender::Unknown);
        assert_eq!(Sender::from_tag(""), Sender::Unknown);
    }

    #[test]
    fn test_unrecognized_wire_sender_does_not_fail_the_record() {
        let record = wire(json!({"sender": "moderator", "text": "announcement"}));
        let messages = record.explode();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, Sender::Unknown);

        // absent tag means the bot itself
        let record = wire(json!({"text": "plain"}));
        assert_eq!(record.explode()[0].sender, Sender::Bot);
    }
}
