//! Bubble model and factory: one visual unit per rendered chat message.
//!
//! `BubbleSet` owns every live bubble in arrival order and hands out stable
//! ids, so a reveal that outlives its bubble (conversation cleared mid-cycle)
//! degrades to a failed lookup instead of a fault.

use crate::format::{self, DEFAULT_LINE_WIDTH};
use crate::protocol::{MessageContent, Sender};

/// Horizontal offset for user bubbles (right side of the column).
pub const USER_OFFSET_X: f32 = 50.0;
/// Horizontal offset for bot bubbles (left side of the column).
pub const BOT_OFFSET_X: f32 = -50.0;
/// Label font size.
pub const FONT_SIZE: f32 = 18.0;
/// Height of one wrapped text line at `FONT_SIZE`.
pub const LINE_HEIGHT: f32 = 22.0;
/// Height of the animated thinking marker.
pub const PLACEHOLDER_HEIGHT: f32 = 40.0;
/// Height reserved for image content, with or without pixels.
pub const IMAGE_HEIGHT: f32 = 120.0;

/// Inner padding of a bubble container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubblePadding {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

const USER_PADDING: BubblePadding = BubblePadding {
    left: 10.0,
    right: 20.0,
    top: 5.0,
    bottom: 5.0,
};

const BOT_PADDING: BubblePadding = BubblePadding {
    left: 20.0,
    right: 10.0,
    top: 5.0,
    bottom: 5.0,
};

/// Horizontal position derived from the sender; unrecognized senders render
/// centered rather than failing the batch.
pub fn horizontal_offset(sender: Sender) -> f32 {
    match sender {
        Sender::User => USER_OFFSET_X,
        Sender::Bot => BOT_OFFSET_X,
        Sender::Unknown => 0.0,
    }
}

/// Container padding per sender.
pub fn padding(sender: Sender) -> BubblePadding {
    match sender {
        Sender::User => USER_PADDING,
        Sender::Bot | Sender::Unknown => BOT_PADDING,
    }
}

/// Stable identity for one bubble; survives the placeholder -> content swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BubbleId(u64);

/// Whether a bubble still shows the thinking placeholder or its real content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentState {
    Placeholder,
    Revealed,
}

/// Renderable content attached to a bubble.
#[derive(Debug, Clone, PartialEq)]
pub enum BubbleContent {
    /// Nothing attached yet, or a reserved kind that renders nothing
    Empty,
    /// Animated thinking marker shown while a bot reply is pending
    Thinking,
    /// Wrapped label text
    Text(String),
    /// Image slot; pixel bytes arrive asynchronously and may never arrive
    Image { url: String, bytes: Option<Vec<u8>> },
}

/// One rendered chat message unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub id: BubbleId,
    pub sender: Sender,
    pub content: BubbleContent,
    pub state: ContentState,
    /// Measured height; settles one render cycle after content changes
    pub height: f32,
    /// Horizontal offset derived from the sender
    pub x: f32,
    /// Vertical slot assigned by the layout stack (negative, stacking down)
    pub y: f32,
}

impl Bubble {
    /// Attach renderable content for one message kind.
    ///
    /// Text is wrapped before it becomes the label. Image content starts as
    /// an empty slot; the controller requests the pixel fetch separately.
    pub fn attach_content(&mut self, content: &MessageContent) {
        match content {
            MessageContent::AnimationPlaceholder => {
                self.content = BubbleContent::Thinking;
                self.state = ContentState::Placeholder;
            }
            MessageContent::Text(raw) => {
                self.content = BubbleContent::Text(format::wrap(raw, DEFAULT_LINE_WIDTH));
                self.state = ContentState::Revealed;
            }
            MessageContent::Image(url) => {
                self.content = BubbleContent::Image {
                    url: url.clone(),
                    bytes: None,
                };
                self.state = ContentState::Revealed;
            }
            // Reserved kinds are accepted but render nothing
            MessageContent::Attachment
            | MessageContent::Buttons
            | MessageContent::Elements
            | MessageContent::QuickReplies => {
                self.content = BubbleContent::Empty;
                self.state = ContentState::Revealed;
            }
        }
    }

    /// Remove placeholder-only visuals so content of another kind can attach.
    /// Idempotent: a bubble without a placeholder is left untouched.
    pub fn detach_placeholder(&mut self) {
        if self.content == BubbleContent::Thinking {
            self.content = BubbleContent::Empty;
        }
    }
}

/// Owner of all live bubbles, in arrival order.
#[derive(Debug, Default)]
pub struct BubbleSet {
    bubbles: Vec<Bubble>,
    next_id: u64,
}

impl BubbleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bubble container styled by sender.
    pub fn spawn(&mut self, sender: Sender) -> BubbleId {
        let id = BubbleId(self.next_id);
        self.next_id += 1;
        self.bubbles.push(Bubble {
            id,
            sender,
            content: BubbleContent::Empty,
            state: ContentState::Placeholder,
            height: 0.0,
            x: horizontal_offset(sender),
            y: 0.0,
        });
        id
    }

    pub fn get(&self, id: BubbleId) -> Option<&Bubble> {
        self.bubbles.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BubbleId) -> Option<&mut Bubble> {
        self.bubbles.iter_mut().find(|b| b.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bubble> {
        self.bubbles.iter()
    }

    /// All bubbles in visual order, for full re-layout passes.
    pub fn as_mut_slice(&mut self) -> &mut [Bubble] {
        &mut self.bubbles
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    /// Destroy every bubble. Ids are never reused.
    pub fn clear(&mut self) {
        self.bubbles.clear();
    }
}

/// Measurement substrate: reports a bubble's settled height.
///
/// Heights are only trustworthy one render cycle after a content or
/// layout-constraint change, so callers read them on the tick after the
/// change, never the same tick.
pub trait HeightProbe {
    fn height_of(&self, bubble: &Bubble) -> f32;
}

/// Deterministic text-metrics model; the default probe for engine and ui.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextMetrics;

impl HeightProbe for TextMetrics {
    fn height_of(&self, bubble: &Bubble) -> f32 {
        let pad = padding(bubble.sender);
        match &bubble.content {
            BubbleContent::Empty => pad.top + pad.bottom,
            BubbleContent::Thinking => PLACEHOLDER_HEIGHT,
            BubbleContent::Text(wrapped) => {
                let lines = wrapped.lines().count().max(1) as f32;
                lines * LINE_HEIGHT + pad.top + pad.bottom
            }
            BubbleContent::Image { .. } => IMAGE_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_styles_by_sender() {
        let mut bubbles = BubbleSet::new();
        let user = bubbles.spawn(Sender::User);
        let bot = bubbles.spawn(Sender::Bot);
        let unknown = bubbles.spawn(Sender::Unknown);

        assert_eq!(bubbles.get(user).unwrap().x, USER_OFFSET_X);
        assert_eq!(bubbles.get(bot).unwrap().x, BOT_OFFSET_X);
        assert_eq!(bubbles.get(unknown).unwrap().x, 0.0);

        assert_eq!(padding(Sender::User).left, 10.0);
        assert_eq!(padding(Sender::User).right, 20.0);
        assert_eq!(padding(Sender::Bot).left, 20.0);
        assert_eq!(padding(Sender::Bot).right, 10.0);
    }

    #[test]
    fn test_ids_are_stable_and_unique() {
        let mut bubbles = BubbleSet::new();
        let a = bubbles.spawn(Sender::Bot);
        let b = bubbles.spawn(Sender::Bot);
        assert_ne!(a, b);

        bubbles.clear();
        let c = bubbles.spawn(Sender::Bot);
        // a cleared conversation never resurrects an old id
        assert_ne!(a, c);
        assert!(bubbles.get(a).is_none());
    }

    #[test]
    fn test_attach_text_wraps_label() {
        let mut bubbles = BubbleSet::new();
        let id = bubbles.spawn(Sender::Bot);
        let bubble = bubbles.get_mut(id).unwrap();
        let long = "word ".repeat(20);
        bubble.attach_content(&MessageContent::Text(long));

        match &bubble.content {
            BubbleContent::Text(label) => assert!(label.contains('\n')),
            other => panic!("expected text content, got {:?}", other),
        }
        assert_eq!(bubble.state, ContentState::Revealed);
    }

    #[test]
    fn test_reserved_kinds_render_nothing() {
        let mut bubbles = BubbleSet::new();
        for kind in [
            MessageContent::Attachment,
            MessageContent::Buttons,
            MessageContent::Elements,
            MessageContent::QuickReplies,
        ] {
            let id = bubbles.spawn(Sender::Bot);
            let bubble = bubbles.get_mut(id).unwrap();
            bubble.attach_content(&kind);
            assert_eq!(bubble.content, BubbleContent::Empty);
            assert_eq!(bubble.state, ContentState::Revealed);
        }
    }

    #[test]
    fn test_detach_placeholder_is_idempotent() {
        let mut bubbles = BubbleSet::new();
        let id = bubbles.spawn(Sender::Bot);
        let bubble = bubbles.get_mut(id).unwrap();
        bubble.attach_content(&MessageContent::AnimationPlaceholder);
        assert_eq!(bubble.content, BubbleContent::Thinking);

        bubble.detach_placeholder();
        assert_eq!(bubble.content, BubbleContent::Empty);

        // second detach is a no-op, and text content is never removed
        bubble.detach_placeholder();
        assert_eq!(bubble.content, BubbleContent::Empty);
        bubble.attach_content(&MessageContent::Text("kept".into()));
        bubble.detach_placeholder();
        assert_eq!(bubble.content, BubbleContent::Text("kept".into()));
    }

    #[test]
    fn test_text_metrics_scale_with_line_count() {
        let mut bubbles = BubbleSet::new();
        let id = bubbles.spawn(Sender::Bot);
        let bubble = bubbles.get_mut(id).unwrap();
        let probe = TextMetrics;

        bubble.attach_content(&MessageContent::Text("short".into()));
        let one_line = probe.height_of(bubble);

        bubble.attach_content(&MessageContent::Text("x".repeat(120)));
        let three_lines = probe.height_of(bubble);

        assert_eq!(one_line, LINE_HEIGHT + 10.0);
        assert_eq!(three_lines, 3.0 * LINE_HEIGHT + 10.0);

        bubble.attach_content(&MessageContent::AnimationPlaceholder);
        assert_eq!(probe.height_of(bubble), PLACEHOLDER_HEIGHT);
    }
}
