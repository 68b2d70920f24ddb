//! Input state management for message composition and history.
//!
//! This is the text-input collaborator: the engine flips `interactable` and
//! requests focus; the renderer consumes both and feeds typed text back.

/// Manages all input-related state for the assistant panel.
#[derive(Default)]
pub struct InputState {
    /// Current message being composed
    pub message_input: String,

    /// Whether the field accepts typing; synced to the bot-online flag
    /// every tick
    pub interactable: bool,

    /// One-shot focus request, consumed by the renderer
    wants_focus: bool,

    /// Sent-message history (for up/down arrow navigation)
    pub history: Vec<String>,

    /// Current position in history (None = not navigating)
    pub history_pos: Option<usize>,

    /// Saved input when entering history mode
    pub history_saved_input: Option<String>,
}

impl InputState {
    /// Create a new InputState with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request focus; the renderer grabs it on the next frame.
    pub fn activate(&mut self) {
        self.wants_focus = true;
    }

    /// Consume the pending focus request.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.wants_focus)
    }

    /// Record a sent message and reset history navigation.
    pub fn push_history(&mut self, text: String) {
        self.history.push(text);
        self.history_pos = None;
        self.history_saved_input = None;
    }

    /// Navigate up in message history.
    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }

        if self.history_pos.is_none() {
            // Store current text to restore if user navigates back
            self.history_saved_input = Some(self.message_input.clone());
            self.history_pos = Some(self.history.len() - 1);
        } else if let Some(pos) = self.history_pos {
            if pos > 0 {
                self.history_pos = Some(pos - 1);
            }
        }

        if let Some(pos) = self.history_pos {
            if let Some(h) = self.history.get(pos) {
                self.message_input = h.clone();
            }
        }
    }

    /// Navigate down in message history.
    pub fn history_down(&mut self) {
        if let Some(pos) = self.history_pos {
            if pos + 1 < self.history.len() {
                self.history_pos = Some(pos + 1);
                if let Some(h) = self.history.get(pos + 1) {
                    self.message_input = h.clone();
                }
            } else {
                // Exit history navigation
                self.history_pos = None;
                self.message_input = self.history_saved_input.take().unwrap_or_default();
            }
        }
    }
}
