//! Vertical slot bookkeeping and scroll-viewport sizing for the bubble stack.
//!
//! `cumulative_height` is the single shared layout variable: it always equals
//! the initial padding plus `padding + height` for every placed bubble, in
//! arrival order. All mutation goes through the operations below.

use crate::bubble::{Bubble, BubbleSet};

/// Space between chat bubbles, and the initial stack offset.
pub const MESSAGE_PADDING: f32 = 15.0;
/// Stack extent beyond which the scroll content grows to fit.
pub const VIEWPORT_EXPAND_THRESHOLD: f32 = 340.0;
/// Defensive floor for bubbles measured mid-creation.
pub const MIN_BUBBLE_HEIGHT: f32 = 35.0;

/// Owns the running stack offset and the scroll-content height.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutStack {
    cumulative_height: f32,
    /// Scroll-content height; fixed until the stack outgrows the threshold
    viewport_height: f32,
    viewport_expanded: bool,
    scroll_to_bottom: bool,
}

impl Default for LayoutStack {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutStack {
    pub fn new() -> Self {
        Self {
            cumulative_height: MESSAGE_PADDING,
            viewport_height: VIEWPORT_EXPAND_THRESHOLD,
            viewport_expanded: false,
            scroll_to_bottom: false,
        }
    }

    pub fn cumulative_height(&self) -> f32 {
        self.cumulative_height
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn viewport_expanded(&self) -> bool {
        self.viewport_expanded
    }

    /// Assign the next vertical slot to a measured bubble.
    ///
    /// The bubble's height must already be settled; placing before
    /// measurement yields a wrong offset, which is why every caller waits one
    /// render cycle after attaching content.
    pub fn place(&mut self, bubble: &mut Bubble) {
        self.cumulative_height += MESSAGE_PADDING + bubble.height;
        bubble.y = -self.cumulative_height;
        self.expand_viewport_if_needed();
    }

    /// Give back a bubble's slot before its content is replaced, so the slot
    /// can be recomputed without double-counting.
    pub fn release(&mut self, bubble: &Bubble) {
        self.cumulative_height -= MESSAGE_PADDING + bubble.height;
    }

    /// Grow the scroll content once the stack outgrows the threshold and pin
    /// the view to the bottom.
    pub fn expand_viewport_if_needed(&mut self) {
        if self.cumulative_height > VIEWPORT_EXPAND_THRESHOLD {
            self.viewport_height = self.cumulative_height + MESSAGE_PADDING;
            self.viewport_expanded = true;
            self.scroll_to_bottom = true;
        }
    }

    /// Full re-layout of every bubble in visual order.
    ///
    /// Bubbles shorter than the floor (typically mid-creation, reporting
    /// zero) are treated as floor-height. Used after batch operations where
    /// incremental placement would drift.
    pub fn recompute_all(&mut self, bubbles: &mut BubbleSet) {
        let mut height = MESSAGE_PADDING;
        for bubble in bubbles.as_mut_slice() {
            height += bubble.height.max(MIN_BUBBLE_HEIGHT) + MESSAGE_PADDING;
            bubble.y = -height;
        }
        self.cumulative_height = height;
        self.expand_viewport_if_needed();
    }

    /// Consume the pending scroll-to-bottom request.
    pub fn take_scroll_to_bottom(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_bottom)
    }

    /// Back to an empty stack; called when the conversation is cleared.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
