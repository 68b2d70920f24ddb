//! Timed placeholder -> content reveal for bot message batches.
//!
//! Each message runs one full dispatch -> placeholder -> swap -> reveal
//! cycle before the next message in the batch is touched; the per-message
//! thinking delay is the conversational pacing, not an artifact.
//!
//! The scheduler advances at most one phase per tick, so a render-cycle
//! boundary always separates detaching the placeholder, attaching the real
//! content, and reading a measured height.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crossbeam_channel::Sender as ActionSender;

use crate::bubble::{BubbleContent, BubbleId, BubbleSet, HeightProbe};
use crate::layout::LayoutStack;
use crate::protocol::{BackendAction, Message, MessageBatch, MessageContent};

/// How long the thinking marker stays up before the content swap.
pub const REVEAL_DELAY: Duration = Duration::from_secs(2);

/// Where the in-flight message sits in its reveal cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
enum RevealPhase {
    /// Bubble created with the thinking marker; placed next render cycle
    Dispatched,
    /// Placeholder visible and placed; waiting out the reveal delay
    PlaceholderShown { until: Instant },
    /// Slot released, placeholder detached; content attaches next cycle
    Swapping,
    /// Content attached; measured and re-placed next cycle, then done
    Placing,
}

#[derive(Debug)]
struct RevealJob {
    bubble: BubbleId,
    content: MessageContent,
    phase: RevealPhase,
}

/// Drives the reveal protocol for queued bot messages, strictly in order.
#[derive(Debug, Default)]
pub struct RevealScheduler {
    queue: VecDeque<Message>,
    active: Option<RevealJob>,
}

impl RevealScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a batch behind whatever is already pending.
    pub fn enqueue_batch(&mut self, batch: MessageBatch) {
        self.queue.extend(batch.messages);
    }

    /// Messages not yet revealed, including the in-flight one.
    pub fn pending(&self) -> usize {
        self.queue.len() + usize::from(self.active.is_some())
    }

    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }

    /// Drop all queued and in-flight work; used when the conversation is
    /// cleared so a stale job can never touch a destroyed bubble.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.active = None;
    }

    /// Advance the reveal machine by at most one phase.
    ///
    /// Call once per render cycle. A job whose bubble no longer exists is
    /// abandoned silently.
    pub fn tick(
        &mut self,
        now: Instant,
        bubbles: &mut BubbleSet,
        layout: &mut LayoutStack,
        probe: &dyn HeightProbe,
        actions: &ActionSender<BackendAction>,
    ) {
        if self.active.is_none() {
            self.dispatch_next(bubbles);
            return;
        }
        let Some(job) = self.active.as_mut() else {
            return;
        };

        let Some(bubble) = bubbles.get_mut(job.bubble) else {
            // conversation cleared mid-cycle: the reveal becomes a no-op
            self.active = None;
            return;
        };

        let mut finished = false;
        match job.phase {
            RevealPhase::Dispatched => {
                bubble.height = probe.height_of(bubble);
                layout.place(bubble);
                job.phase = RevealPhase::PlaceholderShown {
                    until: now + REVEAL_DELAY,
                };
            }
            RevealPhase::PlaceholderShown { until } => {
                if now >= until {
                    layout.release(bubble);
                    bubble.detach_placeholder();
                    job.phase = RevealPhase::Swapping;
                }
            }
            RevealPhase::Swapping => {
                bubble.attach_content(&job.content);
                if let BubbleContent::Image { url, .. } = &bubble.content {
                    let _ = actions.send(BackendAction::FetchImage {
                        bubble: bubble.id,
                        url: url.clone(),
                    });
                }
                job.phase = RevealPhase::Placing;
            }
            RevealPhase::Placing => {
                bubble.height = probe.height_of(bubble);
                layout.place(bubble);
                finished = true;
            }
        }

        if finished {
            self.active = None;
        }
    }

    /// Create the next queued message's bubble with the thinking marker.
    /// Placement waits for the following render cycle.
    fn dispatch_next(&mut self, bubbles: &mut BubbleSet) {
        let Some(message) = self.queue.pop_front() else {
            return;
        };
        let id = bubbles.spawn(message.sender);
        if let Some(bubble) = bubbles.get_mut(id) {
            bubble.attach_content(&MessageContent::AnimationPlaceholder);
        }
        self.active = Some(RevealJob {
            bubble: id,
            content: message.content,
            phase: RevealPhase::Dispatched,
        });
    }
}
