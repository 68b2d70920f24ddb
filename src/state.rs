//! Core session state, separated from rendering.
//!
//! `ChatState` holds everything that represents the assistant session:
//! bubbles, layout bookkeeping, panel animation, the live bot-online flag.
//! UI components receive it as a parameter rather than owning it.

use chrono::Local;

use crate::bubble::{BubbleId, BubbleSet, HeightProbe};
use crate::layout::LayoutStack;
use crate::logging::Logger;
use crate::panel::PanelAnimator;

/// Lines kept in the system log before the oldest are dropped.
const MAX_SYSTEM_LOG_LINES: usize = 500;

/// Session state owned by the controller and never shared outside the core.
pub struct ChatState {
    /// Live "bot online" flag from the backend; gates input interactivity
    pub bot_online: bool,

    /// Whether the user currently wants the assistant panel on screen
    pub panel_requested: bool,

    /// Every live bubble, in arrival order
    pub bubbles: BubbleSet,

    /// Vertical stack offsets and scroll-viewport sizing
    pub layout: LayoutStack,

    /// Open/close slide animation
    pub panel: PanelAnimator,

    /// Bubbles spawned this render cycle; placed on the next one, once
    /// their measurement has settled
    pub pending_place: Vec<BubbleId>,

    /// Timestamped backend lifecycle lines
    pub system_log: Vec<String>,

    /// Transcript logger for persisting the conversation to disk
    pub logger: Option<Logger>,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            bot_online: false,
            panel_requested: false,
            bubbles: BubbleSet::new(),
            layout: LayoutStack::new(),
            panel: PanelAnimator::new(),
            pending_place: Vec::new(),
            system_log: vec!["Assistant panel ready.".into()],
            logger: Logger::new().ok(),
        }
    }

    /// Append a timestamped line to the system log, bounded.
    pub fn log_system(&mut self, line: &str) {
        let ts = Local::now().format("%H:%M:%S").to_string();
        self.system_log.push(format!("[{}] {}", ts, line));
        if self.system_log.len() > MAX_SYSTEM_LOG_LINES {
            self.system_log.remove(0);
        }
    }

    /// Destroy all bubbles and reset the layout to its initial offsets.
    pub fn clear_conversation(&mut self) {
        self.bubbles.clear();
        self.pending_place.clear();
        self.layout.reset();
    }

    /// Place every bubble spawned last cycle, now that its height settled.
    ///
    /// Bubbles destroyed in the meantime are skipped; a deferred placement
    /// must never fault because its target is gone.
    pub fn flush_pending_placements(&mut self, probe: &dyn HeightProbe) {
        for id in std::mem::take(&mut self.pending_place) {
            if let Some(bubble) = self.bubbles.get_mut(id) {
                bubble.height = probe.height_of(bubble);
                self.layout.place(bubble);
            }
        }
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}
