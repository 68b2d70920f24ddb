//! Panel slide animation and input-activation gating.
//!
//! The panel slides between a fully-closed offset (off screen) and a
//! fully-open offset in fixed steps. Signals received mid-animation are
//! ignored; an in-flight slide always runs to its terminal offset.

use std::time::{Duration, Instant};

/// Vertical offset when the panel is fully open.
pub const OPEN_OFFSET: f32 = -175.0;
/// Vertical offset when the panel is fully closed (off screen).
pub const CLOSED_OFFSET: f32 = 675.0;
/// Offset change per animation step.
pub const SLIDE_STEP: f32 = 10.0;
/// Interval between animation steps.
pub const SLIDE_INTERVAL: Duration = Duration::from_millis(10);

/// Panel lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Terminal transition reported by a tick, for the controller to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelTransition {
    /// Slide-in finished: activate and focus the text input
    Opened,
    /// Slide-out finished: clear the conversation and hand control back
    Closed,
}

/// Slide state machine, stepped once per render cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelAnimator {
    state: PanelState,
    offset: f32,
    next_step: Option<Instant>,
}

impl Default for PanelAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelAnimator {
    pub fn new() -> Self {
        Self {
            state: PanelState::Closed,
            offset: CLOSED_OFFSET,
            next_step: None,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Current vertical offset, for rendering the slide.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// The panel is drawn whenever it is not fully closed.
    pub fn is_visible(&self) -> bool {
        self.state != PanelState::Closed
    }

    /// Begin sliding in. Ignored unless the panel is fully closed.
    pub fn request_open(&mut self, now: Instant) {
        if self.state == PanelState::Closed {
            self.state = PanelState::Opening;
            self.next_step = Some(now);
        }
    }

    /// Begin sliding out. Ignored unless the panel is fully open.
    pub fn request_close(&mut self, now: Instant) {
        if self.state == PanelState::Open {
            self.state = PanelState::Closing;
            self.next_step = Some(now);
        }
    }

    /// Advance the slide one step if its interval elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<PanelTransition> {
        match self.state {
            PanelState::Opening => {
                if self.step_due(now) {
                    self.offset -= SLIDE_STEP;
                }
                if self.offset <= OPEN_OFFSET {
                    self.offset = OPEN_OFFSET;
                    self.state = PanelState::Open;
                    self.next_step = None;
                    return Some(PanelTransition::Opened);
                }
                None
            }
            PanelState::Closing => {
                if self.step_due(now) {
                    self.offset += SLIDE_STEP;
                }
                if self.offset >= CLOSED_OFFSET {
                    self.offset = CLOSED_OFFSET;
                    self.state = PanelState::Closed;
                    self.next_step = None;
                    return Some(PanelTransition::Closed);
                }
                None
            }
            PanelState::Closed | PanelState::Open => None,
        }
    }

    fn step_due(&mut self, now: Instant) -> bool {
        match self.next_step {
            Some(at) if now >= at => {
                self.next_step = Some(now + SLIDE_INTERVAL);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive ticks with the step interval elapsed every time, until the
    /// animator reports a transition or the step budget runs out.
    fn run_to_transition(panel: &mut PanelAnimator, mut now: Instant) -> (PanelTransition, Instant) {
        for _ in 0..1000 {
            if let Some(transition) = panel.tick(now) {
                return (transition, now);
            }
            now += SLIDE_INTERVAL;
        }
        panic!("slide never reached its terminal offset");
    }

    #[test]
    fn test_open_terminates_at_open_offset() {
        let mut panel = PanelAnimator::new();
        let now = Instant::now();
        assert_eq!(panel.state(), PanelState::Closed);
        assert_eq!(panel.offset(), CLOSED_OFFSET);

        panel.request_open(now);
        assert_eq!(panel.state(), PanelState::Opening);

        let (transition, _) = run_to_transition(&mut panel, now);
        assert_eq!(transition, PanelTransition::Opened);
        assert_eq!(panel.state(), PanelState::Open);
        assert_eq!(panel.offset(), OPEN_OFFSET);
    }

    #[test]
    fn test_close_terminates_at_closed_offset() {
        let mut panel = PanelAnimator::new();
        let now = Instant::now();
        panel.request_open(now);
        let (_, now) = run_to_transition(&mut panel, now);

        panel.request_close(now);
        let (transition, _) = run_to_transition(&mut panel, now);
        assert_eq!(transition, PanelTransition::Closed);
        assert_eq!(panel.state(), PanelState::Closed);
        assert_eq!(panel.offset(), CLOSED_OFFSET);
    }

    #[test]
    fn test_signals_mid_animation_are_ignored() {
        let mut panel = PanelAnimator::new();
        let mut now = Instant::now();
        panel.request_open(now);
        panel.tick(now);
        now += SLIDE_INTERVAL;
        panel.tick(now);
        assert_eq!(panel.state(), PanelState::Opening);

        // neither signal may preempt the in-flight slide
        panel.request_close(now);
        assert_eq!(panel.state(), PanelState::Opening);
        panel.request_open(now);
        assert_eq!(panel.state(), PanelState::Opening);

        let (transition, _) = run_to_transition(&mut panel, now);
        assert_eq!(transition, PanelTransition::Opened);
    }

    #[test]
    fn test_step_waits_for_interval() {
        let mut panel = PanelAnimator::new();
        let now = Instant::now();
        panel.request_open(now);
        panel.tick(now);
        let offset = panel.offset();

        // same instant again: interval not elapsed, no movement
        panel.tick(now);
        assert_eq!(panel.offset(), offset);

        panel.tick(now + SLIDE_INTERVAL);
        assert_eq!(panel.offset(), offset - SLIDE_STEP);
    }

    #[test]
    fn test_idle_states_do_not_move() {
        let mut panel = PanelAnimator::new();
        let now = Instant::now();
        assert_eq!(panel.tick(now), None);
        assert_eq!(panel.offset(), CLOSED_OFFSET);

        panel.request_open(now);
        let (_, now) = run_to_transition(&mut panel, now);
        assert_eq!(panel.tick(now + SLIDE_INTERVAL), None);
        assert_eq!(panel.offset(), OPEN_OFFSET);
    }
}
