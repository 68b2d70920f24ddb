//! The launcher strip the assistant panel slides over.
//!
//! The panel hands control back here when it fully closes; `reactivate` is
//! the only contract the panel relies on.

/// Launcher state owned by the app.
#[derive(Debug, Default)]
pub struct Launcher {
    /// Whether the launcher currently accepts interaction
    active: bool,
    reactivations: u64,
}

impl Launcher {
    pub fn new() -> Self {
        Self {
            active: true,
            reactivations: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The panel takes over; the launcher goes inert until reactivated.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Hand control back to the launcher. Invoked once per panel close.
    pub fn reactivate(&mut self) {
        self.active = true;
        self.reactivations += 1;
    }

    /// How many times control was handed back; used by lifecycle tests.
    pub fn reactivation_count(&self) -> u64 {
        self.reactivations
    }
}
