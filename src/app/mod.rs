//! Application module structure for BotPanelApp
//!
//! This module organizes the controller into focused submodules:
//! - `core`: BotPanelApp struct, initialization, and outbound send path
//! - `events`: Event processing from the backend
//! - `update`: Per-frame engine step and the eframe update loop
//! - `ui::launcher_bar`: Launcher strip with the Assistant toggle
//! - `ui::panels`: Sliding chat panel and bubble stack rendering
//! - `ui::input`: Message input panel with history and refocus

pub mod core;
pub mod events;
pub mod ui;
pub mod update;

// Re-export BotPanelApp for public API
pub use self::core::BotPanelApp;
