//! Rendering helpers shared by the app's panels.

pub mod bubbles;
pub mod theme;
