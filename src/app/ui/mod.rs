//! Render methods for the launcher bar, the sliding panel, and the input row.

pub mod input;
pub mod launcher_bar;
pub mod panels;
