//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Command-Parser, Mode-State und Renderer der LED-Strip-Steuerung
//! als Pure Functions und Traits.

#![no_std]

pub mod command;
pub mod render;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use command::{parse_command, parse_i32_or_zero};
pub use render::{
    CHASE_RUN_LENGTH, RAINBOW_FRAME_DELAY_MS, RAINBOW_HUE_STEP, RenderPhase, render_frame,
    scale_brightness,
};
pub use traits::{LedError, StripWriter};
pub use types::{ChaseSettings, Command, LedMode, StripState};
