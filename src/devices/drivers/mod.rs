//! Device Drivers
//!
//! Polled drivers for the board's input and output devices:
//! - PS/2 keyboard (scan code set 2, letters only)
//! - Push buttons (edge-captured)
//! - Audio codec (square-wave tones)

pub mod audio;
pub mod buttons;
pub mod ps2_keyboard;

pub use audio::{play_tone, Tone};
pub use buttons::read_button_edges;
pub use ps2_keyboard::{decode_scancode, Keyboard, ScancodeDecoder};
