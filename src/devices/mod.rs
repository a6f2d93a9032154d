//! Device Subsystem
//!
//! Hardware device drivers and abstractions:
//! - `drivers`: PS/2 keyboard, push buttons, audio tones
//! - `framebuffer`: rasterizing into a 320x240 RGB565 buffer
//! - `display`: double buffering and vsync-synchronized presentation

pub mod display;
pub mod drivers;
pub mod framebuffer;
