//! # Framebuffer Graphics Module
//!
//! Drawing into one 320x240 RGB565 back buffer.
//!
//! ## Modules
//!
//! - `framebuffer`: `FrameBuffer` handle, `plot`, embedded-graphics `DrawTarget`
//! - `raster`: Bresenham lines and filled circles
//! - `font`: 8x8 glyphs for A–Z and `_`, drawn 8x16
//! - `color`: the RGB565 palette
//!
//! ## Memory Layout
//!
//! Rows are 1024 bytes apart regardless of the 320-pixel width, so pixel
//! (x, y) is at byte offset `(y << 10) + (x << 1)`. `plot` is the hot path
//! and does not clip; the `DrawTarget` path (used for clears) does.

pub mod color;
pub mod font;
pub mod framebuffer;
pub mod raster;

pub use color::Color;
pub use framebuffer::{FrameBuffer, BUFFER_LEN, HEIGHT, STRIDE, WIDTH};
