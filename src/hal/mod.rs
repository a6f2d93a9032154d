//! # Hardware Register Interface
//!
//! Typed ports over the memory-mapped devices the game touches. Everything
//! above this module talks to hardware only through these traits, so the
//! rasterizer, display manager and game loop run unchanged against the
//! in-memory fake used by the unit tests.
//!
//! ## Bindings
//!
//! - `de1soc`: the real register blocks of the DE1-SoC computer system
//! - `fake`: test-only in-memory registers (`cfg(test)`)
//!
//! ```text
//! ┌────────────┐   DisplayControl   ┌──────────────────┐
//! │            │───────────────────▶│ pixel buffer ctl │
//! │            │   KeyboardPort     ├──────────────────┤
//! │   Board    │───────────────────▶│ PS/2 data        │
//! │            │   ButtonPort       ├──────────────────┤
//! │            │───────────────────▶│ KEY edge capture │
//! │            │   AudioPort        ├──────────────────┤
//! │            │───────────────────▶│ audio codec FIFO │
//! │            │   Clock/StatusLeds ├──────────────────┤
//! │            │───────────────────▶│ timer / LEDR     │
//! └────────────┘                    └──────────────────┘
//! ```

pub mod de1soc;
#[cfg(test)]
pub mod fake;

/// Pixel buffer controller.
pub trait DisplayControl {
    /// Write 1 to the buffer register: swap front/back at the next vertical blank.
    fn request_swap(&mut self);
    /// Status bit 0: a requested swap has not happened yet.
    fn swap_pending(&mut self) -> bool;
    fn set_back_buffer(&mut self, addr: u32);
    fn back_buffer(&mut self) -> u32;
    fn front_buffer(&mut self) -> u32;
}

/// PS/2 data register. Bit 15 is RVALID, bits [7:0] hold the byte.
pub trait KeyboardPort {
    fn read_data(&mut self) -> u32;
}

/// Push-button parallel port.
pub trait ButtonPort {
    /// Edge-capture latch.
    fn edges(&mut self) -> u32;
    /// Write back to the edge-capture register to clear the latch.
    fn clear_edges(&mut self, mask: u32);
}

/// Audio codec output FIFO.
pub trait AudioPort {
    /// Push one sample pair, waiting for FIFO space if the device needs it.
    fn write_sample(&mut self, left: i32, right: i32);
}

/// Monotonic millisecond clock.
pub trait Clock {
    fn now_ms(&mut self) -> u64;
}

/// Red status LEDs.
pub trait StatusLeds {
    fn show(&mut self, bits: u32);
}

/// Everything the frame loop needs from the board.
pub trait Board: DisplayControl + KeyboardPort + ButtonPort + AudioPort + Clock + StatusLeds {}

impl<T> Board for T where T: DisplayControl + KeyboardPort + ButtonPort + AudioPort + Clock + StatusLeds {}
