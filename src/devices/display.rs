//! # Display Manager
//!
//! Owns both pixel buffers and which one is writable. Drawing always goes
//! to the back buffer through a short-lived `FrameBuffer` borrow; `present`
//! swaps at vertical blank and the other buffer becomes writable.
//!
//! ```text
//!   draw ──▶ back buffer ──present()──▶ front buffer (scanned out)
//!              ▲                             │
//!              └──────── becomes back ◀──────┘
//! ```

use log::{debug, warn};

use crate::devices::framebuffer::{Color, FrameBuffer, BUFFER_LEN};
use crate::hal::DisplayControl;

/// One pixel buffer: the address the controller knows it by, and its memory.
pub struct Buffer<M> {
    pub addr: u32,
    pub pixels: M,
}

impl<M: AsMut<[u16]>> Buffer<M> {
    pub fn new(addr: u32, pixels: M) -> Self {
        Self { addr, pixels }
    }
}

pub struct DisplayManager<M> {
    buffers: [Buffer<M>; 2],
    back: usize,
    background: Color,
}

impl<M: AsMut<[u16]>> DisplayManager<M> {
    pub fn new(front: Buffer<M>, back: Buffer<M>, background: Color) -> Self {
        Self {
            buffers: [front, back],
            back: 1,
            background,
        }
    }

    /// Hand both buffers to the controller.
    ///
    /// Buffer 0 is made the front buffer through one swap, then buffer 1 is
    /// registered as the back buffer. Both are cleared.
    pub fn init<D: DisplayControl>(&mut self, regs: &mut D) -> Result<(), &'static str> {
        for buffer in self.buffers.iter_mut() {
            if buffer.pixels.as_mut().len() < BUFFER_LEN {
                return Err("pixel buffer smaller than 512x240");
            }
        }

        regs.set_back_buffer(self.buffers[0].addr);
        Self::wait_for_vsync(regs);
        if regs.front_buffer() != self.buffers[0].addr {
            warn!("front buffer is {:#x} after init swap", regs.front_buffer());
        }
        self.back = 0;
        self.clear();

        regs.set_back_buffer(self.buffers[1].addr);
        if regs.back_buffer() != self.buffers[1].addr {
            return Err("back buffer register did not take the address");
        }
        self.back = 1;
        self.clear();
        debug!(
            "display: front {:#x}, back {:#x}",
            self.buffers[0].addr, self.buffers[1].addr
        );
        Ok(())
    }

    /// The writable buffer for this frame.
    pub fn back(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(self.buffers[self.back].pixels.as_mut())
    }

    pub fn back_addr(&self) -> u32 {
        self.buffers[self.back].addr
    }

    /// Paint the whole writable buffer with the background color.
    pub fn clear(&mut self) {
        let bg = self.background;
        self.back().clear(bg);
    }

    /// Paint the columns `x_min..x_max` of the writable buffer, all rows.
    pub fn clear_region(&mut self, x_min: usize, x_max: usize) {
        let bg = self.background;
        self.back().clear_columns(x_min, x_max, bg);
    }

    /// Clear front and back, e.g. when a round starts.
    pub fn clear_both(&mut self) {
        let bg = self.background;
        for buffer in self.buffers.iter_mut() {
            FrameBuffer::new(buffer.pixels.as_mut()).clear(bg);
        }
    }

    /// Swap at the next vertical blank and make the old front writable.
    ///
    /// Spins until the controller reports the swap done. Nothing else runs
    /// meanwhile.
    pub fn present<D: DisplayControl>(&mut self, regs: &mut D) {
        Self::wait_for_vsync(regs);
        self.back ^= 1;
    }

    fn wait_for_vsync<D: DisplayControl>(regs: &mut D) {
        regs.request_swap();
        while regs.swap_pending() {
            core::hint::spin_loop();
        }
    }
}
