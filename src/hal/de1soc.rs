//! DE1-SoC computer system register blocks.
//!
//! Each block is a `#[repr(C)]` overlay of `volatile_register` cells placed
//! at its fixed base address. Constructors are `unsafe`: the caller promises
//! the block exists at that address and is not aliased elsewhere.

use core::fmt;

use volatile_register::{RO, RW};

use super::{AudioPort, ButtonPort, Clock, DisplayControl, KeyboardPort, StatusLeds};

pub const SDRAM_BASE: u32 = 0xC000_0000;
pub const FPGA_ONCHIP_BASE: u32 = 0xC800_0000;
pub const LEDR_BASE: usize = 0xFF20_0000;
pub const KEY_BASE: usize = 0xFF20_0050;
pub const PS2_BASE: usize = 0xFF20_0100;
pub const JTAG_UART_BASE: usize = 0xFF20_1000;
pub const TIMER_BASE: usize = 0xFF20_2000;
pub const PIXEL_BUF_CTRL_BASE: usize = 0xFF20_3020;
pub const AUDIO_BASE: usize = 0xFF20_3040;

/// Interval timer input clock.
pub const TIMER_HZ: u64 = 100_000_000;

#[repr(C)]
pub struct PixelBufferCtrl {
    pub buffer: RW<u32>,
    pub back_buffer: RW<u32>,
    pub resolution: RO<u32>,
    pub status: RO<u32>,
}

#[repr(C)]
pub struct Ps2Port {
    pub data: RW<u32>,
    pub control: RW<u32>,
}

#[repr(C)]
pub struct KeyPort {
    pub data: RO<u32>,
    _reserved: u32,
    pub interrupt_mask: RW<u32>,
    pub edge_capture: RW<u32>,
}

#[repr(C)]
pub struct AudioCodec {
    pub control: RW<u32>,
    pub fifospace: RO<u32>,
    pub left: RW<u32>,
    pub right: RW<u32>,
}

#[repr(C)]
pub struct IntervalTimer {
    pub status: RW<u32>,
    pub control: RW<u32>,
    pub period_lo: RW<u32>,
    pub period_hi: RW<u32>,
    pub snap_lo: RW<u32>,
    pub snap_hi: RW<u32>,
}

#[repr(C)]
pub struct JtagUart {
    pub data: RW<u32>,
    pub control: RW<u32>,
}

#[repr(C)]
pub struct Leds {
    pub data: RW<u32>,
}

macro_rules! mmio_block {
    ($ty:ty, $base:expr) => {
        impl $ty {
            /// # Safety
            /// The block must be mapped at its base address and owned by the caller.
            pub unsafe fn new() -> &'static mut $ty {
                unsafe { &mut *($base as *mut $ty) }
            }
        }
    };
}

mmio_block!(PixelBufferCtrl, PIXEL_BUF_CTRL_BASE);
mmio_block!(Ps2Port, PS2_BASE);
mmio_block!(KeyPort, KEY_BASE);
mmio_block!(AudioCodec, AUDIO_BASE);
mmio_block!(IntervalTimer, TIMER_BASE);
mmio_block!(JtagUart, JTAG_UART_BASE);
mmio_block!(Leds, LEDR_BASE);

const TIMER_CONT: u32 = 1 << 1;
const TIMER_START: u32 = 1 << 2;

impl IntervalTimer {
    /// Free-run from the maximum period so the snapshot can be read as a
    /// 32-bit down-counter.
    pub fn start_free_running(&mut self) {
        unsafe {
            self.period_lo.write(0xFFFF);
            self.period_hi.write(0xFFFF);
            self.control.write(TIMER_CONT | TIMER_START);
        }
    }

    /// Latch and read the current counter value.
    pub fn snapshot(&mut self) -> u32 {
        unsafe { self.snap_lo.write(0) };
        let lo = self.snap_lo.read() & 0xFFFF;
        let hi = self.snap_hi.read() & 0xFFFF;
        (hi << 16) | lo
    }
}

impl JtagUart {
    /// Free slots in the write FIFO.
    pub fn write_space(&self) -> u32 {
        self.control.read() >> 16
    }

    pub fn write_byte(&mut self, byte: u8) {
        while self.write_space() == 0 {
            core::hint::spin_loop();
        }
        unsafe { self.data.write(byte as u32) };
    }
}

/// Console output over the JTAG UART. Owned by the console mutex.
pub struct JtagWriter;

impl fmt::Write for JtagWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let uart = unsafe { JtagUart::new() };
        for byte in s.bytes() {
            if byte == b'\n' {
                uart.write_byte(b'\r');
            }
            uart.write_byte(byte);
        }
        Ok(())
    }
}

/// The board as seen by the game: all register blocks plus the clock state.
pub struct De1Soc {
    pixel_ctrl: &'static mut PixelBufferCtrl,
    ps2: &'static mut Ps2Port,
    keys: &'static mut KeyPort,
    audio: &'static mut AudioCodec,
    timer: &'static mut IntervalTimer,
    leds: &'static mut Leds,
    last_snapshot: u32,
    elapsed_ticks: u64,
}

impl De1Soc {
    /// # Safety
    /// Must be called once; every register block is claimed for the lifetime
    /// of the program.
    pub unsafe fn take() -> Self {
        unsafe {
            let timer = IntervalTimer::new();
            timer.start_free_running();
            let last_snapshot = timer.snapshot();
            Self {
                pixel_ctrl: PixelBufferCtrl::new(),
                ps2: Ps2Port::new(),
                keys: KeyPort::new(),
                audio: AudioCodec::new(),
                timer,
                leds: Leds::new(),
                last_snapshot,
                elapsed_ticks: 0,
            }
        }
    }

    /// Timer counter value, used once as the word-pool seed.
    pub fn entropy(&mut self) -> u64 {
        self.timer.snapshot() as u64
    }

    /// `(width, height)` reported by the pixel buffer controller.
    pub fn resolution(&self) -> (u32, u32) {
        let res = self.pixel_ctrl.resolution.read();
        (res & 0xFFFF, res >> 16)
    }
}

impl DisplayControl for De1Soc {
    fn request_swap(&mut self) {
        unsafe { self.pixel_ctrl.buffer.write(1) };
    }

    fn swap_pending(&mut self) -> bool {
        self.pixel_ctrl.status.read() & 0x01 != 0
    }

    fn set_back_buffer(&mut self, addr: u32) {
        unsafe { self.pixel_ctrl.back_buffer.write(addr) };
    }

    fn back_buffer(&mut self) -> u32 {
        self.pixel_ctrl.back_buffer.read()
    }

    fn front_buffer(&mut self) -> u32 {
        self.pixel_ctrl.buffer.read()
    }
}

impl KeyboardPort for De1Soc {
    fn read_data(&mut self) -> u32 {
        self.ps2.data.read()
    }
}

impl ButtonPort for De1Soc {
    fn edges(&mut self) -> u32 {
        self.keys.edge_capture.read()
    }

    fn clear_edges(&mut self, mask: u32) {
        unsafe { self.keys.edge_capture.write(mask) };
    }
}

impl AudioPort for De1Soc {
    fn write_sample(&mut self, left: i32, right: i32) {
        loop {
            let space = self.audio.fifospace.read();
            let wsrc = (space >> 16) & 0xFF;
            let wslc = (space >> 24) & 0xFF;
            if wsrc > 0 && wslc > 0 {
                break;
            }
            core::hint::spin_loop();
        }
        unsafe {
            self.audio.left.write(left as u32);
            self.audio.right.write(right as u32);
        }
    }
}

impl Clock for De1Soc {
    fn now_ms(&mut self) -> u64 {
        // The counter runs down and wraps every ~43 s; the frame loop polls
        // far more often than that.
        let snap = self.timer.snapshot();
        self.elapsed_ticks += ticks_between(self.last_snapshot, snap) as u64;
        self.last_snapshot = snap;
        ticks_to_ms(self.elapsed_ticks)
    }
}

/// Ticks from snapshot `earlier` to snapshot `later` of the down-counter,
/// across at most one reload from 0 to `0xFFFF_FFFF`.
fn ticks_between(earlier: u32, later: u32) -> u32 {
    earlier.wrapping_sub(later)
}

fn ticks_to_ms(ticks: u64) -> u64 {
    ticks / (TIMER_HZ / 1000)
}

impl StatusLeds for De1Soc {
    fn show(&mut self, bits: u32) {
        unsafe { self.leds.data.write(bits) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_between_counts_down() {
        assert_eq!(ticks_between(1_000, 400), 600);
        assert_eq!(ticks_between(7, 7), 0);
    }

    #[test]
    fn test_ticks_between_crosses_reload() {
        // 5 ticks down to 0, one to reload at 0xFFFF_FFFF, 15 more
        assert_eq!(ticks_between(5, 0xFFFF_FFF0), 21);
        assert_eq!(ticks_between(0, 0xFFFF_FFFF), 1);
    }

    #[test]
    fn test_ticks_to_ms() {
        assert_eq!(ticks_to_ms(99_999), 0);
        assert_eq!(ticks_to_ms(100_000), 1);
        assert_eq!(ticks_to_ms(TIMER_HZ * 3), 3_000);
    }
}
