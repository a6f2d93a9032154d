//! In-memory board for unit tests.

use std::collections::VecDeque;
use std::vec::Vec;

use super::{AudioPort, ButtonPort, Clock, DisplayControl, KeyboardPort, StatusLeds};

pub struct FakeBoard {
    pub front: u32,
    pub back: u32,
    /// Status polls a swap stays pending for.
    pub vsync_polls: u32,
    pending: u32,
    pub swaps: u32,
    pub status_polls: u32,
    pub ps2: VecDeque<u8>,
    pub edge_capture: u32,
    pub edge_acks: Vec<u32>,
    pub samples: Vec<(i32, i32)>,
    pub now: u64,
    /// Added to `now` on every read, so time passes while frames are drawn.
    pub ms_per_read: u64,
    pub leds: u32,
}

impl FakeBoard {
    pub fn new() -> Self {
        Self {
            front: 0,
            back: 0,
            vsync_polls: 2,
            pending: 0,
            swaps: 0,
            status_polls: 0,
            ps2: VecDeque::new(),
            edge_capture: 0,
            edge_acks: Vec::new(),
            samples: Vec::new(),
            now: 0,
            ms_per_read: 0,
            leds: 0,
        }
    }

    pub fn type_bytes(&mut self, bytes: &[u8]) {
        self.ps2.extend(bytes.iter().copied());
    }

    pub fn press(&mut self, mask: u32) {
        self.edge_capture |= mask;
    }
}

impl DisplayControl for FakeBoard {
    fn request_swap(&mut self) {
        self.pending = self.vsync_polls.max(1);
    }

    fn swap_pending(&mut self) -> bool {
        self.status_polls += 1;
        if self.pending == 0 {
            return false;
        }
        self.pending -= 1;
        if self.pending == 0 {
            core::mem::swap(&mut self.front, &mut self.back);
            self.swaps += 1;
            return false;
        }
        true
    }

    fn set_back_buffer(&mut self, addr: u32) {
        self.back = addr;
    }

    fn back_buffer(&mut self) -> u32 {
        self.back
    }

    fn front_buffer(&mut self) -> u32 {
        self.front
    }
}

impl KeyboardPort for FakeBoard {
    fn read_data(&mut self) -> u32 {
        match self.ps2.pop_front() {
            Some(byte) => 0x8000 | byte as u32,
            None => 0,
        }
    }
}

impl ButtonPort for FakeBoard {
    fn edges(&mut self) -> u32 {
        self.edge_capture
    }

    fn clear_edges(&mut self, mask: u32) {
        self.edge_acks.push(mask);
        self.edge_capture &= !mask;
    }
}

impl AudioPort for FakeBoard {
    fn write_sample(&mut self, left: i32, right: i32) {
        self.samples.push((left, right));
    }
}

impl Clock for FakeBoard {
    fn now_ms(&mut self) -> u64 {
        let now = self.now;
        self.now += self.ms_per_read;
        now
    }
}

impl StatusLeds for FakeBoard {
    fn show(&mut self, bits: u32) {
        self.leds = bits;
    }
}
