//! # PS/2 Keyboard Driver
//!
//! Polls the PS/2 port and turns scan code set 2 make codes into letters.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  RVALID  ┌──────────────────┐
//! │  PS/2 FIFO  │─────────▶│ ScancodeDecoder  │──▶ Option<char>
//! │  (data reg) │          │ - 0xF0 release   │
//! └─────────────┘          │ - 0xE0 extended  │
//!                          └──────────────────┘
//! ```
//!
//! ## Scancode Processing
//!
//! 1. `Keyboard::poll_key` reads the data register while bit 15 is set
//! 2. Each byte goes through `ScancodeDecoder::process_scancode`:
//!    - 0xF0: the next byte is a key release and is dropped
//!    - 0xE0: the next byte is an extended key and is dropped
//!    - anything else is looked up in the letter table
//! 3. The first letter produced is returned; the rest stay in the FIFO

use log::trace;

use crate::hal::KeyboardPort;

const RVALID: u32 = 1 << 15;
const BREAK_PREFIX: u8 = 0xF0;
const EXTENDED_PREFIX: u8 = 0xE0;

/// Set 2 make codes of the letter keys.
const LETTER_CODES: [(u8, char); 26] = [
    (0x1C, 'a'), (0x32, 'b'), (0x21, 'c'), (0x23, 'd'), (0x24, 'e'),
    (0x2B, 'f'), (0x34, 'g'), (0x33, 'h'), (0x43, 'i'), (0x3B, 'j'),
    (0x42, 'k'), (0x4B, 'l'), (0x3A, 'm'), (0x31, 'n'), (0x44, 'o'),
    (0x4D, 'p'), (0x15, 'q'), (0x2D, 'r'), (0x1B, 's'), (0x2C, 't'),
    (0x3C, 'u'), (0x2A, 'v'), (0x1D, 'w'), (0x22, 'x'), (0x35, 'y'),
    (0x1A, 'z'),
];

/// Every byte value mapped to its letter, or 0 for "no character".
const SCANCODE_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < LETTER_CODES.len() {
        let (code, ch) = LETTER_CODES[i];
        table[code as usize] = ch as u8;
        i += 1;
    }
    table
};

/// Letter for a make code. Unmapped codes give `None`.
pub fn decode_scancode(byte: u8) -> Option<char> {
    match SCANCODE_TABLE[byte as usize] {
        0 => None,
        ascii => Some(ascii as char),
    }
}

pub struct ScancodeDecoder {
    is_release: bool,
    is_extended: bool,
}

impl ScancodeDecoder {
    pub const fn new() -> Self {
        Self {
            is_release: false,
            is_extended: false,
        }
    }

    pub fn process_scancode(&mut self, scancode: u8) -> Option<char> {
        match scancode {
            BREAK_PREFIX => {
                self.is_release = true;
                return None;
            }
            EXTENDED_PREFIX => {
                self.is_extended = true;
                return None;
            }
            _ => {}
        }

        // The byte after a prefix belongs to that prefix; consume both.
        let skip = self.is_release || self.is_extended;
        self.is_release = false;
        self.is_extended = false;
        if skip {
            return None;
        }

        let ch = decode_scancode(scancode);
        if ch.is_none() {
            trace!("unmapped scancode {:#04x}", scancode);
        }
        ch
    }
}

impl Default for ScancodeDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// The polled keyboard: decoder state across frames.
pub struct Keyboard {
    decoder: ScancodeDecoder,
}

impl Keyboard {
    pub const fn new() -> Self {
        Self {
            decoder: ScancodeDecoder::new(),
        }
    }

    /// Next letter typed, if any. Drains bytes until one decodes or the
    /// FIFO runs dry.
    pub fn poll_key<P: KeyboardPort>(&mut self, port: &mut P) -> Option<char> {
        loop {
            let data = port.read_data();
            if data & RVALID == 0 {
                return None;
            }
            if let Some(ch) = self.decoder.process_scancode((data & 0xFF) as u8) {
                return Some(ch);
            }
        }
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}
