//! Push buttons (KEY0–KEY3) read through the edge-capture latch.

use crate::hal::ButtonPort;

pub const KEY0: u32 = 1 << 0;
pub const KEY1: u32 = 1 << 1;
pub const KEY2: u32 = 1 << 2;
pub const KEY3: u32 = 1 << 3;
pub const ALL_KEYS: u32 = KEY0 | KEY1 | KEY2 | KEY3;

/// Buttons pressed since the previous call.
///
/// The latch is written back after reading, so each press shows up once.
pub fn read_button_edges<P: ButtonPort>(port: &mut P) -> u32 {
    let edges = port.edges() & ALL_KEYS;
    if edges != 0 {
        port.clear_edges(edges);
    }
    edges
}
