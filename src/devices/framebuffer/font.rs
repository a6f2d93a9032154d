//! 8x8 bitmap font, drawn double height.
use crate::devices::framebuffer::{color::Color, framebuffer::FrameBuffer};

pub const GLYPH_WIDTH: i32 = 8;
/// Each source row is drawn twice.
pub const GLYPH_HEIGHT: i32 = 16;
/// Horizontal advance per character in `text`.
pub const ADVANCE: i32 = 10;

type Bitmap = [u8; 8];

/// A–Z, most significant bit leftmost.
const LETTERS: [Bitmap; 26] = [
    [0x18, 0x3C, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x00], // A
    [0x7C, 0x66, 0x66, 0x7C, 0x66, 0x66, 0x7C, 0x00], // B
    [0x3C, 0x66, 0x60, 0x60, 0x60, 0x66, 0x3C, 0x00], // C
    [0x78, 0x6C, 0x66, 0x66, 0x66, 0x6C, 0x78, 0x00], // D
    [0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x7E, 0x00], // E
    [0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x60, 0x00], // F
    [0x3C, 0x66, 0x60, 0x6E, 0x66, 0x66, 0x3E, 0x00], // G
    [0x66, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x66, 0x00], // H
    [0x3C, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00], // I
    [0x1E, 0x0C, 0x0C, 0x0C, 0x6C, 0x6C, 0x38, 0x00], // J
    [0x66, 0x6C, 0x78, 0x70, 0x78, 0x6C, 0x66, 0x00], // K
    [0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x7E, 0x00], // L
    [0x63, 0x77, 0x7F, 0x6B, 0x63, 0x63, 0x63, 0x00], // M
    [0x66, 0x76, 0x7E, 0x7E, 0x6E, 0x66, 0x66, 0x00], // N
    [0x3C, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00], // O
    [0x7C, 0x66, 0x66, 0x7C, 0x60, 0x60, 0x60, 0x00], // P
    [0x3C, 0x66, 0x66, 0x66, 0x66, 0x6C, 0x36, 0x00], // Q
    [0x7C, 0x66, 0x66, 0x7C, 0x78, 0x6C, 0x66, 0x00], // R
    [0x3C, 0x66, 0x60, 0x3C, 0x06, 0x66, 0x3C, 0x00], // S
    [0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00], // T
    [0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00], // U
    [0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x18, 0x00], // V
    [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00], // W
    [0x66, 0x66, 0x3C, 0x18, 0x3C, 0x66, 0x66, 0x00], // X
    [0x66, 0x66, 0x66, 0x3C, 0x18, 0x18, 0x18, 0x00], // Y
    [0x7E, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x7E, 0x00], // Z
];

const UNDERSCORE: Bitmap = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF];

fn bitmap(ch: char) -> Option<&'static Bitmap> {
    match ch.to_ascii_uppercase() {
        c @ 'A'..='Z' => Some(&LETTERS[(c as u8 - b'A') as usize]),
        '_' => Some(&UNDERSCORE),
        _ => None,
    }
}

/// Pixel width of `text` drawn with `FrameBuffer::text`.
pub fn text_width(text: &str) -> i32 {
    match text.chars().count() as i32 {
        0 => 0,
        n => (n - 1) * ADVANCE + GLYPH_WIDTH,
    }
}

impl FrameBuffer<'_> {
    /// Draw one character with its top-left corner at (x, y).
    /// Characters without a bitmap draw nothing.
    pub fn glyph(&mut self, ch: char, x: i32, y: i32, color: Color) {
        let Some(rows) = bitmap(ch) else {
            return;
        };
        for (row, bits) in rows.iter().enumerate() {
            let py = y + 2 * row as i32;
            for col in 0..GLYPH_WIDTH {
                if bits & (0x80 >> col) != 0 {
                    self.plot(x + col, py, color);
                    self.plot(x + col, py + 1, color);
                }
            }
        }
    }

    /// Draw a string left to right. Spaces only advance the cursor.
    pub fn text(&mut self, text: &str, x: i32, y: i32, color: Color) {
        let mut cursor = x;
        for ch in text.chars() {
            if ch != ' ' {
                self.glyph(ch, cursor, y, color);
            }
            cursor += ADVANCE;
        }
    }
}
