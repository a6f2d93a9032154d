//! RGB565 palette
use embedded_graphics_core::pixelcolor::{raw::RawU16, Rgb565};

/// A 16-bit RGB565 color. Only the named palette entries exist, so every
/// pixel the game writes is one of a small, known set of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
    pub const YELLOW: Color = Color(0xFFE0);
    pub const RED: Color = Color(0xF800);
    pub const GREEN: Color = Color(0x07E0);
    pub const BLUE: Color = Color(0x001F);
    pub const CYAN: Color = Color(0x07FF);
    pub const MAGENTA: Color = Color(0xF81F);
    pub const GREY: Color = Color(0xC618);
    pub const PINK: Color = Color(0xFC18);
    pub const ORANGE: Color = Color(0xFC00);

    pub const PALETTE: [Color; 11] = [
        Color::BLACK,
        Color::WHITE,
        Color::YELLOW,
        Color::RED,
        Color::GREEN,
        Color::BLUE,
        Color::CYAN,
        Color::MAGENTA,
        Color::GREY,
        Color::PINK,
        Color::ORANGE,
    ];

    /// Raw pixel value as stored in the framebuffer.
    pub const fn raw(self) -> u16 {
        self.0
    }

    pub fn to_rgb565(self) -> Rgb565 {
        Rgb565::from(RawU16::new(self.0))
    }
}

impl From<Color> for Rgb565 {
    fn from(color: Color) -> Self {
        color.to_rgb565()
    }
}
