//! Framebuffer handle using embedded-graphics
use crate::devices::framebuffer::color::Color;
use embedded_graphics::{
    prelude::*,
    pixelcolor::Rgb565,
    primitives::{PrimitiveStyle, Rectangle},
};
use embedded_graphics_core::pixelcolor::IntoStorage;

pub const WIDTH: usize = 320;
pub const HEIGHT: usize = 240;
/// Pixels per row in memory: rows sit 1024 bytes apart whatever the width.
pub const STRIDE: usize = 512;
/// `u16` slots a buffer must provide.
pub const BUFFER_LEN: usize = STRIDE * HEIGHT;

/// Write access to one frame's back buffer.
///
/// Borrowed from the display manager for the duration of a frame; it
/// cannot outlive the next `present`.
pub struct FrameBuffer<'a> {
    pixels: &'a mut [u16],
}

impl<'a> FrameBuffer<'a> {
    pub fn new(pixels: &'a mut [u16]) -> Self {
        debug_assert!(pixels.len() >= BUFFER_LEN);
        Self { pixels }
    }

    /// Write one pixel. Pixel (x, y) lives at byte offset `(y << 10) + (x << 1)`.
    ///
    /// Coordinates must be inside 320x240; nothing here clips them.
    #[inline]
    pub fn plot(&mut self, x: i32, y: i32, color: Color) {
        self.pixels[(y as usize) * STRIDE + x as usize] = color.raw();
    }

    pub fn pixel(&self, x: usize, y: usize) -> u16 {
        self.pixels[y * STRIDE + x]
    }

    /// Fill the whole visible area.
    pub fn clear(&mut self, color: Color) {
        Rectangle::new(Point::zero(), Size::new(WIDTH as u32, HEIGHT as u32))
            .into_styled(PrimitiveStyle::with_fill(color.to_rgb565()))
            .draw(self)
            .ok();
    }

    /// Fill the columns `x_min..x_max` on every row.
    pub fn clear_columns(&mut self, x_min: usize, x_max: usize, color: Color) {
        let x_max = x_max.min(WIDTH);
        if x_min >= x_max {
            return;
        }
        Rectangle::new(
            Point::new(x_min as i32, 0),
            Size::new((x_max - x_min) as u32, HEIGHT as u32),
        )
        .into_styled(PrimitiveStyle::with_fill(color.to_rgb565()))
        .draw(self)
        .ok();
    }
}

// Implement DrawTarget for embedded-graphics
impl DrawTarget for FrameBuffer<'_> {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
                continue;
            }
            self.pixels[y as usize * STRIDE + x as usize] = color.into_storage();
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        let raw = color.into_storage();
        let (x0, x1) = (area.top_left.x as usize, bottom_right.x as usize);
        for y in area.top_left.y as usize..=bottom_right.y as usize {
            let row = y * STRIDE;
            self.pixels[row + x0..=row + x1].fill(raw);
        }
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer<'_> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_uses_1024_byte_rows() {
        let mut mem = vec![0u16; BUFFER_LEN];
        let mut fb = FrameBuffer::new(&mut mem);
        fb.plot(3, 2, Color::RED);
        // byte offset (2 << 10) + (3 << 1) = 2054 -> u16 index 1027
        assert_eq!(mem[1027], Color::RED.raw());
    }

    #[test]
    fn test_clear_fills_visible_area_only() {
        let mut mem = vec![0u16; BUFFER_LEN];
        let mut fb = FrameBuffer::new(&mut mem);
        fb.clear(Color::WHITE);
        assert_eq!(fb.pixel(0, 0), 0xFFFF);
        assert_eq!(fb.pixel(319, 239), 0xFFFF);
        // padding past the logical width is untouched
        assert_eq!(mem[320], 0);
        assert_eq!(mem[STRIDE * 239 + 400], 0);
    }

    #[test]
    fn test_clear_columns_leaves_other_columns() {
        let mut mem = vec![0u16; BUFFER_LEN];
        let mut fb = FrameBuffer::new(&mut mem);
        fb.clear(Color::BLUE);
        fb.clear_columns(100, 200, Color::BLACK);
        assert_eq!(fb.pixel(99, 10), Color::BLUE.raw());
        assert_eq!(fb.pixel(100, 10), 0);
        assert_eq!(fb.pixel(199, 239), 0);
        assert_eq!(fb.pixel(200, 239), Color::BLUE.raw());
    }

    #[test]
    fn test_draw_iter_clips() {
        let mut mem = vec![0u16; BUFFER_LEN];
        let mut fb = FrameBuffer::new(&mut mem);
        fb.draw_iter([
            Pixel(Point::new(-1, 0), Rgb565::RED),
            Pixel(Point::new(320, 0), Rgb565::RED),
            Pixel(Point::new(5, 5), Rgb565::RED),
        ])
        .ok();
        assert_eq!(fb.pixel(5, 5), Color::RED.raw());
        assert_eq!(mem[320], 0);
    }
}
