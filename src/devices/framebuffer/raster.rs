//! Line and circle rasterization on top of `plot`.
use crate::devices::framebuffer::{color::Color, framebuffer::FrameBuffer};

impl FrameBuffer<'_> {
    /// Draw a line using Bresenham's algorithm.
    ///
    /// Steep lines are transposed so the loop always walks the major axis,
    /// and endpoints are ordered so x only increases. Both endpoints are
    /// plotted, which makes the pixel set independent of endpoint order.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (mut x0, mut y0, mut x1, mut y1) = (x0, y0, x1, y1);
        let is_steep = (y1 - y0).abs() > (x1 - x0).abs();
        if is_steep {
            core::mem::swap(&mut x0, &mut y0);
            core::mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            core::mem::swap(&mut x0, &mut x1);
            core::mem::swap(&mut y0, &mut y1);
        }

        let delta_x = x1 - x0;
        let delta_y = (y1 - y0).abs();
        let y_step = if y0 < y1 { 1 } else { -1 };
        let mut error = -(delta_x / 2);
        let mut y = y0;

        for x in x0..x1 {
            self.plot_oriented(is_steep, x, y, color);
            error += delta_y;
            if error >= 0 {
                y += y_step;
                error -= delta_x;
            }
        }
        self.plot_oriented(is_steep, x1, y1, color);
    }

    #[inline]
    fn plot_oriented(&mut self, is_steep: bool, x: i32, y: i32, color: Color) {
        if is_steep {
            self.plot(y, x, color);
        } else {
            self.plot(x, y, color);
        }
    }

    /// Fill every pixel within `radius` of the center.
    ///
    /// O(r²); the bounding square must lie on screen.
    pub fn filled_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        let radius_sq = radius * radius;
        for y in cy - radius..=cy + radius {
            for x in cx - radius..=cx + radius {
                let dx = x - cx;
                let dy = y - cy;
                if dx * dx + dy * dy <= radius_sq {
                    self.plot(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::devices::framebuffer::{
        color::Color,
        framebuffer::{FrameBuffer, BUFFER_LEN, HEIGHT, WIDTH},
    };
    use std::collections::{BTreeSet, VecDeque};
    use std::vec::Vec;

    type PixelSet = BTreeSet<(i32, i32)>;

    fn lit(mem: &[u16]) -> PixelSet {
        let mut set = PixelSet::new();
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                if mem[y * 512 + x] != 0 {
                    set.insert((x as i32, y as i32));
                }
            }
        }
        set
    }

    fn draw_line(x0: i32, y0: i32, x1: i32, y1: i32) -> PixelSet {
        let mut mem = vec![0u16; BUFFER_LEN];
        FrameBuffer::new(&mut mem).line(x0, y0, x1, y1, Color::WHITE);
        lit(&mem)
    }

    fn connected(set: &PixelSet, from: (i32, i32), to: (i32, i32)) -> bool {
        let mut seen = PixelSet::new();
        let mut queue = VecDeque::from([from]);
        seen.insert(from);
        while let Some((x, y)) = queue.pop_front() {
            if (x, y) == to {
                return true;
            }
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let next = (x + dx, y + dy);
                    if set.contains(&next) && seen.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }
        false
    }

    fn endpoints() -> Vec<(i32, i32, i32, i32)> {
        let mut cases = Vec::new();
        let centers = [(160, 120), (10, 10), (300, 200)];
        let offsets = [
            (0, 0), (1, 0), (0, 1), (1, 1), (-1, 1), (7, 3), (3, 7), (-7, 3), (-3, -7),
            (15, -2), (-2, 15), (12, 12), (-12, 12), (19, 0), (0, -19), (5, -18),
        ];
        for &(cx, cy) in &centers {
            for &(dx, dy) in &offsets {
                let (x1, y1) = (cx + dx, cy + dy);
                if (0..WIDTH as i32).contains(&x1) && (0..HEIGHT as i32).contains(&y1) {
                    cases.push((cx, cy, x1, y1));
                }
            }
        }
        cases
    }

    #[test]
    fn test_line_is_connected_from_start_to_end() {
        for (x0, y0, x1, y1) in endpoints() {
            let set = draw_line(x0, y0, x1, y1);
            assert!(set.contains(&(x0, y0)), "start missing for {:?}", (x0, y0, x1, y1));
            assert!(set.contains(&(x1, y1)), "end missing for {:?}", (x0, y0, x1, y1));
            assert!(connected(&set, (x0, y0), (x1, y1)), "gap in {:?}", (x0, y0, x1, y1));
            let major = (x1 - x0).abs().max((y1 - y0).abs());
            assert_eq!(set.len() as i32, major + 1);
        }
    }

    #[test]
    fn test_line_symmetric_under_endpoint_swap() {
        for (x0, y0, x1, y1) in endpoints() {
            assert_eq!(draw_line(x0, y0, x1, y1), draw_line(x1, y1, x0, y0));
        }
    }

    #[test]
    fn test_horizontal_and_vertical_lines() {
        let set = draw_line(10, 5, 14, 5);
        assert_eq!(set, [(10, 5), (11, 5), (12, 5), (13, 5), (14, 5)].into_iter().collect());
        let set = draw_line(3, 9, 3, 6);
        assert_eq!(set, [(3, 6), (3, 7), (3, 8), (3, 9)].into_iter().collect());
    }

    #[test]
    fn test_filled_circle_has_no_holes_and_stays_inside() {
        for (cx, cy, r) in [(160, 120, 0), (50, 50, 1), (100, 80, 7), (160, 120, 45)] {
            let mut mem = vec![0u16; BUFFER_LEN];
            FrameBuffer::new(&mut mem).filled_circle(cx, cy, r, Color::WHITE);
            let set = lit(&mem);
            for &(x, y) in &set {
                let d = (x - cx) * (x - cx) + (y - cy) * (y - cy);
                assert!(d <= r * r, "({x},{y}) outside r={r}");
            }
            for y in cy - r..=cy + r {
                for x in cx - r..=cx + r {
                    let d = (x - cx) * (x - cx) + (y - cy) * (y - cy);
                    if d < r * r {
                        assert!(set.contains(&(x, y)), "hole at ({x},{y}) r={r}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_filled_circle_radius_zero_is_one_pixel() {
        let mut mem = vec![0u16; BUFFER_LEN];
        FrameBuffer::new(&mut mem).filled_circle(20, 30, 0, Color::RED);
        assert_eq!(lit(&mem).len(), 1);
        assert_eq!(mem[30 * 512 + 20], Color::RED.raw());
    }
}
