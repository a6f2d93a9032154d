//! The snowman: one pose per health value, plus the in-between poses the
//! melt animation draws.

use crate::devices::framebuffer::{FrameBuffer, WIDTH};
use crate::ui::theme::Theme;

pub const CX: i32 = (WIDTH / 2) as i32;

pub const HEAD_RADIUS: i32 = 25;
pub const BODY_RADIUS: i32 = 35;
pub const FEET_RADIUS: i32 = 45;

pub const HEAD_Y: i32 = HEAD_RADIUS + 5;
pub const BODY_Y: i32 = HEAD_Y + BODY_RADIUS + 5;
pub const FEET_Y: i32 = BODY_Y + FEET_RADIUS + 5;
/// Bottom of the feet. Falling parts stop here.
pub const GROUND_Y: i32 = FEET_Y + FEET_RADIUS;

// Arm segments relative to the body centre: shoulder, hand, and a twig off
// the hand. Mirrored for the right arm.
const SHOULDER: (i32, i32) = (30, -5);
const HAND: (i32, i32) = (65, -25);
const TWIG: (i32, i32) = (72, -38);
/// Lowest point of an arm, the shoulder.
pub const ARM_LOW_Y: i32 = BODY_Y + SHOULDER.1;

const NOSE_TIP: i32 = 16;
/// Lowest point of the nose.
pub const NOSE_LOW_Y: i32 = HEAD_Y + 4;

const EYE_DX: i32 = 9;
const EYE_Y: i32 = HEAD_Y - 7;
const EYE_RADIUS: i32 = 3;
const BUTTON_RADIUS: i32 = 3;
const BUTTON_DY: [i32; 3] = [-14, 0, 14];

/// Leftmost and rightmost columns any pose touches.
pub const X_MIN: usize = (CX - TWIG.0 - 2) as usize;
pub const X_MAX: usize = (CX + TWIG.0 + 3) as usize;

/// What is left of the snowman at a given health.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Full,
    Armless,
    Noseless,
    Bodiless,
    HeadOnly,
    Melted,
}

impl Stage {
    pub fn for_health(health: u8) -> Self {
        match health {
            0 => Stage::Melted,
            1 => Stage::HeadOnly,
            2 => Stage::Bodiless,
            3 => Stage::Noseless,
            4 => Stage::Armless,
            _ => Stage::Full,
        }
    }

    pub fn figure(self) -> Figure {
        let full = Figure {
            head: HEAD_RADIUS,
            body: BODY_RADIUS,
            feet: FEET_RADIUS,
            nose: Some(0),
            arms: Some(0),
            remains: false,
        };
        match self {
            Stage::Full => full,
            Stage::Armless => Figure { arms: None, ..full },
            Stage::Noseless => Figure { arms: None, nose: None, ..full },
            Stage::Bodiless => Figure { arms: None, nose: None, body: 0, ..full },
            Stage::HeadOnly => Figure { arms: None, nose: None, body: 0, feet: 0, ..full },
            Stage::Melted => Figure {
                head: 0,
                body: 0,
                feet: 0,
                nose: None,
                arms: None,
                remains: true,
            },
        }
    }
}

/// A drawable pose. Radii of 0 are not drawn; `nose` and `arms` hold the
/// distance the part has dropped, `None` once it is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Figure {
    pub head: i32,
    pub body: i32,
    pub feet: i32,
    pub nose: Option<i32>,
    pub arms: Option<i32>,
    pub remains: bool,
}

impl Figure {
    pub fn draw(&self, fb: &mut FrameBuffer<'_>, theme: &Theme) {
        if self.feet > 0 {
            fb.filled_circle(CX, FEET_Y, self.feet, theme.snow);
        }
        if self.body > 0 {
            fb.filled_circle(CX, BODY_Y, self.body, theme.snow);
            for dy in BUTTON_DY {
                if dy.abs() + BUTTON_RADIUS < self.body {
                    fb.filled_circle(CX, BODY_Y + dy, BUTTON_RADIUS, theme.features);
                }
            }
        }
        if self.head > 0 {
            fb.filled_circle(CX, HEAD_Y, self.head, theme.snow);
            if self.head > EYE_DX + EYE_RADIUS + 4 {
                fb.filled_circle(CX - EYE_DX, EYE_Y, EYE_RADIUS, theme.features);
                fb.filled_circle(CX + EYE_DX, EYE_Y, EYE_RADIUS, theme.features);
            }
        }
        if let Some(dy) = self.nose {
            let y = HEAD_Y + dy;
            fb.line(CX, y, CX + NOSE_TIP, y + 2, theme.nose);
            fb.line(CX, y + 1, CX + NOSE_TIP, y + 2, theme.nose);
            fb.line(CX, y + 2, CX + NOSE_TIP, y + 2, theme.nose);
            fb.line(CX, y + 3, CX + NOSE_TIP, y + 2, theme.nose);
            fb.line(CX, y + 4, CX + NOSE_TIP, y + 2, theme.nose);
        }
        if let Some(dy) = self.arms {
            for side in [-1, 1] {
                let at = |(x, y): (i32, i32)| (CX + side * x, BODY_Y + y + dy);
                let (sx, sy) = at(SHOULDER);
                let (hx, hy) = at(HAND);
                let (tx, ty) = at(TWIG);
                fb.line(sx, sy, hx, hy, theme.arms);
                fb.line(sx, sy + 1, hx, hy + 1, theme.arms);
                fb.line(hx, hy, tx, ty, theme.arms);
            }
        }
        if self.remains {
            let (x0, x1) = (CX - HEAD_RADIUS, CX + HEAD_RADIUS);
            let (y0, y1) = (HEAD_Y - HEAD_RADIUS, HEAD_Y + HEAD_RADIUS);
            fb.line(x0, y0, x1, y1, theme.remains);
            fb.line(x0, y1, x1, y0, theme.remains);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::framebuffer::{Color, BUFFER_LEN, HEIGHT};
    use std::vec;

    fn render(figure: Figure) -> vec::Vec<u16> {
        let mut pixels = vec![0u16; BUFFER_LEN];
        figure.draw(&mut FrameBuffer::new(&mut pixels), &Theme::night());
        pixels
    }

    fn at(pixels: &[u16], x: i32, y: i32) -> u16 {
        pixels[y as usize * 512 + x as usize]
    }

    #[test]
    fn test_stage_for_health() {
        assert_eq!(Stage::for_health(5), Stage::Full);
        assert_eq!(Stage::for_health(4), Stage::Armless);
        assert_eq!(Stage::for_health(3), Stage::Noseless);
        assert_eq!(Stage::for_health(2), Stage::Bodiless);
        assert_eq!(Stage::for_health(1), Stage::HeadOnly);
        assert_eq!(Stage::for_health(0), Stage::Melted);
        assert_eq!(Stage::for_health(9), Stage::Full);
    }

    #[test]
    fn test_geometry_stays_on_screen() {
        assert_eq!(GROUND_Y, 165);
        assert!(GROUND_Y < HEIGHT as i32);
        assert!(X_MAX <= WIDTH);
        assert!(ARM_LOW_Y < GROUND_Y && NOSE_LOW_Y < GROUND_Y);
    }

    #[test]
    fn test_full_snowman_parts() {
        let pixels = render(Stage::Full.figure());
        let snow = Color::WHITE.raw();
        assert_eq!(at(&pixels, CX, FEET_Y + 20), snow);
        assert_eq!(at(&pixels, CX + 20, BODY_Y + 20), snow);
        assert_eq!(at(&pixels, CX - EYE_DX, EYE_Y), Color::BLACK.raw());
        assert_eq!(at(&pixels, CX + NOSE_TIP, HEAD_Y + 2), Color::ORANGE.raw());
        assert_eq!(at(&pixels, CX + HAND.0, BODY_Y + HAND.1), Color::GREY.raw());
        assert_eq!(at(&pixels, CX - HAND.0, BODY_Y + HAND.1), Color::GREY.raw());
    }

    #[test]
    fn test_parts_disappear_by_stage() {
        let armless = render(Stage::Armless.figure());
        assert_eq!(at(&armless, CX + HAND.0, BODY_Y + HAND.1), 0);

        let noseless = render(Stage::Noseless.figure());
        assert_eq!(at(&noseless, CX + NOSE_TIP, HEAD_Y + 2), Color::WHITE.raw());

        let bodiless = render(Stage::Bodiless.figure());
        // gap between head and feet where the body was
        assert_eq!(at(&bodiless, CX + 30, BODY_Y), 0);

        let head_only = render(Stage::HeadOnly.figure());
        assert_eq!(at(&head_only, CX, FEET_Y + 20), 0);
        assert_eq!(at(&head_only, CX, HEAD_Y + 10), Color::WHITE.raw());
    }

    #[test]
    fn test_melted_is_a_red_cross() {
        let pixels = render(Stage::Melted.figure());
        let red = Color::RED.raw();
        assert_eq!(at(&pixels, CX, HEAD_Y), red);
        assert_eq!(at(&pixels, CX - HEAD_RADIUS, HEAD_Y - HEAD_RADIUS), red);
        assert_eq!(at(&pixels, CX + HEAD_RADIUS, HEAD_Y - HEAD_RADIUS), red);
        assert_eq!(at(&pixels, CX, FEET_Y), 0);
    }

    #[test]
    fn test_fallen_arms_drawn_lower() {
        let figure = Figure { arms: Some(40), ..Stage::Full.figure() };
        let pixels = render(figure);
        assert_eq!(at(&pixels, CX + HAND.0, BODY_Y + HAND.1 + 40), Color::GREY.raw());
        assert_eq!(at(&pixels, CX + HAND.0, BODY_Y + HAND.1), 0);
    }

    #[test]
    fn test_nothing_drawn_outside_band() {
        let figure = Figure { arms: Some(GROUND_Y - ARM_LOW_Y), ..Stage::Full.figure() };
        let pixels = render(figure);
        for y in 0..HEIGHT {
            for x in (0..X_MIN).chain(X_MAX..WIDTH) {
                assert_eq!(pixels[y * 512 + x], 0, "({x}, {y})");
            }
        }
    }
}
