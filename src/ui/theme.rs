use crate::devices::framebuffer::color::Color;

/// Which palette entry each part of the scene uses.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub snow: Color,
    pub features: Color,
    pub nose: Color,
    pub arms: Color,
    pub remains: Color,
    pub text: Color,
    pub title: Color,
    pub misses: Color,
    pub success: Color,
    pub failure: Color,
}

impl Theme {
    /// White snowman on black.
    pub const fn night() -> Self {
        Self {
            background: Color::BLACK,
            snow: Color::WHITE,
            features: Color::BLACK,
            nose: Color::ORANGE,
            arms: Color::GREY,
            remains: Color::RED,
            text: Color::WHITE,
            title: Color::CYAN,
            misses: Color::PINK,
            success: Color::GREEN,
            failure: Color::RED,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::night()
    }
}
