//! Game tunables.
use crate::devices::drivers::audio::Tone;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Health at the start of every round; one melt stage per point.
    pub initial_health: u8,
    /// Keys arriving this soon after a processed guess are dropped.
    pub debounce_ms: u64,
    pub win_tone: Tone,
    pub loss_tone: Tone,
    /// Downward acceleration of falling parts, pixels per frame².
    pub gravity: i32,
    /// Radius lost per frame by shrinking parts.
    pub shrink_step: i32,
    pub theme: Theme,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            initial_health: 5,
            debounce_ms: 200,
            win_tone: Tone::new(880, 500),
            loss_tone: Tone::new(220, 800),
            gravity: 1,
            shrink_step: 3,
            theme: Theme::night(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
