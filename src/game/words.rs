//! Difficulty tiers and their word pools.

use rand::Rng;

use crate::devices::drivers::buttons::{KEY1, KEY2, KEY3};

/// Longest word any pool holds.
pub const MAX_WORD_LEN: usize = 12;

const EASY: [&str; 8] = ["snow", "cold", "melt", "sled", "hail", "frost", "scarf", "chill"];

const MEDIUM: [&str; 8] = [
    "winter", "carrot", "mitten", "icicle", "freeze", "flurry", "blanket", "glacier",
];

const HARD: [&str; 8] = [
    "blizzard",
    "toboggan",
    "snowflake",
    "avalanche",
    "hibernate",
    "frostbite",
    "snowdrift",
    "permafrost",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Tier chosen by a button edge mask. KEY1 is easy, KEY3 hard; when
    /// several are latched the hardest wins. KEY0 selects nothing.
    pub fn from_buttons(edges: u32) -> Option<Self> {
        if edges & KEY3 != 0 {
            Some(Difficulty::Hard)
        } else if edges & KEY2 != 0 {
            Some(Difficulty::Medium)
        } else if edges & KEY1 != 0 {
            Some(Difficulty::Easy)
        } else {
            None
        }
    }

    pub fn pool(self) -> &'static [&'static str] {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Medium => &MEDIUM,
            Difficulty::Hard => &HARD,
        }
    }

    /// Uniform draw from this tier's pool.
    pub fn pick<R: Rng + ?Sized>(self, rng: &mut R) -> &'static str {
        let pool = self.pool();
        pool[rng.gen_range(0..pool.len())]
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}
