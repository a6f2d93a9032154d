//! Screen layouts for each game state.
//!
//! ```text
//!   y   0 ┌──────────────────────────────┐
//!         │           snowman            │  columns X_MIN..X_MAX
//!   y 165 ├──────────── ground ──────────┤
//!   y 176 │          A _ P _ E           │  word row, centred
//!   y 200 │ MISSED  Z  Q                 │  miss log, left aligned
//!   y 220 │           YOU WON            │  message
//!         └──────────────────────────────┘
//! ```

use heapless::String;
use rand::RngCore;

use super::snowman::{Figure, Stage};
use super::theme::Theme;
use crate::devices::framebuffer::color::Color;
use crate::devices::framebuffer::font::{text_width, ADVANCE};
use crate::devices::framebuffer::{FrameBuffer, WIDTH};
use crate::game::{Game, GameState, MAX_WORD_LEN};

pub const WORD_Y: i32 = 176;
pub const MISSES_Y: i32 = 200;
pub const MESSAGE_Y: i32 = 220;

const MISSES_LABEL: &str = "MISSED";
const MISSES_X: i32 = 10;
const MISS_LETTERS_X: i32 = 80;
/// Miss letters that fit on one row.
pub const MISS_SLOTS: usize = ((WIDTH as i32 - MISS_LETTERS_X) / (2 * ADVANCE)) as usize;

pub type WordRow = String<{ 2 * MAX_WORD_LEN }>;

/// Left edge that centres `text` on the screen.
fn centred(text: &str) -> i32 {
    ((WIDTH as i32 - text_width(text)) / 2).max(0)
}

/// "A _ P _ E": letters where revealed (or all of them with `show_all`),
/// underscores elsewhere, one space between.
pub fn word_row<R: RngCore>(game: &Game<R>, show_all: bool) -> WordRow {
    let mut row = WordRow::new();
    for (i, (ch, letter)) in game.word().chars().zip(game.letters()).enumerate() {
        if i > 0 {
            row.push(' ').ok();
        }
        let shown = if show_all { Some(ch) } else { letter };
        row.push(shown.map_or('_', |c| c.to_ascii_uppercase())).ok();
    }
    row
}

fn draw_word<R: RngCore>(fb: &mut FrameBuffer<'_>, game: &Game<R>, show_all: bool, color: Color) {
    let row = word_row(game, show_all);
    fb.text(&row, centred(&row), WORD_Y, color);
}

fn draw_misses<R: RngCore>(fb: &mut FrameBuffer<'_>, theme: &Theme, game: &Game<R>) {
    fb.text(MISSES_LABEL, MISSES_X, MISSES_Y, theme.text);
    let mut x = MISS_LETTERS_X;
    for &letter in game.misses().iter().take(MISS_SLOTS) {
        fb.glyph(letter, x, MISSES_Y, theme.misses);
        x += 2 * ADVANCE;
    }
}

/// Word row and miss log, colored by outcome once the round is over.
pub fn draw_hud<R: RngCore>(fb: &mut FrameBuffer<'_>, theme: &Theme, game: &Game<R>) {
    let (show_all, word_color) = match game.state() {
        GameState::Won => (true, theme.success),
        GameState::Lost => (true, theme.failure),
        _ => (false, theme.text),
    };
    draw_word(fb, game, show_all, word_color);
    draw_misses(fb, theme, game);
}

fn draw_message(fb: &mut FrameBuffer<'_>, message: &str, color: Color) {
    fb.text(message, centred(message), MESSAGE_Y, color);
}

fn draw_menu(fb: &mut FrameBuffer<'_>, theme: &Theme) {
    Stage::Full.figure().draw(fb, theme);

    let title = "MELTING SNOWMAN";
    fb.text(title, centred(title), WORD_Y, theme.title);

    let column = WIDTH as i32 / 3;
    for (i, (tier, key)) in [("EASY", "KEY ONE"), ("MEDIUM", "KEY TWO"), ("HARD", "KEY THREE")]
        .into_iter()
        .enumerate()
    {
        let mid = column * i as i32 + column / 2;
        fb.text(tier, mid - text_width(tier) / 2, MISSES_Y, theme.text);
        fb.text(key, mid - text_width(key) / 2, MESSAGE_Y, theme.misses);
    }
}

/// Compose the whole screen for the current state. The caller clears first.
pub fn render<R: RngCore>(fb: &mut FrameBuffer<'_>, theme: &Theme, game: &Game<R>) {
    match game.state() {
        GameState::Menu => draw_menu(fb, theme),
        GameState::Playing => {
            Stage::for_health(game.health()).figure().draw(fb, theme);
            draw_hud(fb, theme, game);
        }
        GameState::Won => {
            Stage::Full.figure().draw(fb, theme);
            draw_hud(fb, theme, game);
            draw_message(fb, "YOU WON", theme.success);
        }
        GameState::Lost => {
            Stage::Melted.figure().draw(fb, theme);
            draw_hud(fb, theme, game);
            draw_message(fb, "YOU LOST", theme.failure);
        }
    }
}

/// One melt animation frame: the pose plus the in-round HUD.
///
/// Only the snowman band is cleared between melt frames, so the HUD is
/// drawn exactly as the last in-round frame had it, even when this melt
/// ends the round.
pub fn render_melt_frame<R: RngCore>(
    fb: &mut FrameBuffer<'_>,
    theme: &Theme,
    game: &Game<R>,
    figure: &Figure,
) {
    figure.draw(fb, theme);
    draw_word(fb, game, false, theme.text);
    draw_misses(fb, theme, game);
}
