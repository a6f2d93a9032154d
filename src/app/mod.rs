//! # Frame Loop
//!
//! Ties the board, the display manager and the game model together. One
//! call to [`App::step`] is one frame:
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌────────────┐   ┌──────────┐   ┌─────────┐
//! │  input   │──▶│  update  │──▶│  effects   │──▶│  render  │──▶│ present │
//! │ KEY, PS2 │   │  Game    │   │ clear/melt │   │  scene   │   │ + tone  │
//! └──────────┘   └──────────┘   └────────────┘   └──────────┘   └─────────┘
//! ```
//!
//! ## Effects
//!
//! The model only reports what happened; the loop decides what that means
//! on screen and on the speaker:
//!
//! - `Started` / `Restarted`: both buffers are cleared
//! - `Missed`: the melt for the new health plays to completion, no input read
//! - `Won` / `Lost`: the matching tone plays once, after the frame is shown

use log::{debug, info, trace};
use rand::RngCore;

use crate::config::Config;
use crate::devices::display::DisplayManager;
use crate::devices::drivers::audio::Tone;
use crate::devices::drivers::buttons::read_button_edges;
use crate::devices::drivers::ps2_keyboard::Keyboard;
use crate::game::{Debounce, Event, FrameInput, Game, GameState};
use crate::hal::Board;
use crate::ui::melt::Melt;
use crate::ui::scene;
use crate::ui::snowman::{X_MAX, X_MIN};

pub struct App<B, R, M> {
    board: B,
    display: DisplayManager<M>,
    keyboard: Keyboard,
    debounce: Debounce,
    game: Game<R>,
    config: Config,
}

impl<B: Board, R: RngCore, M: AsMut<[u16]>> App<B, R, M> {
    /// `display` must already be initialized against `board`.
    pub fn new(board: B, display: DisplayManager<M>, rng: R, config: Config) -> Self {
        Self {
            board,
            display,
            keyboard: Keyboard::new(),
            debounce: Debounce::new(config.debounce_ms),
            game: Game::new(rng, config.initial_health),
            config,
        }
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    pub fn run(mut self) -> ! {
        info!("entering frame loop");
        loop {
            self.step();
        }
    }

    pub fn step(&mut self) {
        let buttons = read_button_edges(&mut self.board);
        let now = self.board.now_ms();
        let key = match self.keyboard.poll_key(&mut self.board) {
            Some(key) if !self.debounce.is_settled(now) => {
                trace!("'{}' dropped by debounce", key);
                None
            }
            key => key,
        };

        let guessing = self.game.state() == GameState::Playing;
        let events = self.game.update(FrameInput { buttons, key });
        if guessing && key.is_some() && self.game.state() != GameState::Menu {
            self.debounce.arm(now);
        }

        let mut tone: Option<Tone> = None;
        for event in events {
            match event {
                Event::Started(_) | Event::Restarted => {
                    self.display.clear_both();
                    self.debounce.reset();
                }
                Event::Missed { health, .. } => self.run_melt(health),
                Event::Won => tone = Some(self.config.win_tone),
                Event::Lost => tone = Some(self.config.loss_tone),
                Event::Revealed { .. } => {}
            }
        }

        self.display.clear();
        scene::render(&mut self.display.back(), &self.config.theme, &self.game);
        self.board.show(self.game.state().code());
        self.display.present(&mut self.board);

        if let Some(tone) = tone {
            tone.play(&mut self.board);
        }
    }

    /// Play the melt that leads to `health`, one presented frame per pose.
    fn run_melt(&mut self, health: u8) {
        let Some(melt) = Melt::for_health(health) else {
            return;
        };
        debug!("melt {:?}", melt);
        let code = GameState::Playing.code();
        for figure in melt.frames(self.config.gravity, self.config.shrink_step) {
            self.display.clear_region(X_MIN, X_MAX);
            scene::render_melt_frame(&mut self.display.back(), &self.config.theme, &self.game, &figure);
            self.board.show(code);
            self.display.present(&mut self.board);
        }
    }
}
