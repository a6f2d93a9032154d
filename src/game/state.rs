//! The game model: one owner for all round state.

use heapless::Vec;
use log::{debug, info, trace, warn};
use rand_core::RngCore;

use super::words::{Difficulty, MAX_WORD_LEN};
use crate::devices::drivers::buttons::KEY0;

/// Misses a round can hold. Every miss costs one health, so no `u8`
/// starting health can overflow the log.
pub const MAX_MISSES: usize = u8::MAX as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    Lost,
    Won,
}

impl GameState {
    /// Value shown on the status LEDs.
    pub fn code(self) -> u32 {
        match self {
            GameState::Menu => 0,
            GameState::Playing => 1,
            GameState::Lost => 2,
            GameState::Won => 3,
        }
    }
}

/// What an update did. The frame loop turns these into buffer clears,
/// melt animations and tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Started(Difficulty),
    Revealed { letter: char, count: usize },
    Missed { letter: char, health: u8 },
    Won,
    Lost,
    Restarted,
}

pub type Events = Vec<Event, 4>;

/// Input sampled for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub buttons: u32,
    pub key: Option<char>,
}

#[derive(Debug, Clone)]
struct Round {
    word: &'static str,
    revealed: Vec<bool, MAX_WORD_LEN>,
    misses: Vec<char, MAX_MISSES>,
    health: u8,
    difficulty: Option<Difficulty>,
}

impl Round {
    fn empty(health: u8) -> Self {
        Self {
            word: "",
            revealed: Vec::new(),
            misses: Vec::new(),
            health,
            difficulty: None,
        }
    }
}

pub struct Game<R> {
    state: GameState,
    round: Round,
    initial_health: u8,
    rng: R,
}

impl<R: RngCore> Game<R> {
    /// A game sitting in the menu. `rng` is the only random source for
    /// the whole run.
    pub fn new(rng: R, initial_health: u8) -> Self {
        Self {
            state: GameState::Menu,
            round: Round::empty(initial_health),
            initial_health,
            rng,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn word(&self) -> &'static str {
        self.round.word
    }

    pub fn revealed(&self) -> &[bool] {
        &self.round.revealed
    }

    pub fn misses(&self) -> &[char] {
        &self.round.misses
    }

    pub fn health(&self) -> u8 {
        self.round.health
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.round.difficulty
    }

    pub fn all_revealed(&self) -> bool {
        !self.round.revealed.is_empty() && self.round.revealed.iter().all(|&r| r)
    }

    /// Letters of the word, `None` where still hidden.
    pub fn letters(&self) -> impl Iterator<Item = Option<char>> + '_ {
        self.round
            .word
            .chars()
            .zip(self.round.revealed.iter())
            .map(|(ch, &shown)| shown.then_some(ch))
    }

    /// Advance the model by one frame of input.
    ///
    /// KEY0 restarts from any state and takes priority over everything else
    /// latched in the same frame.
    pub fn update(&mut self, input: FrameInput) -> Events {
        let mut events = Events::new();

        if input.buttons & KEY0 != 0 {
            self.restart();
            events.push(Event::Restarted).ok();
            return events;
        }

        match self.state {
            GameState::Menu => {
                if input.buttons > 1 {
                    if let Some(difficulty) = Difficulty::from_buttons(input.buttons) {
                        let word = difficulty.pick(&mut self.rng);
                        self.enter_round(difficulty, word, &mut events);
                    }
                }
            }
            GameState::Playing => {
                if let Some(key) = input.key {
                    self.guess(key, &mut events);
                }
            }
            GameState::Lost | GameState::Won => {}
        }

        events
    }

    /// Back to the menu with fresh round state.
    pub fn restart(&mut self) {
        info!("restart from {:?}", self.state);
        self.state = GameState::Menu;
        self.round = Round::empty(self.initial_health);
    }

    /// Start playing `word`, reporting `Started` only if the round began.
    fn enter_round(&mut self, difficulty: Difficulty, word: &'static str, events: &mut Events) {
        match self.begin(difficulty, word) {
            Ok(()) => {
                events.push(Event::Started(difficulty)).ok();
            }
            Err(e) => warn!("cannot start round with {:?}: {}", word, e),
        }
    }

    /// Start playing `word`.
    pub fn begin(&mut self, difficulty: Difficulty, word: &'static str) -> Result<(), &'static str> {
        if word.is_empty() || word.len() > MAX_WORD_LEN {
            return Err("word length out of range");
        }
        if !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err("word must be lowercase ascii");
        }

        let mut round = Round::empty(self.initial_health);
        round.word = word;
        round.difficulty = Some(difficulty);
        for _ in 0..word.len() {
            round.revealed.push(false).map_err(|_| "word too long")?;
        }

        self.round = round;
        self.state = GameState::Playing;
        info!("round started: {} ({} letters)", difficulty.name(), word.len());
        Ok(())
    }

    fn guess(&mut self, key: char, events: &mut Events) {
        if !key.is_ascii_alphabetic() {
            return;
        }
        let letter = key.to_ascii_lowercase();
        let round = &mut self.round;

        // Match over the whole word, not a fixed prefix.
        let mut in_word = false;
        let mut count = 0;
        for (ch, shown) in round.word.chars().zip(round.revealed.iter_mut()) {
            if ch == letter {
                in_word = true;
                if !*shown {
                    *shown = true;
                    count += 1;
                }
            }
        }

        if in_word {
            if count == 0 {
                trace!("'{}' already revealed", letter);
                return;
            }
            debug!("'{}' revealed at {} position(s)", letter, count);
            events.push(Event::Revealed { letter, count }).ok();
            if self.all_revealed() {
                info!("won with health {}", self.round.health);
                self.state = GameState::Won;
                events.push(Event::Won).ok();
            }
            return;
        }

        round.health = round.health.saturating_sub(1);
        if round.misses.push(letter).is_err() {
            warn!("miss log full, '{}' not recorded", letter);
        }
        let health = round.health;
        debug!("'{}' missed, health {}", letter, health);
        events.push(Event::Missed { letter, health }).ok();

        if health == 0 {
            info!("lost, word was {:?}", round.word);
            self.state = GameState::Lost;
            events.push(Event::Lost).ok();
        }
    }
}
