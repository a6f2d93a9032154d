//! # Game Model
//!
//! Pure game logic with no hardware access. The frame loop feeds a
//! [`FrameInput`] per frame and reacts to the returned [`Event`]s.
//!
//! ```text
//!            KEY1/2/3             all letters
//!   ┌──────┐ ───────► ┌─────────┐ ─────────► ┌─────┐
//!   │ Menu │          │ Playing │            │ Won │
//!   └──────┘ ◄─┐      └─────────┘ ─────────► └─────┘
//!              │          health == 0   ┌──────┐
//!              └── KEY0 (any state) ─── │ Lost │
//!                                       └──────┘
//! ```

pub mod debounce;
pub mod state;
pub mod words;

pub use debounce::Debounce;
pub use state::{Event, Events, FrameInput, Game, GameState};
pub use words::{Difficulty, MAX_WORD_LEN};
