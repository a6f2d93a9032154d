//! # User Interface Module
//!
//! Everything drawn on screen, kept separate from the game rules.
//!
//! ## Modules
//!
//! - `theme`: which palette color each part of the scene uses
//! - `snowman`: snowman geometry and the pose for each health value
//! - `melt`: melt animation sequences between poses
//! - `scene`: full-screen layouts per game state
//!
//! All drawing goes through a borrowed `FrameBuffer`; the frame loop decides
//! when to clear and present.

pub mod melt;
pub mod scene;
pub mod snowman;
pub mod theme;

pub use melt::{Melt, MeltFrames};
pub use snowman::{Figure, Stage};
pub use theme::Theme;
