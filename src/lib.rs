//! Melting Snowman for the DE1-SoC.
//!
//! Everything except the board entry point lives here so the game logic,
//! rasterizer and drivers can be unit tested on the host against
//! `hal::fake::FakeBoard`.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod config;
pub mod devices;
pub mod game;
pub mod hal;
pub mod kernel;
pub mod ui;
