//! Wraparound terminal Snake.
//!
//! The game-state core (`grid`, `snake`, `food`, `game`) is pure and
//! I/O-free; the remaining modules are the thin terminal shell around it.

pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod snake;
pub mod terminal;
