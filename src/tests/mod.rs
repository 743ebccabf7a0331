#![warn(clippy::all, clippy::pedantic)]

pub mod config_loader_tests;
pub mod game_tests;
pub mod test_utils;
