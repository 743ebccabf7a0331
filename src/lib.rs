//! A falling-block puzzle game.
//!
//! The core ([`shapes`], [`components`], [`board`], [`session`]) is pure game
//! logic with no terminal or timing code. The front end ([`input`], [`app`],
//! [`ui`], [`terminal`]) drives a [`session::GameSession`] and renders it with
//! ratatui.

pub mod app;
pub mod board;
pub mod components;
pub mod config;
pub mod game;
pub mod input;
pub mod session;
pub mod shapes;
pub mod terminal;
pub mod ui;

#[cfg(test)]
mod tests;
