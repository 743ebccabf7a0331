#![warn(clippy::all, clippy::pedantic)]

use crossbeam_channel::{Receiver, unbounded};
use log::info;

use crate::config::Config;
use crate::input::Command;
use crate::session::GameSession;

pub type AppResult<T> = anyhow::Result<T>;

pub struct App {
    pub session: GameSession,
    pub config: Config,
    pub should_quit: bool,
    /// Set once the current session reports its final score.
    pub final_score: Option<u32>,
    game_over_rx: Receiver<u32>,
}

impl App {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let (session, game_over_rx) = Self::start_session(&config);
        Self {
            session,
            config,
            should_quit: false,
            final_score: None,
            game_over_rx,
        }
    }

    fn start_session(config: &Config) -> (GameSession, Receiver<u32>) {
        let mut session = match config.seed {
            Some(seed) => GameSession::with_seed(seed),
            None => GameSession::new(),
        };

        let (tx, rx) = unbounded();
        session.set_game_over_listener(move |score| {
            // The receiver only goes away together with the app
            let _ = tx.send(score);
        });

        (session, rx)
    }

    /// Gravity step. Does nothing once the game is over.
    pub fn on_tick(&mut self) {
        self.session.tick();
        self.sync_game_state();
    }

    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Move(direction) => {
                self.session.move_mino(direction);
            }
            Command::Rotate => {
                self.session.rotate_mino();
            }
            Command::Restart => {
                if self.is_game_over() {
                    self.reset();
                }
            }
            Command::Quit => self.should_quit = true,
        }
        self.sync_game_state();
    }

    // Pick up the game over notification, if one was sent
    pub fn sync_game_state(&mut self) {
        if let Ok(score) = self.game_over_rx.try_recv() {
            info!("Game over, final score {score}");
            self.final_score = Some(score);
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    /// Starts a fresh session with the same configuration.
    pub fn reset(&mut self) {
        let (session, game_over_rx) = Self::start_session(&self.config);
        self.session = session;
        self.game_over_rx = game_over_rx;
        self.final_score = None;
        info!("Started a new game");
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
