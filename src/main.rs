#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::os::fd::AsRawFd;
use std::thread;

use anyhow::Context;
use blockdrop::app::{App, AppResult};
use blockdrop::config::{self, Config};
use blockdrop::input::{Command, command_for_key};
use blockdrop::terminal::TerminalGuard;
use blockdrop::ui;
use crossbeam_channel::{Receiver, Sender, never, select, tick, unbounded};
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, error, info};
use ratatui::{Terminal, prelude::*};

fn main() -> AppResult<()> {
    // Create log file and redirect stderr to it
    let log_path = "blockdrop.log";
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .with_context(|| format!("failed to create log file {log_path}"))?;

    // Safety: both descriptors are open for the duration of the call, and
    // stderr is only written through the logger from here on
    unsafe {
        libc::dup2(log_file.as_raw_fd(), io::stderr().as_raw_fd());
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    info!("Starting blockdrop");

    let config = match config::loader::load_config_from_file() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {e}");
            Config::default()
        }
    };

    // Terminal initialization; the guard restores it on every exit path
    let mut guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, App::new(config));

    guard.restore()?;

    if let Err(err) = res {
        error!("Game error: {err:?}");
        return Err(err);
    }

    Ok(())
}

// Gravity and input arrive on separate channels and are handled one at a
// time on this thread, so the session is never touched concurrently.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> AppResult<()> {
    let (input_tx, input_rx) = unbounded();
    thread::spawn(move || {
        if let Err(e) = forward_input(&input_tx) {
            error!("Input thread stopped: {e:?}");
        }
    });

    let ticker = tick(app.config.gravity_interval());
    debug!("Gravity every {:?}", app.config.gravity_interval());

    loop {
        terminal.draw(|f| ui::render(f, &app))?;

        if app.should_quit {
            return Ok(());
        }

        // No more gravity once the game is over
        let gravity: Receiver<_> = if app.is_game_over() {
            never()
        } else {
            ticker.clone()
        };

        select! {
            recv(gravity) -> _ => app.on_tick(),
            recv(input_rx) -> command => match command {
                Ok(command) => app.handle_command(command),
                Err(_) => return Ok(()),
            },
        }
    }
}

fn forward_input(tx: &Sender<Command>) -> AppResult<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            debug!("Key event: {key:?}");

            if let Some(command) = command_for_key(key.code) {
                if tx.send(command).is_err() {
                    return Ok(());
                }
            }
        }
    }
}
