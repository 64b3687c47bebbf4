use std::io;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use torus_snake::config::FRAME_POLL_INTERVAL_MS;
use torus_snake::game::GameState;
use torus_snake::input::{GameInput, InputHandler};
use torus_snake::renderer;
use torus_snake::settings::{Settings, load_settings, save_settings};
use torus_snake::terminal::TerminalSession;

#[derive(Debug, Parser)]
#[command(version, about = "Wraparound terminal Snake")]
struct Cli {
    /// Board width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Board height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Milliseconds between movement ticks.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Fixed RNG seed for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// Persist the effective settings as the new defaults.
    #[arg(long = "save-settings")]
    save_settings: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("Warning: {error}; falling back to defaults");
            Settings::default()
        }
    };
    let settings = apply_cli_overrides(settings, &cli);

    if cli.save_settings {
        if let Err(error) = save_settings(&settings) {
            eprintln!("Warning: failed to save settings: {error}");
        }
    }

    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(settings.grid(), seed),
        None => GameState::new(settings.grid()),
    };

    let mut session = TerminalSession::enter()?;
    run(&mut session, state, Duration::from_millis(settings.tick_interval_ms))
}

fn apply_cli_overrides(mut settings: Settings, cli: &Cli) -> Settings {
    if let Some(width) = cli.width {
        settings.grid_width = width;
    }
    if let Some(height) = cli.height {
        settings.grid_height = height;
    }
    if let Some(tick_ms) = cli.tick_ms {
        settings.tick_interval_ms = tick_ms;
    }
    settings.sanitized()
}

fn run(
    session: &mut TerminalSession,
    mut state: GameState,
    tick_interval: Duration,
) -> io::Result<()> {
    let mut input = InputHandler::new();
    let mut last_tick = Instant::now();

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state))?;

        // Drain everything queued since the previous frame.
        while let Some(game_input) = input.poll_input()? {
            if game_input == GameInput::Quit {
                return Ok(());
            }
            state.apply_input(game_input);
        }

        if last_tick.elapsed() >= tick_interval {
            state.tick();
            last_tick = Instant::now();
        }

        thread::sleep(Duration::from_millis(FRAME_POLL_INTERVAL_MS));
    }
}
