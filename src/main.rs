// Terminal 2048.
// Controls: W/A/S/D, arrow keys or a mouse drag to slide.
// R restarts, C keeps playing after a win, Q quits.

use clap::Parser;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

use twenty48::config::{CliOverrides, ResolvedConfig, load_config, resolve};
use twenty48::console_interface::ConsoleInput::{self, *};
use twenty48::console_interface::{
    DragTracker, cleanup_terminal, handle_input, render_game, setup_terminal,
};
use twenty48::models::GameRenderState;
use twenty48::session::{GameSession, TurnReport};

#[derive(Parser)]
#[command(name = "twenty48", about = "The 2048 sliding tile puzzle in your terminal")]
struct Args {
    /// Seed for tile spawns; the same seed replays the same spawns
    #[arg(long)]
    seed: Option<u64>,

    /// Config file (default: ~/.twenty48/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// off, error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,

    /// Stop at 2048 instead of offering to keep playing
    #[arg(long)]
    no_continue: bool,

    /// Print a JSON summary of the final game on exit
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let file_config = load_config(args.config.as_deref())?;
    let config = resolve(
        &file_config,
        &CliOverrides {
            seed: args.seed,
            no_continue: args.no_continue,
            log_level: args.log_level.clone(),
        },
    );

    if let Err(e) = init_logging(&config) {
        eprintln!("Could not start logging to {}: {}", config.log_file.display(), e);
    }
    info!("twenty48 starting with {:?}", config);

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = GameSession::new(rng, config.allow_continue);

    let mut terminal = setup_terminal()?;
    let result = run_interactive(&mut session, &config, &mut terminal);
    cleanup_terminal()?;
    result?;

    let summary = session.summary();
    info!("Exiting with score {} after {} moves", summary.score, summary.moves);
    if args.summary {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}

fn init_logging(config: &ResolvedConfig) -> Result<(), Box<dyn std::error::Error>> {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let log_file = File::create(&config.log_file)?;
    WriteLogger::init(config.log_level, log_config, log_file)?;
    Ok(())
}

enum LoopStep {
    Idle,
    Redraw(TurnReport),
    Quit,
}

fn next_step(
    session: &mut GameSession<StdRng>,
    input: Result<ConsoleInput, Box<dyn std::error::Error>>,
) -> Result<LoopStep, Box<dyn std::error::Error>> {
    match input {
        Ok(Quit) => Ok(LoopStep::Quit),
        Ok(UserAction(user_action)) => match session.handle_action(user_action) {
            TurnReport::NoChange | TurnReport::Ignored => Ok(LoopStep::Idle),
            report => Ok(LoopStep::Redraw(report)),
        },
        Ok(Timeout) | Ok(Unknown) => Ok(LoopStep::Idle),
        Err(e) => {
            warn!("error reading input: {}", e);
            Err(e)
        }
    }
}

fn run_interactive(
    session: &mut GameSession<StdRng>,
    config: &ResolvedConfig,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut drag = DragTracker::default();
    render_game(terminal, &render_state(session, None))?;

    loop {
        match next_step(session, handle_input(&mut drag, config.swipe_threshold))? {
            LoopStep::Quit => break,
            LoopStep::Redraw(report) => {
                render_game(terminal, &render_state(session, Some(report)))?;
            }
            LoopStep::Idle => {}
        }
    }

    Ok(())
}

fn render_state(
    session: &GameSession<StdRng>,
    last_turn: Option<TurnReport>,
) -> GameRenderState {
    GameRenderState {
        grid: *session.grid(),
        score: session.score(),
        status: session.status(),
        can_continue: session.allows_continue(),
        last_turn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twenty48::core::{Direction, Grid, UserAction as Action};

    fn session() -> GameSession<StdRng> {
        let grid: Grid = "2 2 . .\n. . . .\n. . . .\n. . . .".parse().unwrap();
        GameSession::with_grid(grid, StdRng::seed_from_u64(3), true)
    }

    #[test]
    fn input_errors_end_the_loop_with_an_error() {
        let mut game = session();
        let result = next_step(&mut game, Err("terminal went away".into()));
        assert_eq!(result.err().map(|e| e.to_string()), Some("terminal went away".to_string()));
    }

    #[test]
    fn moves_redraw_and_no_ops_stay_idle() {
        let mut game = session();
        assert!(matches!(
            next_step(&mut game, Ok(UserAction(Action::Move(Direction::Up)))),
            Ok(LoopStep::Idle)
        ));
        assert!(matches!(
            next_step(&mut game, Ok(UserAction(Action::Move(Direction::Left)))),
            Ok(LoopStep::Redraw(TurnReport::Moved { score_delta: 4, .. }))
        ));
        assert!(matches!(next_step(&mut game, Ok(Quit)), Ok(LoopStep::Quit)));
    }

    #[test]
    fn logger_init_failure_is_reported() {
        let config = ResolvedConfig {
            seed: None,
            allow_continue: true,
            swipe_threshold: 30.0,
            log_file: std::env::temp_dir().join("twenty48-main-test.log"),
            log_level: log::LevelFilter::Info,
        };
        // A global logger can only be installed once per process.
        let twice = init_logging(&config).and_then(|_| init_logging(&config));
        assert!(twice.is_err());

        let missing_dir = ResolvedConfig {
            log_file: PathBuf::from("/nonexistent-dir/twenty48.log"),
            ..config
        };
        assert!(init_logging(&missing_dir).is_err());
    }
}
