//! Terminal Kalah. Reads one pit index per line from stdin.
//!
//! `q` quits, `r` starts a new game. Logging follows `RUST_LOG` and is
//! quiet (`warn`) by default.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use kalah::core::{OpponentKind, SessionConfig, Side};
use kalah::rules::GameResult;
use kalah::session::Session;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kalah")]
#[command(about = "Play Kalah on the terminal")]
struct Args {
    /// Play against the computer
    #[arg(long)]
    single_player: bool,

    /// Side the computer plays in single-player mode
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=1))]
    computer_side: u8,

    /// Computer opponent
    #[arg(long)]
    opponent: Option<OpponentArg>,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before each computer move, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// JSON config file; command-line flags override it
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OpponentArg {
    Random,
    Heuristic,
}

impl From<OpponentArg> for OpponentKind {
    fn from(arg: OpponentArg) -> Self {
        match arg {
            OpponentArg::Random => OpponentKind::Random,
            OpponentArg::Heuristic => OpponentKind::Heuristic,
        }
    }
}

impl Args {
    fn session_config(&self) -> Result<SessionConfig, kalah::core::ConfigError> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)?,
            None => SessionConfig::default(),
        };

        if self.single_player {
            let side = Side::from_index(usize::from(self.computer_side)).unwrap_or(Side::Player1);
            config = config.single_player(side);
        }
        if let Some(opponent) = self.opponent {
            config = config.with_opponent(opponent.into());
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(delay_ms) = self.delay_ms {
            config = config.with_opponent_delay_ms(delay_ms);
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match args.session_config() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "invalid configuration");
            return Err(err.into());
        }
    };
    let delay = Duration::from_millis(config.opponent_delay_ms);
    let mut session = Session::new(config)?;
    info!(config = ?session.config(), "starting game");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout().lock();

    loop {
        run_computer(&mut session, delay, &mut out)?;
        writeln!(out, "\n{}", session.state().board())?;

        if let Some(outcome) = session.outcome() {
            announce(&mut out, outcome)?;
            write!(out, "r to play again, q to quit: ")?;
        } else {
            write!(out, "{} to move (pit index, r, q): ", session.current_player())?;
        }
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim() {
            "q" => break,
            "r" => {
                session.reset();
                writeln!(out, "New game.")?;
            }
            "" => {}
            input => match input.parse::<usize>() {
                Ok(pit) => match session.apply_move(pit) {
                    Ok(report) => {
                        let result = report.result;
                        if let Some(capture) = result.capture {
                            writeln!(
                                out,
                                "Captured {} seeds from pit {}.",
                                capture.seeds, capture.opposite
                            )?;
                        }
                        if result.gets_another_move && report.outcome.is_none() {
                            writeln!(out, "Extra turn for {}.", result.side)?;
                        }
                    }
                    Err(err) => writeln!(out, "Illegal move: {err}")?,
                },
                Err(_) => writeln!(out, "Enter a pit index, r or q.")?,
            },
        }
    }

    Ok(())
}

/// Play the computer's turn one move at a time so each move is shown.
fn run_computer(session: &mut Session, delay: Duration, out: &mut impl Write) -> io::Result<()> {
    while session.awaiting_opponent() {
        writeln!(out, "\n{}", session.state().board())?;
        out.flush()?;
        std::thread::sleep(delay);

        let side = session.current_player();
        let Some(report) = session.play_opponent_move() else {
            error!(%side, "computer could not move");
            break;
        };
        writeln!(out, "{} plays pit {}.", side, report.result.pit)?;
    }
    Ok(())
}

fn announce(out: &mut impl Write, outcome: GameResult) -> io::Result<()> {
    match outcome {
        GameResult::Winner(side) => writeln!(out, "{side} wins!"),
        GameResult::Draw => writeln!(out, "It's a draw."),
    }
}
