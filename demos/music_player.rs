//! Music Player
//!
//! Drives a player through a sequence of actions and prints one line per
//! action. Without arguments the sequence is play, play, pause, stop.
//!
//! Run with: cargo run --example music_player
//!       or: cargo run --example music_player -- play pause play stop
//!
//! Set `RUST_LOG=trace` to see dispatch events on stderr.

use playstate::report::Console;
use playstate::{Action, ParseError, Player};
use std::process::ExitCode;

fn main() -> ExitCode {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, Registry};

    let env_filter = tracing_subscriber::EnvFilter::from_default_env();

    let subscriber = Registry::default().with(env_filter).with(
        fmt::Layer::default()
            .with_writer(std::io::stderr)
            .with_ansi(false),
    );

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install log subscriber: {e}");
    }

    let actions = match parse_actions(std::env::args().skip(1)) {
        Ok(actions) => actions,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut player = Player::with_reporter(Console::stdout());
    player.run(actions);

    tracing::info!(state = %player.state(), changes = player.history().len(), "Done");
    ExitCode::SUCCESS
}

fn parse_actions<I>(args: I) -> Result<Vec<Action>, ParseError>
where
    I: Iterator<Item = String>,
{
    let actions = args
        .map(|arg| arg.parse::<Action>())
        .collect::<Result<Vec<_>, _>>()?;

    if actions.is_empty() {
        return Ok(vec![Action::Play, Action::Play, Action::Pause, Action::Stop]);
    }

    Ok(actions)
}
