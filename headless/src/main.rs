//! Headless Pong driver
//!
//! Runs a match without a window: scripted keys, a logging event sink, and
//! the final snapshot printed as JSON.
//!
//! Usage: pong_headless [--config PATH] [--seed N] [--ticks N] [--realtime]

mod driver;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use driver::{run, scripted_keys, Clock, ClockMode, LogSink};
use error::HeadlessError;
use game_core::{Config, Game, GameRng, Params};

const DEFAULT_TICKS: u64 = Params::FRAME_CAP as u64 * 600;

#[derive(Debug, Clone, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    seed: Option<u64>,
    ticks: u64,
    realtime: bool,
}

fn parse_args<I>(args: I) -> Result<Args, HeadlessError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args {
        config: None,
        seed: None,
        ticks: DEFAULT_TICKS,
        realtime: false,
    };

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| HeadlessError::Args("--config needs a path".into()))?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--seed" => parsed.seed = Some(parse_number(&arg, args.next())?),
            "--ticks" => parsed.ticks = parse_number(&arg, args.next())?,
            "--realtime" => parsed.realtime = true,
            other => return Err(HeadlessError::Args(format!("unknown argument {other}"))),
        }
    }

    Ok(parsed)
}

fn parse_number(flag: &str, value: Option<String>) -> Result<u64, HeadlessError> {
    let value = value.ok_or_else(|| HeadlessError::Args(format!("{flag} needs a value")))?;
    value
        .parse()
        .map_err(|_| HeadlessError::Args(format!("{flag} expects a number, got {value}")))
}

fn load_config(path: Option<&Path>) -> Result<Config, HeadlessError> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| HeadlessError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            serde_json::from_str(&text).map_err(|source| HeadlessError::Json {
                path: path.to_path_buf(),
                source,
            })?
        }
        None => Config::default(),
    };
    config.validate()?;
    Ok(config)
}

fn run_headless() -> Result<(), HeadlessError> {
    let args = parse_args(std::env::args().skip(1))?;
    let config = load_config(args.config.as_deref())?;

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let mut game = Game::new(config, rng)?;

    let mode = if args.realtime {
        ClockMode::Realtime
    } else {
        ClockMode::Fixed
    };
    let mut clock = Clock::new(mode, Params::FRAME_CAP);
    let mut sink = LogSink::default();

    let summary = run(&mut game, &mut clock, scripted_keys, args.ticks, &mut sink);
    log::info!(
        "stopped after {} ticks ({:?}), {} events",
        summary.ticks,
        summary.stop,
        sink.received
    );

    if let Some(snapshot) = game.snapshot() {
        let json = serde_json::to_string_pretty(&snapshot).map_err(HeadlessError::Output)?;
        println!("{json}");
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run_headless() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("pong_headless: {e}");
            ExitCode::FAILURE
        }
    }
}
