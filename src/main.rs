//! Terminal runner (default binary).
//!
//! Drives a game from the keyboard and prints a one-line status. The 3D
//! field itself is not drawn; this is a harness for the engine and the loop
//! driver.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::{cursor, terminal, QueueableCommand};
use log::{info, LevelFilter};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::filter::threshold::ThresholdFilter;

use cubetris::core::GameState;
use cubetris::engine::{Config, LoopDriver};
use cubetris::input::{handle_key_event, should_quit};
use cubetris::types::TICK_MS;

fn main() -> Result<()> {
    let config = Config::from_env()?;
    if let Some(path) = &config.log_path {
        init_log(config.log_level, path)?;
    }

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.queue(cursor::Hide)?;
    stdout.flush()?;

    let result = run(&config, &mut stdout);

    // Always try to restore terminal state.
    let _ = stdout.queue(cursor::Show).and_then(|s| s.flush());
    let _ = terminal::disable_raw_mode();
    println!();
    result
}

/// File-only logger; the terminal belongs to the game
fn init_log(level: LevelFilter, path: &std::path::Path) -> Result<()> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}",
        )))
        .build(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let config = LogConfig::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn run(config: &Config, out: &mut impl Write) -> Result<()> {
    let mut game = config.build_game();
    let mut driver: LoopDriver = config.build_driver();
    info!(
        "Session seed={:?} pool={:?} gravity={:?}",
        game.seed(),
        game.pool(),
        driver.gravity()
    );

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        draw_status(&game, out)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            let report = driver.advance(&mut game, ms);
            if report.game_over() {
                info!("Final score {} at level {}", game.score(), game.level());
            }
        }
    }
}

fn draw_status(game: &GameState, out: &mut impl Write) -> Result<()> {
    let next: Vec<&str> = game.next_pieces().iter().map(|p| p.kind.as_str()).collect();
    let held = game.held().map(|p| p.kind.as_str()).unwrap_or("-");
    let piece = match game.active() {
        Some(p) => format!("{} at {}", p.kind.as_str(), p.origin),
        None => "-".to_string(),
    };

    out.queue(cursor::MoveToColumn(0))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    write!(
        out,
        "{:<8} score {:>6}  level {:>2}  layers {:>3}  piece {}  next [{}]  hold {}",
        game.phase().as_str(),
        game.score(),
        game.level(),
        game.lines(),
        piece,
        next.join(" "),
        held,
    )?;
    out.flush()?;
    Ok(())
}
