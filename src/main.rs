//! Quartet: an interactive console that sends every question through four
//! agents (tweet-style answerer, sentiment analyzer, English tutor, banking
//! assistant) on an OpenAI-compatible chat-completions endpoint and prints
//! each reply under its own label.
//!
//! Configuration is read once here and handed to [`app::App`], which owns
//! the session loop.

mod app;
mod config;
mod constants;
mod error;
mod openai;
mod util;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::app::logging::{LogLevel, Logger};
use crate::app::{App, SessionSummary};
use crate::config::Settings;
use crate::error::ConfigError;

// ── Entry point ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stdin = io::stdin();
    launch(Settings::from_env, stdin.lock(), io::stdout().lock())?;
    Ok(())
}

/// Resolve configuration, then run one session. Configuration errors are
/// returned before anything is written to `out`.
fn launch<L, R, W>(load: L, input: R, out: W) -> Result<SessionSummary>
where
    L: FnOnce() -> Result<Settings, ConfigError>,
    R: BufRead,
    W: Write,
{
    let settings = load().context("load configuration")?;
    let mut app = App::new(&settings)?;
    let summary = app.run(input, out)?;

    Logger::new(settings.log_level).log(
        LogLevel::Info,
        format!(
            "Session ended ({:?}) after {} turn(s).",
            summary.outcome, summary.turns
        ),
    );

    Ok(summary)
}
