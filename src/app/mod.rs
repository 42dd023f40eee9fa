//! Application core: session state, lifecycle, and the read → dispatch →
//! print loop.
//!
//! The [`App`] struct owns the runtime and the dispatcher and is the single
//! entry point for the rest of the binary. Focused submodules:
//!
//! | Module    | Responsibility                              |
//! |-----------|---------------------------------------------|
//! | `agents`  | `Agent`, `AgentRegistry`, built-in prompts  |
//! | `chat`    | `Dispatcher`, one completion per agent      |
//! | `input`   | Sentinel / blank / text classification      |
//! | `logging` | `LogLevel`, `Logger`, `mask_key`            |
//! | `ui`      | Console text for banner, replies, errors    |

pub mod agents;
pub mod chat;
pub mod input;
pub mod logging;
pub mod ui;

#[cfg(test)]
mod testing;

use std::fmt;
use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use tokio::runtime::Runtime;

use crate::config::Settings;
use crate::constants::END_OF_INPUT;
use crate::openai::{CompletionClient, OpenAiClient};

use self::agents::AgentRegistry;
use self::chat::Dispatcher;
use self::input::{Input, classify, strip_line_ending};
use self::logging::{LogLevel, Logger, log_src};

// ── Session state ────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Running,
    /// Absorbing; the loop exits once entered.
    Terminated,
}

/// Why the session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user typed a sentinel.
    Quit,
    /// Input closed (Ctrl-D or end of a piped file); reported as an error.
    EndOfInput,
    /// Reading input or a completion call failed; the session does not resume.
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub outcome: SessionOutcome,
    /// Turns whose four replies were all printed.
    pub turns: usize,
}

/// Top-level application state.
pub struct App<C> {
    runtime: Runtime,
    dispatcher: Dispatcher<C>,
    logger: Logger,
    state: SessionState,
    turns: usize,
}

// ── Lifecycle ────────────────────────────────────────────────────────

impl App<OpenAiClient> {
    /// Build the provider client from `settings` and wire up the built-in agents.
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = OpenAiClient::new(settings).context("create completion client")?;
        Self::with_client(client, AgentRegistry::builtin(), Logger::new(settings.log_level))
    }
}

impl<C: CompletionClient> App<C> {
    pub fn with_client(client: C, registry: AgentRegistry, logger: Logger) -> Result<Self> {
        if registry.is_empty() {
            bail!("no agents registered");
        }
        let runtime = Runtime::new().context("create tokio runtime")?;
        logger.log(
            LogLevel::Info,
            format!("{} agent(s) ready.", registry.len()),
        );
        Ok(App {
            runtime,
            dispatcher: Dispatcher::new(client, registry, logger.clone()),
            logger,
            state: SessionState::Running,
            turns: 0,
        })
    }

    /// Whether the session has terminated.
    pub fn should_quit(&self) -> bool {
        self.state == SessionState::Terminated
    }
}

// ── Session loop ─────────────────────────────────────────────────────

impl<C: CompletionClient> App<C> {
    /// Print the banner, then prompt → read → dispatch → print until the
    /// session terminates.
    ///
    /// Only write errors on `out` are returned. A failed read, end of input,
    /// or a failed completion call is reported on `out` and ends the session.
    pub fn run<R, W>(&mut self, mut input: R, mut out: W) -> Result<SessionSummary>
    where
        R: BufRead,
        W: Write,
    {
        ui::write_banner(&mut out).context("write banner")?;

        let mut outcome = SessionOutcome::EndOfInput;
        let mut raw = String::new();
        while !self.should_quit() {
            ui::write_prompt(&mut out).context("write prompt")?;

            raw.clear();
            match input.read_line(&mut raw) {
                Ok(0) => {
                    self.report(&mut out, &END_OF_INPUT)?;
                    self.terminate(SessionOutcome::EndOfInput, &mut outcome);
                    continue;
                }
                Ok(_) => {}
                Err(err) => {
                    self.report(&mut out, &err)?;
                    self.terminate(SessionOutcome::Failed, &mut outcome);
                    continue;
                }
            }

            match classify(strip_line_ending(&raw)) {
                Input::Quit => {
                    ui::write_farewell(&mut out)?;
                    self.terminate(SessionOutcome::Quit, &mut outcome);
                }
                Input::Blank => continue,
                Input::Text(text) => {
                    if !self.handle_turn(text, &mut out)? {
                        self.terminate(SessionOutcome::Failed, &mut outcome);
                    }
                }
            }
        }

        Ok(SessionSummary {
            outcome,
            turns: self.turns,
        })
    }

    /// Dispatch one turn and print its result. Returns `false` when the turn
    /// failed and the session must end.
    fn handle_turn(&mut self, text: &str, out: &mut impl Write) -> Result<bool> {
        ui::write_processing(out)?;

        match self.runtime.block_on(self.dispatcher.dispatch(text)) {
            Ok(replies) => {
                for reply in &replies {
                    self.logger.log(
                        LogLevel::Debug,
                        format!("{} replied ({} chars)", reply.agent, reply.text.len()),
                    );
                }
                ui::write_replies(out, &replies)?;
                self.turns += 1;
                Ok(true)
            }
            Err(err) => {
                log_src!(
                    self.logger,
                    LogLevel::Error,
                    format!("{} failed: {}", err.agent, err.source)
                );
                ui::write_error(out, &err)?;
                Ok(false)
            }
        }
    }

    /// Report an input failure the same way as a failed turn.
    fn report(&self, out: &mut impl Write, err: &dyn fmt::Display) -> Result<()> {
        log_src!(self.logger, LogLevel::Error, format!("input failed: {err}"));
        ui::write_error(out, err)?;
        Ok(())
    }

    fn terminate(&mut self, reason: SessionOutcome, outcome: &mut SessionOutcome) {
        self.logger
            .log(LogLevel::Debug, format!("Session ended: {reason:?}"));
        *outcome = reason;
        self.state = SessionState::Terminated;
    }
}
