//! Error and control-flow types shared by the shell and its commands.

use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::core::ViewError;
use crate::errors::LedgerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failure of a single command. Reported to the user; the shell keeps going.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    View(#[from] ViewError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl CommandError {
    pub(crate) fn usage(usage: &str) -> Self {
        CommandError::InvalidArguments(format!("usage: {}", usage))
    }
}

/// Fatal shell failure; ends the process.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
}
