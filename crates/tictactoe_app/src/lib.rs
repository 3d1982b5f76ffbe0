//! Tic-tac-toe front ends: terminal UI and scripted runner.
//!
//! # Architecture
//!
//! - **Config**: player names and logging settings from TOML and environment
//! - **Logging**: tracing subscriber to stderr or a log file
//! - **Script**: headless play of a move list, text or JSON report
//! - **TUI**: keyboard-driven board with scores and a play-again prompt
//!
//! The binary is the composition root: it builds one
//! [`GameController`](tictactoe_core::GameController) and hands it to the
//! chosen front end.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod announce;
pub mod cli;
pub mod config;
pub mod logging;
pub mod script;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};
pub use logging::LogTarget;
pub use script::{MoveRecord, ScriptReport, render_text, run_script};
