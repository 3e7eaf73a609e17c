//! Command Line Interface (CLI) layer for iconforge.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for generating the icon set.
//! It wires user-provided options to the underlying library functionality
//! exposed via `iconforge::api`.
//!
//! If you are embedding iconforge into another application, prefer using
//! the high-level `iconforge::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
