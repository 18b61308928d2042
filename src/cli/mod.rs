//! Command Line Interface (CLI) layer for okaprep.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the relabel and aggregate
//! flows. It wires user-provided options to the underlying library
//! functionality exposed via `okaprep::api`.
//!
//! If you are embedding okaprep into another application, prefer using
//! the high-level `okaprep::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
