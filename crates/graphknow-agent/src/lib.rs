//! Graphknow Agent — drives a remote assistant run to completion
//!
//! The driver owns the poll/act/resume cycle: create a thread, post the
//! question, start a run, poll until the service needs tool results, dispatch
//! them through the registry, submit, and repeat until a terminal status.

pub mod driver;
pub mod transcript;

pub use driver::{DriverConfig, DriverError, RunDriver};
pub use transcript::{print_transcript, render_transcript};
