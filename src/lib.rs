//! `jetsetter` registers Python interpreters with JetBrains IDEs.
//!
//! The binary in `main.rs` is a thin clap front end; everything it does is
//! reachable from here so it can be tested without a terminal.

pub mod cli;
pub mod commands;
pub mod errors;
pub mod libs;
pub mod logger;
pub mod schemas;
