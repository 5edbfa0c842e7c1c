//! Foundation types for the SoulPHYA terminal.
//!
//! This crate holds the pieces shared between the interpreter and its hosts:
//! error types, TOML configuration, the output sink contract, the clock
//! abstraction, and platform-agnostic key input.

pub mod clock;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
