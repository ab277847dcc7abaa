//! CLI module
//!
//! Command-line interface for running the adapter.
//!
//! # Commands
//!
//! - `serve` - Start HTTP server mode exposing `GetPage`
//! - `get-page` - Run a single `GetPage` request and print the result

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands};
pub use runner::Runner;
pub use server::{router, serve, ApiResponse, ErrorBody};
