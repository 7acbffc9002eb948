//! Command handlers.
//!
//! Handlers receive a fully bootstrapped [`CliContext`](crate::CliContext)
//! and never touch the environment themselves.

pub mod args;
