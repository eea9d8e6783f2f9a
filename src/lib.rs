//! Reconstruct how a repository's line count grew over its history.
//!
//! The log is read oldest-first through the `git` CLI, each commit is diffed
//! against the one before it, and the per-commit stats are folded into
//! running totals for charting or export.

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod growth;
pub mod history;
pub mod logging;
pub mod model;
pub mod output;
pub mod parse;
pub mod series;
pub mod tui;
