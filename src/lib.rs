//! Mebel Report Library
//!
//! Overdue furniture delivery reporting: flat-file ingestion, order
//! lifecycle, aggregation by furniture type, and Excel export.

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod infrastructure;
pub mod output;
