//! CLI definition using clap

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for the console summary
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "mebel-report")]
#[command(version)]
#[command(about = "Overdue furniture delivery reporting")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the overdue delivery report
    Report {
        /// Path to the furniture catalog file. Uses config value if not specified.
        #[arg(long)]
        furniture: Option<PathBuf>,

        /// Path to the store list file. Uses config value if not specified.
        #[arg(long)]
        stores: Option<PathBuf>,

        /// Path to the order list file. Uses config value if not specified.
        #[arg(long)]
        orders: Option<PathBuf>,

        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Reference date for the overdue check (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default furniture catalog path
        #[arg(long)]
        set_furniture: Option<PathBuf>,

        /// Set default store list path
        #[arg(long)]
        set_stores: Option<PathBuf>,

        /// Set default order list path
        #[arg(long)]
        set_orders: Option<PathBuf>,

        /// Set default report output path
        #[arg(long)]
        set_output: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
