//! Mebel Report - overdue furniture delivery reporting
//!
//! A CLI tool that reads the office's furniture, store, and order files and
//! writes an overdue delivery report workbook.

use clap::Parser;
use mebel_report::cli::Cli;
use mebel_report::commands;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
