//! Command handlers

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::path::PathBuf;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::domain::service::overdue::{aggregate_overdue, sorted_rows};
use crate::error::Result;
use crate::export::write_overdue_report;
use crate::infrastructure::loader::{load_furniture, load_orders, load_stores};
use crate::output::print_summary;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Report {
            furniture,
            stores,
            orders,
            output,
            as_of,
        } => {
            let paths = ReportPaths {
                furniture: furniture.unwrap_or_else(|| config.furniture_file.clone()),
                stores: stores.unwrap_or_else(|| config.store_file.clone()),
                orders: orders.unwrap_or_else(|| config.order_file.clone()),
                output: output.unwrap_or_else(|| config.output_file.clone()),
            };
            cmd_report(paths, as_of, output_format, cli.verbose)
        }

        Commands::Config {
            show,
            set_furniture,
            set_stores,
            set_orders,
            set_output,
            set_format,
            reset,
        } => cmd_config(
            config,
            show,
            set_furniture,
            set_stores,
            set_orders,
            set_output,
            set_format,
            reset,
        ),
    }
}

/// Resolved input and output paths for one report run
struct ReportPaths {
    furniture: PathBuf,
    stores: PathBuf,
    orders: PathBuf,
    output: PathBuf,
}

fn cmd_report(
    paths: ReportPaths,
    as_of: Option<NaiveDate>,
    output_format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    // The catalog must load before orders so item references resolve.
    if verbose {
        eprintln!("Loading furniture catalog: {}", paths.furniture.display());
    }
    let catalog = load_furniture(&paths.furniture)?;

    if verbose {
        eprintln!("Loading stores: {}", paths.stores.display());
    }
    let store_list = load_stores(&paths.stores)?;

    if verbose {
        eprintln!("Loading orders: {}", paths.orders.display());
    }
    let order_list = load_orders(&paths.orders, &catalog)?;

    if verbose {
        eprintln!(
            "Loaded {} furniture entries, {} stores, {} orders",
            catalog.len(),
            store_list.len(),
            order_list.len()
        );
    }

    let reference = reference_time(as_of);
    let totals = aggregate_overdue(&order_list, reference)?;
    let rows = sorted_rows(&totals);

    let report_path = write_overdue_report(&rows, &paths.output)?;
    print_summary(output_format, &rows, &report_path)?;

    Ok(())
}

fn reference_time(as_of: Option<NaiveDate>) -> NaiveDateTime {
    match as_of {
        Some(date) => date.and_time(NaiveTime::MIN),
        None => Local::now().naive_local(),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    mut config: Config,
    show: bool,
    set_furniture: Option<PathBuf>,
    set_stores: Option<PathBuf>,
    set_orders: Option<PathBuf>,
    set_output: Option<PathBuf>,
    set_format: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut changed = false;
    if let Some(path) = set_furniture {
        config.furniture_file = path;
        changed = true;
    }
    if let Some(path) = set_stores {
        config.store_file = path;
        changed = true;
    }
    if let Some(path) = set_orders {
        config.order_file = path;
        changed = true;
    }
    if let Some(path) = set_output {
        config.output_file = path;
        changed = true;
    }
    if let Some(format) = set_format {
        config.output_format = format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}
