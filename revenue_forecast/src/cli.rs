//! Command line front end

use crate::calendar::MonthIndex;
use crate::config::ForecastConfig;
use crate::data::SalesLedger;
use crate::logging::*;
use crate::report::ForecastReport;
use crate::source::{RandomRevenueSource, RevenueSource};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "revenue_forecast")]
#[clap(about = "Moving-average revenue forecast for the dealership")]
#[clap(version)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the forecast table and calculation trace
    Compute(ComputeArgs),
}

#[derive(Parser, Debug)]
pub struct ComputeArgs {
    #[clap(
        short,
        long,
        value_parser = clap::value_parser!(u16).range(1..=12),
        help = "Moving average window in months (defaults to FORECAST_WINDOW or 3)"
    )]
    pub window: Option<u16>,

    #[clap(
        short = 'm',
        long,
        value_parser = clap::value_parser!(u32).range(1..=12),
        help = "First month without actual revenue (defaults to today's month in the target year)"
    )]
    pub current_month: Option<u32>,

    #[clap(long, help = "Sales CSV with date and price columns; random revenue if omitted")]
    pub sales: Option<PathBuf>,

    #[clap(long, help = "Seed for random revenue")]
    pub seed: Option<u64>,

    #[clap(long, help = "Print the report as JSON")]
    pub json: bool,
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Compute(args) => run_compute(args),
    }
}

fn run_compute(args: ComputeArgs) -> Result<()> {
    let config = ForecastConfig::from_env();
    config.validate()?;

    let window = args.window.map(usize::from).unwrap_or(config.window);
    let current = match args.current_month {
        Some(month) => MonthIndex::new(month)?,
        None => config.current_month(chrono::Local::now().date_naive())?,
    };

    let log = DEFAULT.new(o!(
        "function" => "cli::run_compute",
        "window" => window,
        "current_month" => current.number(),
    ));

    let mut source: Box<dyn RevenueSource> = match &args.sales {
        Some(path) => Box::new(
            SalesLedger::from_csv(path, config.target_year)
                .with_context(|| format!("failed to load sales from {}", path.display()))?,
        ),
        None => {
            debug!(log, "using synthetic revenue"; "seed" => format!("{:?}", args.seed));
            Box::new(match args.seed {
                Some(seed) => {
                    RandomRevenueSource::with_seed(config.revenue_min, config.revenue_max, seed)?
                }
                None => RandomRevenueSource::new(config.revenue_min, config.revenue_max)?,
            })
        }
    };

    let report = ForecastReport::from_source(source.as_mut(), current, window)?;

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("Выручка {} (факт + прогноз)", config.target_year);
        println!();
        print!("{}", report);
    }

    Ok(())
}
