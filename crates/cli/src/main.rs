mod commands;
mod logging;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use df_protocol::SortKey;
use std::path::PathBuf;

/// dataflow-dash -- mock data pipeline runs and daily ingestion summaries.
#[derive(Parser)]
#[command(name = "dataflow-dash", version, about)]
struct Cli {
    /// Project directory containing `.dataflow-dash/`.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options that select which data is generated.
#[derive(Args, Debug, Clone, Default)]
pub struct DataOptions {
    /// Day to show, as YYYY-MM-DD. Defaults to today (UTC).
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Seed for the random generator. Overrides `seed` in config.toml.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard (default when no subcommand is given).
    Tui {
        #[command(flatten)]
        data: DataOptions,
    },

    /// Print one page of the pipeline run table.
    Runs {
        #[command(flatten)]
        data: DataOptions,
        /// Page to print, starting at 1.
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Column to sort by (name, status, start, end, duration, sla,
        /// total, processed, filtered).
        #[arg(long)]
        sort: Option<SortKey>,
        /// Sort descending instead of ascending.
        #[arg(long, requires = "sort")]
        desc: bool,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print the daily row processing summary.
    Summary {
        #[command(flatten)]
        data: DataOptions,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Write a default `.dataflow-dash/config.toml`.
    Init {
        /// Overwrite an existing configuration.
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match cli.command {
        None => commands::dashboard::run(&cli.root, &DataOptions::default()).await,
        Some(Commands::Tui { data }) => commands::dashboard::run(&cli.root, &data).await,
        Some(Commands::Runs {
            data,
            page,
            sort,
            desc,
            json,
        }) => commands::runs::run(
            &cli.root,
            &data,
            &commands::runs::RunsOptions {
                page,
                sort,
                desc,
                json,
            },
        ),
        Some(Commands::Summary { data, json }) => commands::summary::run(&cli.root, &data, json),
        Some(Commands::Init { force }) => commands::init::run(&cli.root, force),
    }
}
