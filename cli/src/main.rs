#![deny(clippy::all)]
#![deny(unused_must_use)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::PathBuf,
};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::dataset::{Dataset, OutputFormat, SortDirection, SortKey};

mod dataset;
mod error;
mod person;

const DEFAULT_LOG_FILTER: &str = "introsort_cli=info,introsort=warn";

struct Config {
    input: Option<PathBuf>,
    sort_key: Option<SortKey>,
    direction: SortDirection,
    format: OutputFormat,
    log_filter: String,
}

impl Config {
    fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        Ok(Self {
            input: std::env::args_os().nth(1).map(PathBuf::from),
            sort_key: dotenv::var("SORT_KEY")
                .ok()
                .map(|key| key.parse::<SortKey>())
                .transpose()
                .context("invalid SORT_KEY")?,
            direction: dotenv::var("SORT_DIR")
                .ok()
                .map(|dir| dir.parse::<SortDirection>())
                .transpose()
                .context("invalid SORT_DIR")?
                .unwrap_or_default(),
            format: dotenv::var("OUTPUT_FORMAT")
                .ok()
                .map(|format| format.parse::<OutputFormat>())
                .transpose()
                .context("invalid OUTPUT_FORMAT")?
                .unwrap_or_default(),
            log_filter: dotenv::var("LOG_FILTER").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    fn open_input(&self) -> anyhow::Result<Box<dyn Read>> {
        Ok(match &self.input {
            Some(path) => Box::new(BufReader::new(
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
            )),
            None => Box::new(io::stdin().lock()),
        })
    }
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from(config.log_filter.as_str()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut dataset = Dataset::from_reader(config.open_input()?).context("failed to load input")?;

    let stats = dataset
        .sort(config.sort_key, config.direction)
        .context("failed to sort input")?;
    info!(
        len = dataset.len(),
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        "sorted input"
    );

    println!("{}", dataset.render(config.format)?);

    Ok(())
}
