//! # Shipping Rates
//!
//! Command-line entry point: builds rate estimates from a JSON file, ranks
//! them, and prints the result.

use anyhow::{Context, bail};
use clap::Parser;
use shipping_rates::application::dto::{RateEstimateRequest, RateEstimateSummary};
use shipping_rates::application::services::RankingKind;
use shipping_rates::config::{AppConfig, LogConfig, LogFormat};
use shipping_rates::domain::entities::RateEstimate;
use shipping_rates::domain::value_objects::{CurrencyCode, Rounding};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "shipping-rates", version, about = "Rank carrier shipping-rate estimates")]
struct Cli {
    /// JSON file holding an array of estimate requests ("-" for stdin)
    input: PathBuf,

    /// Configuration file path
    #[arg(short, long, env = "SHIPPING_RATES_CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Ranking strategy (cheapest, fastest); defaults to the configured one
    #[arg(short, long)]
    strategy: Option<RankingKind>,

    /// Print JSON summaries instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            AppConfig::load_from(path)
        }
        None => AppConfig::load(),
    }
    .context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    init_tracing(&config.log)?;

    info!(
        service = %config.service_name,
        environment = %config.environment,
        version = env!("CARGO_PKG_VERSION"),
        "starting"
    );

    let default_currency = config.pricing.default_currency_code()?;
    let requests = read_requests(&cli.input)?;
    let estimates = build_estimates(requests, config.pricing.rounding, default_currency.as_ref())?;

    let kind = cli.strategy.unwrap_or(config.pricing.ranking);
    let strategy = kind.strategy(default_currency);
    let ranked = strategy.rank(&estimates);
    info!(
        strategy = strategy.name(),
        estimates = estimates.len(),
        ranked = ranked.len(),
        "ranking complete"
    );

    let summaries: Vec<RateEstimateSummary> = ranked.iter().map(RateEstimateSummary::from).collect();

    if cli.json {
        let out = serde_json::to_string_pretty(&summaries).context("failed to encode summaries")?;
        println!("{out}");
    } else {
        for summary in &summaries {
            println!("{summary}");
        }
    }

    Ok(())
}

fn init_tracing(log: &LogConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&log.level)
            .with_context(|| format!("invalid log level '{}'", log.level))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(log.include_target)
        .with_writer(std::io::stderr);

    match log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }

    Ok(())
}

fn read_requests(input: &Path) -> anyhow::Result<Vec<RateEstimateRequest>> {
    let raw = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?
    };

    let requests: Vec<RateEstimateRequest> =
        serde_json::from_str(&raw).context("input is not a JSON array of estimate requests")?;
    debug!(count = requests.len(), "parsed requests");
    Ok(requests)
}

#[instrument(skip_all, fields(requests = requests.len()))]
fn build_estimates(
    requests: Vec<RateEstimateRequest>,
    rounding: Rounding,
    default_currency: Option<&CurrencyCode>,
) -> anyhow::Result<Vec<RateEstimate>> {
    requests
        .into_iter()
        .enumerate()
        .map(|(i, request)| {
            let label = request.to_string();
            request
                .into_estimate(rounding, default_currency)
                .with_context(|| format!("request {} is invalid: {label}", i + 1))
        })
        .collect()
}
