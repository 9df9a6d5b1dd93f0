//! CLI entry point for the fifobook benchmark driver.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use fifobook_driver::config::BenchConfig;
use fifobook_driver::error::Error;
use fifobook_driver::run;

#[derive(Parser)]
#[command(name = "fifobook-bench")]
#[command(about = "Submit a seeded random order stream and report matching counters")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of orders to submit
    #[arg(long)]
    orders: Option<u64>,

    /// Percentage of market orders, 0-100
    #[arg(long)]
    market_pct: Option<u32>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Centre of the limit price band
    #[arg(long, allow_hyphen_values = true)]
    price_base: Option<i64>,

    /// Half-width of the limit price band
    #[arg(long)]
    price_drift: Option<i64>,

    /// Largest order quantity
    #[arg(long)]
    max_qty: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<BenchConfig, Error> {
        let mut config = match &self.config {
            Some(path) => BenchConfig::load(path)?,
            None => BenchConfig::default(),
        };
        if let Some(orders) = self.orders {
            config.orders = orders;
        }
        if let Some(pct) = self.market_pct {
            config.market_pct = pct;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(base) = self.price_base {
            config.price_base = base;
        }
        if let Some(drift) = self.price_drift {
            config.price_drift = drift;
        }
        if let Some(max_qty) = self.max_qty {
            config.max_qty = max_qty;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            process::exit(1);
        }
    };

    log::debug!("config: {config:?}");
    let report = run(&config);

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {}", Error::from(e));
                process::exit(1);
            }
        }
    } else {
        println!("{report}");
    }
}
