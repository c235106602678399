//! Rarest Parts - BrickLink scarcity ranking
//!
//! Ranks the parts of an inventory CSV by how few sellers offer them and
//! writes the ranking to CSV. With `--feature`, also marks the scarcest
//! parts as featured in the user's store.

use clap::Parser;
use rarest_parts::{
    feature_scarcest, format_feature_report, format_results_table, format_run_summary,
    read_inventory, write_results, ApiResult, BrickLinkClient, Config, LogProgress, Pipeline,
};
use std::path::PathBuf;

/// Find the rarest parts in a BrickLink inventory (fewest sellers first)
#[derive(Parser, Debug)]
#[command(name = "rarest_parts")]
#[command(version, about, long_about = None)]
struct Args {
    /// Inventory CSV with Description, Color and Condition columns
    input: PathBuf,

    /// Where to write the ranked results
    #[arg(short, long, default_value = "rarest_parts.csv")]
    output: PathBuf,

    /// Path to the config file
    #[arg(short, long, default_value_os_t = Config::default_path())]
    config: PathBuf,

    /// Mark the scarcest parts as featured in your store
    #[arg(long, default_value_t = false)]
    feature: bool,

    /// How many of the scarcest parts to feature (overrides config)
    #[arg(long)]
    feature_limit: Option<usize>,

    /// Pause after each API call in milliseconds (overrides config)
    #[arg(long)]
    throttle_ms: Option<u64>,
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=rarest_parts=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Starting rarest_parts...");

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> ApiResult<()> {
    let mut config = Config::load(&args.config)?;
    config.apply_env_overrides();
    if let Some(limit) = args.feature_limit {
        config.pipeline.feature_limit = limit;
    }
    if let Some(throttle_ms) = args.throttle_ms {
        config.pipeline.throttle_ms = throttle_ms;
    }
    config.validate()?;

    // Read before touching the network so a bad file fails fast
    let rows = read_inventory(&args.input)?;

    let client = BrickLinkClient::new(config.credentials.clone(), &config.api)?;
    let mut pipeline = Pipeline::new(client, &config.pipeline);
    let output = pipeline.run(&rows, &mut LogProgress::default());

    print!("{}", format_results_table(&output.results));
    println!();
    print!("{}", format_run_summary(&output.summary));

    write_results(&args.output, &output.results)?;
    println!("Results written to {}", args.output.display());

    if args.feature {
        let report = feature_scarcest(
            pipeline.marketplace(),
            &output.results,
            config.pipeline.feature_limit,
        );
        print!("{}", format_feature_report(&report));
    }

    Ok(())
}
