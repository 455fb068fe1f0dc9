// ─────────────────────────────────────────────────────────────────────────────
//  Shabaka — Transaction Graph Renderer
//
//  Shabaka (شبكة): "The Network" — turns an address's transaction history
//  into a filtered, categorized graph ready for drawing.
// ─────────────────────────────────────────────────────────────────────────────

use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;
use shabaka::config::Config;
use shabaka::config::load_config;
use shabaka::engine::ReportKind;
use shabaka::engine::ReportRequest;
use shabaka::engine::build_report;
use shabaka::error::Result;
use shabaka::model::AddressCategory;
use shabaka::model::FilterState;
use shabaka::model::Network;
use shabaka::model::SortOption;
use shabaka::model::TimeRangeOption;
use shabaka::tracing::setup_tracing;
use tracing::warn;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Output {
    Graph,
    Scene,
}

#[derive(Debug, Parser)]
#[command(name = "shabaka", version, about = "Render an address's transaction history as a graph")]
struct Args {
    /// JSON file with address data or a bare transaction array
    #[arg(short, long)]
    input: PathBuf,

    /// Address the graph is centred on
    #[arg(short, long)]
    address: String,

    #[arg(short, long, default_value = "ethereum")]
    network: Network,

    #[arg(long, default_value = "time")]
    sort: SortOption,

    #[arg(long, default_value = "all")]
    range: TimeRangeOption,

    /// Categories to hide, repeatable
    #[arg(long = "hide")]
    hidden: Vec<AddressCategory>,

    #[arg(short, long, value_enum, default_value = "graph")]
    output: Output,

    #[arg(short, long, default_value = "Config.toml")]
    config: PathBuf,

    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (config, config_error) = match load_config(&args.config).await {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    setup_tracing("shabaka", &config.logging)?;

    if let Some(e) = config_error {
        warn!("config::fallback_to_defaults::path::{}::error::{}", args.config.display(), e);
    }

    let filters = args
        .hidden
        .iter()
        .fold(FilterState::default().with_sort(args.sort).with_time_range(args.range), |filters, category| {
            filters.without_category(*category)
        });

    let request = ReportRequest {
        input: args.input,
        address: args.address,
        network: args.network,
        filters,
        kind: match args.output {
            Output::Graph => ReportKind::Graph,
            Output::Scene => ReportKind::Scene,
        },
    };

    let report = build_report(&config, request).await?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    Ok(())
}
