use clap::{Parser, Subcommand};
use tracing::{error, warn};

use order_mart::app::build_mart_use_case::BuildMartUseCase;
use order_mart::app::ports::SnapshotSourcePort;
use order_mart::config::Config;
use order_mart::idempotency;
use order_mart::infra::json_snapshot_source::JsonSnapshotSource;
use order_mart::infra::jsonl_output_adapter::JsonLinesOutputAdapter;
use order_mart::logging;
use order_mart::observability;
use order_mart::pipeline::MartPipeline;

#[derive(Parser)]
#[command(name = "order_mart")]
#[command(about = "Order analytics mart builder")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the analytics mart from a snapshot directory
    Build {
        /// Directory holding one JSON file per input relation
        #[arg(long)]
        input: String,
        /// File to write the mart rows to (one JSON object per line)
        #[arg(long, default_value = "output/order_mart.jsonl")]
        output: String,
    },
    /// Print the content fingerprint of a snapshot directory
    Fingerprint {
        /// Directory holding one JSON file per input relation
        #[arg(long)]
        input: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    logging::init_logging();

    if let Err(e) = observability::metrics::init() {
        warn!("Metrics initialization failed: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { input, output } => {
            println!("🚀 Building order analytics mart from {}", input);

            let config = Config::load_or_default();
            let pipeline = MartPipeline::new(config.mart);
            let source = Box::new(JsonSnapshotSource::new(&input));
            let sink = Box::new(JsonLinesOutputAdapter::create(&output)?);
            let use_case = BuildMartUseCase::new(pipeline, source, sink);

            match use_case.run().await {
                Ok(summary) => {
                    println!("\n📊 Mart build results:");
                    println!("   Run id: {}", summary.run_id);
                    println!("   Snapshot fingerprint: {}", summary.snapshot_fingerprint);
                    println!("   Base orders: {}", summary.total_orders);
                    println!("   Missing customer: {}", summary.missing_customer);
                    println!("   Disqualified: {}", summary.disqualified);
                    println!("   Records emitted: {}", summary.records_emitted);
                    println!("   Output file: {}", output);
                }
                Err(e) => {
                    error!("Mart build failed: {}", e);
                    return Err(e.into());
                }
            }
        }
        Commands::Fingerprint { input } => {
            let source = JsonSnapshotSource::new(&input);
            let snapshot = source.load_snapshot().await?;
            println!("{}", idempotency::snapshot_fingerprint(&snapshot)?);
        }
    }

    Ok(())
}
