//! Cloud Usage Reporter CLI
//!
//! Resolves cloud-backed volumes on one cluster and prints their object
//! store consumption, optionally exporting the report to CSV.

use anyhow::{anyhow, Context};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cloud_usage_reporter::{
    config, export, progress, report, ArrayClient, ArrayClientConfig, GcsLister, GcsListerConfig,
    ServiceKind,
};

// =============================================================================
// CLI Arguments
// =============================================================================

/// Report cloud-storage consumption for backup or tiering volumes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cluster management hostname or IP
    #[arg(short, long, env = "CLUSTER")]
    cluster: String,

    /// Service to size: backup or tiering
    #[arg(short, long, env = "SERVICE")]
    service: ServiceKind,

    /// Also write the report to a timestamped CSV file
    #[arg(long)]
    csv: bool,

    /// KEY=VALUE file loaded into the environment before reading credentials
    #[arg(long, env = "ENV_FILE")]
    env_file: Option<PathBuf>,

    /// Accept self-signed array certificates. Array management interfaces
    /// rarely carry CA-signed certificates, so this defaults on; pass
    /// --insecure-tls=false to require validation.
    #[arg(long, env = "ARRAY_INSECURE_TLS", default_value_t = true)]
    insecure_tls: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, env = "LOG_JSON")]
    log_json: bool,
}

// =============================================================================
// Main
// =============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(&args);

    if let Some(env_file) = &args.env_file {
        config::load_env_file(env_file)
            .with_context(|| format!("loading env file {}", env_file.display()))?;
    }

    let credentials = config::array_credentials()?;
    let token = config::storage_token()?;

    let client = ArrayClient::new(
        ArrayClientConfig::new(&args.cluster, credentials)
            .accept_invalid_certs(args.insecure_tls),
    )?;
    let lister = GcsLister::new(GcsListerConfig::new(token))?;

    let cancel = tokio_util::sync::CancellationToken::new();
    let dots = progress::spawn_dots(args.service, cancel.clone());

    let result = report::build_report(args.service, &client, &lister).await;

    // Stop the indicator before anything else writes to stdout.
    cancel.cancel();
    let _ = dots.await;
    println!();

    let rows = result.map_err(|e| anyhow!("{}: {e}", e.kind()))?;

    export::print_table(args.service, &rows)?;
    if args.csv {
        let path = export::write_csv(Path::new("."), &args.cluster, args.service, &rows)?;
        info!(file = %path.display(), "wrote CSV export");
        println!("Report written to {}", path.display());
    }

    Ok(())
}

// =============================================================================
// Logging Setup
// =============================================================================

fn init_logging(args: &Args) {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(level.into())
        .add_directive("reqwest=warn".parse().unwrap())
        .add_directive("rustls=warn".parse().unwrap())
        .add_directive("hyper=warn".parse().unwrap());

    if args.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
