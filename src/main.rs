use clap::Parser;
use hanyi::core::config::{self, CliOverrides};
use hanyi::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "hanyi", about = "Chinese to English translation with keyword extraction")]
struct Args {
    /// Translation endpoint (overrides config file and HANYI_ENDPOINT)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Skip the startup health probe
    #[arg(long)]
    no_health_check: bool,

    /// Log level written to hanyi.log
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to hanyi.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("hanyi.log") {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, falling back to defaults", e);
        config::HanyiConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            endpoint: args.endpoint,
            timeout_secs: args.timeout,
            no_health_check: args.no_health_check,
        },
    );

    log::info!(
        "hanyi starting up: endpoint={}, timeout={:?}, health_check={}",
        resolved.endpoint,
        resolved.timeout,
        resolved.check_health
    );

    tui::run(resolved)
}
