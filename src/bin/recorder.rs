use anyhow::Context;
use clap::Parser;
use pi_monitoring::config::read_config_file;
use pi_monitoring::recorder::{append_record, simulated_reading};
use pi_monitoring::util::current_timestamp;
use tracing::{info, level_filters::LevelFilter, trace};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Parser)]
struct Args {
    /// Config file
    #[arg(short, default_value = "./config.json")]
    file: String,
}

fn init() {
    let filter = filter::Targets::new().with_targets(vec![
        ("pi_monitoring", LevelFilter::TRACE),
        ("pimon_recorder", LevelFilter::TRACE),
    ]);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact()
                .with_ansi(false),
        )
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    init();
    dotenv::dotenv().ok();
    let args = Args::parse();
    trace!("started with args: {args:?}");

    let config = read_config_file(&args.file)?;

    let timestamp = current_timestamp();
    let reading = simulated_reading();
    append_record(&config.record_file, &timestamp, &reading).with_context(|| {
        format!(
            "failed to append record to {}",
            config.record_file.display()
        )
    })?;

    info!(
        "recorded reading: {}°C, {}% at {timestamp}",
        reading.temperature, reading.humidity
    );

    Ok(())
}
