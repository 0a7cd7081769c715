use clap::Parser;
use pi_monitoring::config::read_config_file;
use pi_monitoring::notify::Notifier;
use pi_monitoring::snapshot::save_system_snapshot;
use pi_monitoring::util::current_timestamp;
use tracing::{error, info, level_filters::LevelFilter, trace};
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
        ("pimon_pre_reboot", LevelFilter::TRACE),
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

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init();
    dotenv::dotenv().ok();
    let args = Args::parse();
    trace!("started with args: {args:?}");

    let config = read_config_file(&args.file)?;
    let Some(token) = config.telegram.resolved_token() else {
        anyhow::bail!("no bot token in config file or TELEGRAM_BOT_TOKEN");
    };

    let timestamp = current_timestamp();
    let message = match save_system_snapshot(&config.snapshot_file) {
        Ok(()) => {
            info!(
                "saved pre-reboot snapshot to {}",
                config.snapshot_file.display()
            );
            format!(
                "{} is rebooting at {timestamp}. Logs saved successfully.",
                config.display_name()
            )
        }
        Err(err) => {
            error!("failed to save pre-reboot snapshot: {err}");
            format!(
                "{} is rebooting at {timestamp}. Failed to save logs.",
                config.display_name()
            )
        }
    };

    let notifier = Notifier::new(&config.telegram, token);
    let delivered = notifier.broadcast(&message).await;
    info!(
        "delivered reboot notice to {delivered}/{} chats",
        config.telegram.chat_ids.len()
    );

    Ok(())
}
