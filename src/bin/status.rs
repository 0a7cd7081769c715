use clap::Parser;
use pi_monitoring::config::read_config_file;
use pi_monitoring::notify::Notifier;
use pi_monitoring::report::StatusReport;
use tracing::{debug, info, level_filters::LevelFilter, trace};
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
        ("pimon_status", LevelFilter::TRACE),
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

    let report = StatusReport::collect(&config);
    let message = report.render();
    debug!("assembled status report ({} bytes)", message.len());

    let notifier = Notifier::new(&config.telegram, token);
    let delivered = notifier.broadcast(&message).await;
    info!(
        "delivered status report to {delivered}/{} chats",
        config.telegram.chat_ids.len()
    );

    Ok(())
}
