//! avnbot CLI
//!
//! Replays chat messages through the weather-report dispatcher and checks
//! configuration. Replies are printed as Slack message JSON, one per line.

#![allow(clippy::print_stdout)]

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use application::{CommandDispatcher, DispatchSummary, IncomingChatMessage};
use clap::{Parser, Subcommand};
use infrastructure::{AppConfig, ConsoleChatAdapter, FixtureWeatherAdapter, init_logging};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// avnbot CLI
#[derive(Parser)]
#[command(name = "avnbot-cli")]
#[command(author, version, about = "Aviation weather chat bot CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run chat messages through the dispatcher
    ///
    /// Each TEXT argument is one message. Without arguments, every
    /// non-empty line of stdin is one message.
    /// Example: avnbot-cli replay --records wx.json "!m kmsn kord" "!t kmsn"
    Replay {
        /// JSON file with the weather records to serve
        #[arg(short, long)]
        records: PathBuf,

        /// Channel the messages appear in
        #[arg(long, default_value = "CLI")]
        channel: String,

        /// User the messages appear to come from
        #[arg(long, default_value = "cli-user")]
        user: String,

        /// Message texts
        text: Vec<String>,
    },

    /// Load and validate configuration, then print a redacted summary
    CheckConfig,
}

/// Log filter override for `-v` flags; none keeps the configured filter
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("avnbot=debug,application=debug,infrastructure=info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Build an inbound message the way the chat transport would deliver it
fn chat_message(channel: &str, user: &str, text: &str, seq: usize) -> IncomingChatMessage {
    let ts = format!("{}.{seq:06}", chrono::Utc::now().timestamp());
    IncomingChatMessage::new(channel, ts, user, text)
}

fn load_config(path: Option<&std::path::Path>, verbose: u8) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load_from(path).context("Failed to load configuration")?;
    if let Some(filter) = log_filter_from_verbosity(verbose) {
        config.logging.filter = filter.to_string();
    }
    Ok(config)
}

async fn replay(
    config: &AppConfig,
    records: PathBuf,
    channel: &str,
    user: &str,
    texts: Vec<String>,
) -> anyhow::Result<DispatchSummary> {
    let weather = FixtureWeatherAdapter::load(&records)
        .await
        .with_context(|| format!("Failed to load records from {}", records.display()))?;
    if weather.is_empty() {
        warn!(path = %records.display(), "Record file contains no records");
    }

    let dispatcher = CommandDispatcher::new(
        Arc::new(weather),
        Arc::new(ConsoleChatAdapter::stdout()),
        config.report_formatter(),
        config.dispatcher_config(),
    );

    let mut total = DispatchSummary::default();
    let mut add = |summary: DispatchSummary| {
        total.stations += summary.stations;
        total.sent += summary.sent;
        total.failed += summary.failed;
    };

    if texts.is_empty() {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut seq = 0;
        while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
            if line.trim().is_empty() {
                continue;
            }
            seq += 1;
            add(dispatcher.handle(&chat_message(channel, user, &line, seq)).await);
        }
    } else {
        for (i, text) in texts.iter().enumerate() {
            add(dispatcher.handle(&chat_message(channel, user, text, i + 1)).await);
        }
    }

    Ok(total)
}

fn print_config_summary(config: &AppConfig) {
    println!("✅ Configuration valid");
    println!();
    println!("[bot]");
    println!("   observation_trigger = {:?}", config.bot.observation_trigger);
    println!("   forecast_trigger    = {:?}", config.bot.forecast_trigger);
    println!("   lookback_hours      = {}", config.bot.lookback_hours);
    println!("   reply_in_thread     = {}", config.bot.reply_in_thread);
    println!(
        "   bot_user_id         = {}",
        config.bot.bot_user_id.as_deref().unwrap_or("(not set)")
    );
    println!("[report]");
    println!("   icon_url            = {:?}", config.report.icon_url);
    println!("[logging]");
    println!("   filter              = {:?}", config.logging.filter);
    println!("   format              = {}", config.logging.format);
    println!("[slack]");
    println!(
        "   bot_token           = {}",
        if config.slack.has_token() {
            "[REDACTED]"
        } else {
            "(not set)"
        }
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), cli.verbose)?;
    init_logging(&config.logging).context("Failed to initialize logging")?;
    config.validate().context("Invalid configuration")?;

    match cli.command {
        Commands::Replay {
            records,
            channel,
            user,
            text,
        } => {
            let summary = replay(&config, records, &channel, &user, text).await?;
            info!(
                stations = summary.stations,
                sent = summary.sent,
                failed = summary.failed,
                "Replay finished"
            );
        },

        Commands::CheckConfig => print_config_summary(&config),
    }

    Ok(())
}
