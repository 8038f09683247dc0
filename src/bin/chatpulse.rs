use anyhow::{Context, Result};
use chatpulse::{
    aggregate_session,
    analytics::{FormatHandler, JsonExporter},
    analyze_message, classify_records,
    config::{AppConfig, ConfigManager},
    io::{parse_message_file, parse_message_reader, write_ndjson, write_ndjson_file},
    logging, StoredMessage, Tier,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "chatpulse", version)]
#[command(about = "Rule-based live chat message analysis and session analytics", long_about = None)]
struct Cli {
    /// Path to the config file (defaults to the XDG config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level override (trace/debug/info/warn/error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single chat message and print it as JSON
    Analyze {
        /// Raw chat message text
        text: String,

        /// Subscription tier (Starter, Pro, Agency); unknown values behave like Starter
        #[arg(long)]
        tier: Option<String>,
    },
    /// Fill in classification columns of stored messages (NDJSON in, NDJSON out)
    Classify {
        /// NDJSON file of stored messages, or `-` for stdin
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long)]
        tier: Option<String>,
    },
    /// Aggregate a session of stored messages into analytics JSON
    Report {
        /// NDJSON file of stored messages, or `-` for stdin
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long)]
        tier: Option<String>,
    },
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let manager = match path {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new()?,
    };
    manager.load_config()
}

fn resolve_tier(flag: Option<&str>, config: &AppConfig) -> Tier {
    flag.map(Tier::parse_lenient)
        .unwrap_or_else(|| config.analysis.tier())
}

fn read_messages(input: &Path) -> Result<Vec<StoredMessage>> {
    if input == Path::new("-") {
        parse_message_reader(std::io::stdin().lock(), "stdin")
            .context("Failed to read messages from stdin")
    } else {
        parse_message_file(input)
            .with_context(|| format!("Failed to read messages from {}", input.display()))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.log.log_level = level;
    }
    let _log_guard = logging::init_logging(&config.log)?;

    tracing::debug!("🎬 Starting chatpulse");

    match cli.command {
        Commands::Analyze { text, tier } => {
            let tier = resolve_tier(tier.as_deref(), &config);
            let classified = analyze_message(&text, Some(tier));
            let json = if config.report.pretty_json {
                serde_json::to_string_pretty(&classified)?
            } else {
                serde_json::to_string(&classified)?
            };
            println!("{}", json);
        }
        Commands::Classify {
            input,
            output,
            tier,
        } => {
            let tier = resolve_tier(tier.as_deref(), &config);
            let messages = classify_records(read_messages(&input)?, Some(tier));
            match output {
                Some(path) => write_ndjson_file(&path, &messages)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => write_ndjson(std::io::stdout().lock(), &messages)?,
            }
            tracing::info!(messages = messages.len(), tier = %tier, "✅ Messages classified");
        }
        Commands::Report {
            input,
            output,
            tier,
        } => {
            let tier = resolve_tier(tier.as_deref(), &config);
            let messages = classify_records(read_messages(&input)?, Some(tier));
            let analytics = aggregate_session(&messages)?;

            let exporter = JsonExporter::new().with_pretty_print(config.report.pretty_json);
            match output {
                Some(path) => exporter.export_to_file(&analytics, &path)?,
                None => println!("{}", exporter.to_json_string(&analytics)?),
            }
        }
    }

    Ok(())
}
