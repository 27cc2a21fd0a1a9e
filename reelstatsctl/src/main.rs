use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reelstats_core::{
    compute_statistics_with, import_titles, merge_user_ratings,
    split_title_ids,
};
use reelstats_model::{format_runtime, parse_runtime};
use reelstatsctl::{
    OutputFormat, StatsConfig, TableView,
    input::{load_records, load_user_ratings},
    render_json,
};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "reelstatsctl",
    about = "Rank actors, directors and genres across film and TV titles"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Aggregate a JSON file of title records
    Stats {
        /// JSON array of parsed title records
        #[arg(long)]
        input: PathBuf,
        /// JSON object mapping title ids to personal ratings
        #[arg(long)]
        user_ratings: Option<PathBuf>,
        /// Only analyze these ids (separated by space, comma, + or %20)
        #[arg(long)]
        only: Option<String>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Config file (TOML or JSON); overrides REELSTATS_CONFIG_PATH
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Parse runtime text such as "1h 55min"
    Runtime { text: String },
}

fn main() -> Result<()> {
    // Logs go to stderr so JSON output on stdout stays clean.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Stats {
            input,
            user_ratings,
            only,
            format,
            config,
        } => {
            let (settings, source) = StatsConfig::load(config.as_deref())
                .context("failed to load stats configuration")?;
            debug!(?source, ?settings, "resolved configuration");

            let mut titles = import_titles(load_records(&input)?);

            if let Some(only) = only {
                let wanted = split_title_ids(&only);
                titles.retain(|title| wanted.contains(title.id()));
                info!(selected = titles.len(), "restricted to listed ids");
            }

            if let Some(path) = user_ratings {
                let ratings = load_user_ratings(&path)?;
                let applied = merge_user_ratings(&mut titles, &ratings);
                info!(applied, available = ratings.len(), "merged user ratings");
            }

            let stats = compute_statistics_with(titles, &settings.caps);

            match format.unwrap_or(settings.format) {
                OutputFormat::Table => print!("{}", TableView::new(&stats)),
                OutputFormat::Json => println!(
                    "{}",
                    render_json(&stats).context("failed to encode report")?
                ),
            }
        }
        Command::Runtime { text } => {
            let minutes = parse_runtime(&text)
                .with_context(|| format!("cannot parse runtime '{text}'"))?;
            println!("{minutes} min ({})", format_runtime(minutes));
        }
    }

    Ok(())
}
