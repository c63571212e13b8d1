use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dominant_colors::models::{AppConfig, ColorReport, ExtractOptions};
use dominant_colors::rendering::ImageSource;
use dominant_colors::services::{BatchRunner, ColorExtractor};

#[derive(Parser)]
#[command(name = "dominant-colors")]
#[command(about = "Rank the colors of PNG and SVG images by how often they occur")]
struct Cli {
    /// YAML config file (falls back to CONFIG_FILE)
    #[arg(long, global = true, env = "CONFIG_FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ranked colors of one image
    Extract {
        /// PNG or SVG file
        path: PathBuf,

        /// Print at most this many colors
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Include pixel counts
        #[arg(long)]
        counts: bool,

        #[command(flatten)]
        extract: ExtractArgs,
    },
    /// Write the dominant color of every image in a directory to JSON
    Batch {
        /// Directory to scan (not recursive)
        #[arg(long, alias = "rootDir")]
        root_dir: PathBuf,

        /// Output JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// File extensions to process, comma-separated (e.g. "png,svg")
        #[arg(long, value_delimiter = ',')]
        ext: Option<Vec<String>>,

        /// Concurrent extractions
        #[arg(short, long)]
        jobs: Option<usize>,

        #[command(flatten)]
        extract: ExtractArgs,
    },
}

/// Extraction flags shared by all subcommands; they override the config file.
#[derive(Args)]
struct ExtractArgs {
    /// Downsampling ratio in (0, 1]
    #[arg(short, long)]
    scale: Option<f64>,

    /// Colors to ignore, comma-separated hex (e.g. "#000000,#FFFFFF")
    #[arg(long, value_delimiter = ',', conflicts_with = "no_ignore")]
    ignore: Option<Vec<String>>,

    /// Count every color, including black and white
    #[arg(long)]
    no_ignore: bool,
}

impl ExtractArgs {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        if self.no_ignore {
            config.ignore.clear();
        } else if let Some(ignore) = &self.ignore {
            config.ignore = ignore.clone();
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Extract {
            path,
            limit,
            json,
            counts,
            extract,
        }) => {
            init_logging("dominant_colors=warn");
            let mut config = AppConfig::load(cli.config.as_deref());
            extract.apply(&mut config);
            run_extract_command(&path, &config.extract_options()?, limit, json, counts).await
        }
        Some(Commands::Batch {
            root_dir,
            output,
            ext,
            jobs,
            extract,
        }) => {
            init_logging("dominant_colors=info");
            let mut config = AppConfig::load(cli.config.as_deref());
            extract.apply(&mut config);
            if let Some(output) = output {
                config.output = output;
            }
            if let Some(ext) = ext {
                config.extensions = ext;
            }
            if jobs.is_some() {
                config.jobs = jobs;
            }
            run_batch_command(&root_dir, &config).await
        }
        None => {
            run_status_command(cli.config.as_deref());
            Ok(())
        }
    }
}

fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

async fn run_extract_command(
    path: &Path,
    options: &ExtractOptions,
    limit: Option<usize>,
    json: bool,
    counts: bool,
) -> anyhow::Result<()> {
    let extractor = ColorExtractor::new();
    let source = ImageSource::from(path);
    let options = options.clone();

    let ranked = tokio::task::spawn_blocking(move || extractor.tally(&source, &options))
        .await?
        .with_context(|| format!("Failed to extract colors from {}", path.display()))?;

    let reports: Vec<ColorReport> = ranked
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|entry| {
            let mut report = ColorReport::from(entry);
            if !counts {
                report.count = None;
            }
            report
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else if reports.is_empty() {
        eprintln!("No colors found in {}", path.display());
    } else {
        for report in &reports {
            println!("{}", report.line());
        }
    }

    Ok(())
}

async fn run_batch_command(root_dir: &Path, config: &AppConfig) -> anyhow::Result<()> {
    let runner = BatchRunner::new(ColorExtractor::new(), config.extract_options()?)
        .with_extensions(&config.extensions)
        .with_jobs(config.jobs());

    let report = runner
        .run(root_dir)
        .await
        .with_context(|| format!("Failed to scan {}", root_dir.display()))?;

    report
        .write_json(&config.output)
        .await
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    tracing::info!(
        output = %config.output.display(),
        colors = report.colors.len(),
        "Wrote dominant colors"
    );

    Ok(())
}

/// Print version, configuration and usage hints.
fn run_status_command(config_file: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("dominant-colors v{VERSION}");
    println!("Ranks the colors of PNG and SVG images by frequency\n");

    let config_source = match config_file {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("{} (not found, using defaults)", path.display()),
        None => "(not set, using defaults)".to_string(),
    };
    let config = AppConfig::load(config_file.filter(|p| p.exists()));

    println!("Configuration:");
    println!("  CONFIG_FILE = {config_source}");
    println!("  scale       = {}", config.scale);
    println!("  ignore      = {}", display_list(&config.ignore));
    println!("  extensions  = {}", display_list(&config.extensions));
    println!("  output      = {}", config.output.display());
    match config.jobs {
        Some(jobs) => println!("  jobs        = {jobs}"),
        None => println!("  jobs        = {} (available cores)", config.jobs()),
    }

    println!("\nUsage:");
    println!("  dominant-colors extract <FILE> [--limit N] [--json]");
    println!("  dominant-colors batch --root-dir <DIR> [--output FILE]");
    println!("\nRun with --help for all options.");
}

fn display_list(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

