use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::aggregator::aggregate;
use crate::cli::logging::init_logging;
use crate::models::{DailyCount, UsageStats};
use crate::utils::{load_export, max_export_bytes};

const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Parser)]
#[command(name = "chat-history-stats")]
#[command(version = "0.1.0")]
#[command(about = "Usage statistics for exported chat history", long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show usage statistics for an exported conversations file
    Stats {
        /// Path to the export (a JSON list of conversations)
        file: PathBuf,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Number of recent conversations to list
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
    /// Print messages per day as tab-separated date and count
    Daily {
        /// Path to the export (a JSON list of conversations)
        file: PathBuf,
    },
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    stats: &'a UsageStats,
    usage_series: Vec<DailyCount>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Some(Commands::Stats { file, json, top }) => {
            let stats = load_stats(file)?;
            if *json {
                print_json(&stats)?;
            } else {
                show_stats(&stats, *top);
            }
        }
        Some(Commands::Daily { file }) => {
            let stats = load_stats(file)?;
            for point in stats.usage_series() {
                println!("{}\t{}", point.date, point.count);
            }
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn load_stats(file: &Path) -> Result<UsageStats> {
    let max_bytes = max_export_bytes()?;
    let document = load_export(file, max_bytes)?;
    aggregate(&document).with_context(|| format!("Error processing file: {}", file.display()))
}

fn print_json(stats: &UsageStats) -> Result<()> {
    let report = JsonReport { stats, usage_series: stats.usage_series() };
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize statistics")?;
    println!("{}", json);
    Ok(())
}

fn show_stats(stats: &UsageStats, top: usize) {
    println!("Chat History Statistics");
    println!("=======================");
    println!("Total messages: {}", stats.total_messages);
    println!("Conversations: {}", stats.conversations.len());
    println!("Active days: {}", stats.daily_stats.len());
    if let (Some(first), Some(last)) =
        (stats.daily_stats.first_date(), stats.daily_stats.last_date())
    {
        println!("Date range: {} to {}", first, last);
    }
    if !stats.skipped.is_empty() {
        println!("Skipped entries: {}", stats.skipped.len());
    }

    if top == 0 || stats.conversations.is_empty() {
        return;
    }

    println!();
    println!("Recent conversations:");
    for summary in stats.conversations.iter().take(top) {
        println!(
            "  {}  {} ({} messages)",
            summary.created_at.format(DISPLAY_TIME_FORMAT),
            summary.title,
            summary.message_count
        );
        if let Some(reply) = &summary.last_response {
            println!("      {}", reply.replace('\n', " "));
        }
    }
}
