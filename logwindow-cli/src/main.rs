use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use colored::*;
use logwindow_core::serde_utils::to_pretty_json;
use logwindow_protocol::logs::{ShowLogsResponse, WindowRequest};

mod client;

use client::{show_logs_local, CliError, ShowLogsClient};

const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

#[derive(Parser)]
#[command(name = "logwindow")]
#[command(
    about = "LogWindow - page through a user's logs around an anchor timestamp",
    long_about = None
)]
struct Cli {
    #[arg(long, global = true, env = "LOGWINDOW_URL")]
    server: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the logs of a user around an anchor timestamp
    Show(ShowArgs),
    /// Show version information
    Version,
}

#[derive(Args)]
struct ShowArgs {
    #[arg(long)]
    user_id: String,
    /// Anchor timestamp, formatted as "%Y-%m-%d %H:%M:%S.%f"
    #[arg(long)]
    anchor: String,
    /// Number of logs on each side of the anchor
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    limit: i64,
    /// Offset applied to the anchor position
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    scroll: i64,
    /// Query an NDJSON dataset directly instead of a running service
    #[arg(long)]
    dataset: Option<PathBuf>,
    /// Print only the timestamps of the returned logs
    #[arg(long, default_value_t = false)]
    compact: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_failure(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Version => {
            println!("LogWindow v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Show(args) => {
            let request = WindowRequest::new(&args.user_id, &args.anchor, args.limit, args.scroll);
            let response = match &args.dataset {
                Some(path) => show_logs_local(path, &request)?,
                None => {
                    let base_url = cli.server.as_deref().unwrap_or(DEFAULT_SERVER);
                    ShowLogsClient::new(base_url)?.show_logs(&request).await?
                }
            };

            if args.compact {
                print_compact(&response);
            } else {
                let json =
                    to_pretty_json(&response).map_err(|err| CliError::Render(err.to_string()))?;
                println!("{json}");
            }
            Ok(())
        }
    }
}

fn print_compact(response: &ShowLogsResponse) {
    println!(
        "{} {} ({} logs, anchor index {})",
        "✔ Window for".green().bold(),
        response.user_id,
        response.user_logs_amount,
        response.anchor_index
    );
    for record in &response.logs {
        println!("  {}", record.timestamp);
    }
    println!(
        "  {} {} forward, {} backward",
        "scroll budget:".dimmed(),
        response.scrolling_steps_to_end,
        response.scrolling_steps_to_start
    );
}

fn print_failure(err: &CliError) {
    match err {
        CliError::Rejected(body) => {
            eprintln!("{} {:?}: {}", "✘ Rejected".red().bold(), body.kind, body.error);
            if let Some(max) = body.max_log_appearance_limit {
                eprintln!("  largest accepted limit for this scroll: {max}");
            }
        }
        other => eprintln!("{} {}", "✘ Error".red().bold(), other),
    }
}
