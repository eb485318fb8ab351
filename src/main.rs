use std::io::{BufRead, Write};

use clap::Parser;

use termfs::fs::Session;
use termfs::shell::Shell;
use termfs::store::{MemoryStore, SledStore, SnapshotStore};

#[derive(Parser)]
#[command(name = "termfs")]
#[command(about = "An in-memory filesystem driven by shell-like commands")]
#[command(version)]
struct Cli {
    /// Execute a single command line and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// Directory for the durable snapshot store (ephemeral when omitted)
    #[arg(long = "data-dir")]
    data_dir: Option<std::path::PathBuf>,

    /// User name the reward ledger is keyed by
    #[arg(long, default_value = "user")]
    user: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("TERMFS_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let store: Box<dyn SnapshotStore> = match &cli.data_dir {
        Some(dir) => match SledStore::open(dir) {
            Ok(store) => Box::new(store),
            Err(e) => {
                eprintln!("Error: cannot open snapshot store at {}: {}", dir.display(), e);
                std::process::exit(1);
            }
        },
        None => Box::new(MemoryStore::new()),
    };

    let session = match Session::new(store) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: cannot load filesystem snapshot: {}", e);
            std::process::exit(1);
        }
    };
    let mut shell = Shell::new(session, Some(cli.user));

    // One-shot mode.
    if let Some(line) = cli.command {
        let result = shell.run_line(&line);
        if !result.output.is_empty() {
            println!("{}", result.output);
        }
        std::process::exit(if result.succeeded { 0 } else { 1 });
    }

    // Interactive REPL.
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} $ ", shell.pwd());
        let _ = std::io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "exit" {
            break;
        }

        let result = shell.run_line(trimmed);
        if !result.output.is_empty() {
            println!("{}", result.output);
        }
        if let Some(reward) = result.reward {
            println!(
                "Task completed! +{} points (total: {})",
                reward.points_awarded, reward.total_points
            );
        }
    }
}
