use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordhord_config::Config;
use wordhord_dict::dict::Dict;
use wordhord_history::{Location, TermHistory};

mod render;
mod repl;
mod worker;

#[derive(Parser)]
#[command(name = "wordhord", about = "Old English dictionary lookup")]
struct Cli {
    /// Override the dictionary database path.
    #[arg(long)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the dictionary and print ranked matches.
    Search {
        query: String,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Print one entry by id and record it as viewed.
    Show { nid: i64 },
    /// List recently viewed entries.
    Recent {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Interactive lookup loop.
    Repl,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::new();
    let db_path = cli.db.unwrap_or_else(|| config.dictionary.path.clone());
    let dict = Dict::open(&db_path)
        .with_context(|| format!("opening dictionary at {}", db_path.display()))?;

    match cli.command {
        Command::Search { query, limit } => {
            let limit = limit.unwrap_or(config.search.candidate_limit);
            let results = tokio::task::spawn_blocking(move || dict.search(&query, limit)).await??;
            if results.is_empty() {
                println!("(no matches)");
            }
            for (rank, term) in results.iter().enumerate() {
                println!("{}", render::result_line(rank + 1, term));
            }
        }
        Command::Show { nid } => {
            let history = open_history(&config)?;
            match dict.load_by_id(nid)? {
                Some(term) => {
                    history.record_id(term.nid, unix_time_millis())?;
                    println!("{}", render::entry(&term));
                }
                None => println!("no entry with id {nid}"),
            }
            history.close()?;
        }
        Command::Recent { limit } => {
            let history = open_history(&config)?;
            let limit = limit.unwrap_or(config.history.seed_limit);
            for nid in history.get_ids(limit)? {
                if let Some(term) = dict.load_by_id(nid)? {
                    println!("{:>6}  {}", term.nid, term.title);
                }
            }
            history.close()?;
        }
        Command::Repl => {
            let history = open_history(&config)?;
            repl::run(dict, history, config).await?;
        }
    }
    Ok(())
}

/// Open the history store, pruning entries past the retention window.
fn open_history(config: &Config) -> anyhow::Result<TermHistory> {
    let retention_secs = f64::from(config.history.retention_days) * 24.0 * 60.0 * 60.0;
    let delete_before = unix_time_millis() as f64 / 1000.0 - retention_secs;
    let history = TermHistory::open(Location::OnDisk(config.history.path.clone()), delete_before)
        .with_context(|| {
        format!(
            "opening history store at {}",
            config.history.path.display()
        )
    })?;
    Ok(history)
}

pub(crate) fn unix_time_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}
