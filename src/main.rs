//! Mentorgraph CLI: load, link, and inspect a mentoring Q&A dataset.

use std::path::PathBuf;

use clap::Parser;
use mentorgraph::{Describe, JoinTables, RawDataset};

#[derive(Parser)]
#[command(name = "mentorgraph", version, about = "Load and link a Q&A mentoring platform dataset")]
struct Cli {
    /// Directory containing the dataset CSV tables
    data_dir: PathBuf,

    /// Write the unlinked dataset here, then reload and link the copy
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Entities to print per collection
    #[arg(long, default_value_t = 5)]
    preview: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let raw = RawDataset::load(&cli.data_dir)?;
    let raw = match &cli.snapshot {
        Some(path) => {
            raw.save_snapshot(path)?;
            RawDataset::load_snapshot(path)?
        }
        None => raw,
    };

    let joins = JoinTables::load(&cli.data_dir)?;
    let graph = raw.link(&joins)?;

    println!("{}", serde_json::to_string_pretty(&graph.stats())?);

    preview("tags", graph.tags(), cli.preview);
    preview("groups", graph.groups(), cli.preview);
    preview("schools", graph.schools(), cli.preview);
    preview("students", graph.students(), cli.preview);
    preview("professionals", graph.professionals(), cli.preview);
    preview("questions", graph.questions(), cli.preview);
    preview("answers", graph.answers(), cli.preview);
    preview("emails", graph.emails(), cli.preview);

    Ok(())
}

fn preview<T: Describe>(label: &str, items: &[T], limit: usize) {
    println!("-- {label}");
    for item in items.iter().take(limit) {
        println!("{}", item.summary());
    }
}
