use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lifelog::models::Tags;
use lifelog::store::LogStore;

#[derive(Parser)]
#[command(name = "llog")]
#[command(about = "Append a timestamped entry to your life log")]
struct Cli {
    /// Entry text. Prompted for interactively when omitted.
    #[arg(short, long)]
    data: Option<String>,

    /// Tags for the entry. Each must be one of: development, life.
    #[arg(short, long, num_args = 1..)]
    tags: Vec<String>,

    /// Path to the log file.
    #[arg(short, long, default_value = "life-log.json")]
    file: PathBuf,
}

/// Initialize tracing with output to stderr, keeping stdout clean for the
/// prompt and the confirmation line.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "lifelog=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let tags = if cli.tags.is_empty() {
        None
    } else {
        Some(Tags::from(cli.tags))
    };

    let mut store = LogStore::open(&cli.file);
    let entry = store.append(cli.data, tags)?;

    tracing::debug!("appended entry stamped {}", entry.timestamp.to_rfc3339());
    println!("Added entry to {}", cli.file.display());

    Ok(())
}
