use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kustomize_yaml_helper::config::Config;
use kustomize_yaml_helper::document::Position;
use kustomize_yaml_helper::input::InputSource;
use kustomize_yaml_helper::query::{run, Action, Query};

/// kustomize-yaml-helper - inspect a kustomization file
#[derive(Parser)]
#[command(name = "kustomize-yaml-helper")]
#[command(version)]
#[command(about = "Inspect the YAML node at a line and column", long_about = None)]
struct Cli {
    /// Path to input file
    #[arg(short, long)]
    file: Option<String>,

    /// Input file name; the actual content is read from stdin
    #[arg(short, long)]
    stdin: Option<String>,

    /// Inspect YAML at the given line (1-based)
    #[arg(short, long)]
    line: usize,

    /// Inspect YAML at the given column (1-based)
    #[arg(short, long, visible_alias = "column")]
    col: usize,

    /// Action to perform on the node found
    #[arg(short, long, value_enum)]
    action: Action,
}

/// Installs a stderr logger. `RUST_LOG` wins over the configured level.
fn init_logging(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load();
    init_logging(&config);

    let source = InputSource::from_flags(cli.file, cli.stdin)?;
    let (content, source_name) = source.read().context("failed to read input")?;

    let query = Query::new(Position::new(cli.line, cli.col), cli.action);
    let output = run(&content, &source_name, &query)?;

    println!("{}", output);
    Ok(())
}
