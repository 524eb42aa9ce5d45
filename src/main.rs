mod classify;
mod error;
mod grammar;
mod hal;
mod ops;
mod pipeline;
mod tokenize;

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use classify::SubprocessClassifier;
use pipeline::SourceInput;
use tokenize::SubprocessTokenizer;

#[derive(Parser)]
#[command(
    name = "halc",
    about = "Halstead complexity estimates for source files and inline code"
)]
struct Cli {
    /// Source file to analyze
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Inline source code to analyze instead of a file
    #[arg(short, long)]
    source: Option<String>,

    /// Grammar scope suffix (e.g. ".python"); skips language detection
    #[arg(short, long)]
    grammar: Option<String>,

    /// Emit metrics as JSON
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_default();

    tracing_subscriber::registry()
        .with(fmt::layer().with_filter(EnvFilter::from_str(&env_filter).unwrap_or_default()))
        .init();
}

fn run(cli: Cli) -> Result<(), error::AnalysisError> {
    let input = SourceInput::new(cli.file, cli.source)?;
    let tokenizer = SubprocessTokenizer::default();
    let classifier = SubprocessClassifier::default();

    let metrics = pipeline::analyze(&input, cli.grammar.as_deref(), &tokenizer, &classifier)?;

    if cli.json {
        hal::report::print_json(&metrics)?;
    } else {
        hal::report::print_report(&metrics);
    }
    Ok(())
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
