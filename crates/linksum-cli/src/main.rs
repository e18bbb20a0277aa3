//! Linksum CLI - summarize a web page from the command line

use clap::Parser;
use linksum::{ModelConfig, OpenAiBackend, SummarizeFlow, DEFAULT_MODEL};
use tracing_subscriber::EnvFilter;

/// Linksum - LLM-backed web page summarization
///
/// Requires the OPENAI_API_KEY environment variable.
#[derive(Parser, Debug)]
#[command(name = "linksum")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URL to summarize
    url: String,

    /// Model identifier
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// OpenAI-compatible API base URL
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() {
    // Debug by default; RUST_LOG overrides
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let cli = Cli::parse();

    let mut backend = OpenAiBackend::from_env();
    if let Some(base_url) = cli.base_url {
        backend = backend.with_base_url(base_url);
    }

    let flow = SummarizeFlow::new(Box::new(backend)).with_config(ModelConfig::new(cli.model));

    match flow.run(&cli.url).await {
        Ok(summary) => println!("{summary}"),
        Err(e) => {
            eprintln!("Error: {e}");
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            std::process::exit(1);
        }
    }
}
