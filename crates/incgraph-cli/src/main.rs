use clap::Parser;

use incgraph::{IncgraphOptions, run_main};

#[derive(Parser, Debug)]
#[command(
    name = "incgraph",
    about = "incgraph: include-dependency graphs as colored DOT",
    version
)]
pub struct Cli {
    /// Configuration file (omitted means an empty configuration)
    #[arg(value_name = "CONFIG")]
    config: Option<String>,

    /// Input directory roots to scan
    #[arg(value_name = "DIR")]
    dirs: Vec<String>,
}

pub fn main() {
    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let args = Cli::parse();
    let opts = IncgraphOptions {
        config: args.config,
        dirs: args.dirs,
    };

    match run_main(&opts) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            std::process::exit(1);
        }
    }
}
