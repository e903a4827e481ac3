//! modelgen CLI - generate data-model source from a live database schema.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use modelgen::{render, Config, Orchestrator};
use tracing::Level;

#[derive(Parser)]
#[command(name = "modelgen")]
#[command(about = "Generate data-model source code from a live database schema")]
#[command(version)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "warn")]
    verbosity: String,

    /// Warn on table-definition text that looks like a foreign key but does
    /// not parse
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Introspect the configured databases and print generated model source
    Generate,

    /// Introspect and dump the normalized schema as JSON
    Dump,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.verbosity);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> modelgen::Result<()> {
    let config = Config::load(&cli.config)?;
    let runs = Orchestrator::new(config).strict(cli.strict).run().await?;

    for run in &runs {
        match cli.command {
            Commands::Generate => {
                println!("// dialect: {}", run.dialect);
                print!("{}", render::render_models(&run.schema));
            }
            Commands::Dump => {
                println!("{}", serde_json::to_string_pretty(&run.schema)?);
            }
        }
    }

    Ok(())
}

fn init_logging(verbosity: &str) {
    let level = match verbosity {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
