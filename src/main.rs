use clap::{Parser, Subcommand};
use quiz_site::config::{self, PipelineConfig};
use quiz_site::fs::LocalFs;
use quiz_site::{output, pipeline};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quiz-site")]
#[command(about = "Static site generator for JSON quiz collections")]
#[command(long_about = "\
Static site generator for JSON quiz collections

The data directory holds an index document and one JSON file per quiz.
Every valid quiz becomes an HTML page; the index page links to all of them.

Data structure:

  data/
  ├── config.toml          # Site config (optional)
  ├── index.json           # [{\"title\": \"HTML\", \"file\": \"html.json\"}, ...]
  ├── html.json            # {\"title\": \"HTML\", \"questions\": [...]}
  └── css.json

Each question is {\"question\": \"...\", \"answers\": [{\"answer\": \"...\", \"correct\": true}]}.
Malformed answers, questions and quiz files are skipped and logged.

Set RUST_LOG=debug for detailed diagnostics.
Run 'quiz-site gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Data directory containing index.json and the quiz files
    #[arg(long, default_value = "data", global = true)]
    data: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the data and generate the HTML site
    Build,
    /// Validate the data directory without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Command::Build => {
            let site = config::load_config(&LocalFs, &cli.data)?;
            let paths = PipelineConfig::new(&cli.data, &cli.output).with_index_file(&site.index_file);

            println!("==> Building {} → {}", paths.data_root.display(), paths.output_root.display());
            match pipeline::build(&LocalFs, &paths, &site) {
                Ok(report) => {
                    output::print_build_output(&report, &paths.output_root);
                    println!("==> Build complete: {}", paths.output_root.display());
                }
                Err(abort) => {
                    eprintln!("==> Build aborted: {abort}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::Check => {
            let site = config::load_config(&LocalFs, &cli.data)?;
            let paths = PipelineConfig::new(&cli.data, &cli.output).with_index_file(&site.index_file);

            println!("==> Checking {}", paths.data_root.display());
            match pipeline::check(&LocalFs, &paths) {
                Ok(entries) => {
                    output::print_check_output(&entries);
                    println!("==> Data is valid");
                }
                Err(abort) => {
                    eprintln!("==> Check failed: {abort}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default `info` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
