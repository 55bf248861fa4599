//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use dco_validator::output::OutputMode;

/// dco-validator - Sign-off and GPG checks for pull-request commits
#[derive(Parser, Debug)]
#[command(
    name = "dco-validator",
    version,
    about = "Sign-off and GPG checks for pull-request commits",
    long_about = "Validate that every pull-request commit carries a Signed-off-by trailer\n\
                  matching its author, and optionally that GitHub verified its signature.\n\n\
                  The verdict is reported as a check run on the pull-request head."
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the pull request of the current workflow run and report it
    Run {
        /// Config file (defaults to ./dco-validator.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the verdict without reporting a check run
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate a local JSON list of commits (GitHub commit listing format)
    Check {
        /// Path to the commits JSON file
        commits: PathBuf,

        /// Also require GPG verification
        #[arg(long)]
        gpg: bool,

        /// Branch to attach the verdict to
        #[arg(long, default_value = "")]
        branch: String,

        /// Head commit to attach the verdict to
        #[arg(long, default_value = "")]
        sha: String,

        /// Repository as owner/repo
        #[arg(long)]
        repo: Option<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Run { config, dry_run }) => {
            commands::run(config.as_deref(), dry_run, output_mode)
        },
        Some(Command::Check {
            commits,
            gpg,
            branch,
            sha,
            repo,
        }) => commands::check(&commits, gpg, branch, sha, repo.as_deref(), output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": dco_validator::VERSION
                    })
                );
            } else {
                println!("dco-validator v{}", dco_validator::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": dco_validator::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("dco-validator v{}", dco_validator::VERSION);
                println!("\nRun 'dco-validator --help' for usage");
                println!("Run 'dco-validator run' inside a pull_request workflow");
            }
            Ok(())
        },
    }
}
