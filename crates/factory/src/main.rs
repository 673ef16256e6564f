//! Content Factory CLI - inspect and validate project configuration.

use anyhow::Result;
use clap::{Parser, Subcommand};
use factory_config::{ConfigError, ConfigLoader, ROOT_ENV_VAR};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error_conversion;

#[derive(Parser)]
#[command(name = "factory")]
#[command(version)]
#[command(about = "Content Factory configuration tool", long_about = None)]
struct Cli {
    /// Repository root holding config/ and projects/
    #[arg(long, global = true, env = ROOT_ENV_VAR, default_value = ".")]
    root: PathBuf,

    /// Log debug output from the loader and parser
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate a project's configuration
    Check {
        /// Project directory name under projects/
        project: String,

        /// Print the result, or the error diagnostic, as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Print a project's merged configuration
    Show {
        /// Project directory name under projects/
        project: String,

        /// Only print this top-level section
        #[arg(long)]
        section: Option<String>,

        /// Print JSON instead of dotted key listing
        #[arg(long)]
        json: bool,
    },

    /// Print one value by dotted path, e.g. `audio.engines.edge-tts.voice`
    Get {
        /// Project directory name under projects/
        project: String,

        /// Dotted key path
        path: String,
    },

    /// Parse a single document and print its tree as JSON
    Parse {
        /// Document to parse
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "factory=debug" } else { "factory=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let json_errors = matches!(cli.command, Commands::Check { json: true, .. });
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report(&error, json_errors);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    tracing::debug!(root = %cli.root.display(), "using repository root");
    let loader = ConfigLoader::new(&cli.root);
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Check { project, json } => commands::check::execute(&loader, &project, json, &mut out),
        Commands::Show {
            project,
            section,
            json,
        } => commands::show::execute(
            &loader,
            commands::show::ShowArgs {
                project,
                section,
                json,
            },
            &mut out,
        ),
        Commands::Get { project, path } => commands::get::execute(&loader, &project, &path, &mut out),
        Commands::Parse { file } => commands::parse::execute(&file, &mut out),
    }
}

/// Print an error to stderr, as a diagnostic when it came from the config layer.
///
/// With `json`, the diagnostic goes to stdout as JSON instead.
fn report(error: &anyhow::Error, json: bool) {
    if json {
        let value = match error.downcast_ref::<ConfigError>() {
            Some(config_error) => error_conversion::config_error_to_diagnostic(config_error).to_json(),
            None => serde_json::json!({ "kind": "error", "title": format!("{error:#}") }),
        };
        println!("{value:#}");
        return;
    }

    match error.downcast_ref::<ConfigError>() {
        Some(config_error) => {
            let diagnostic = error_conversion::config_error_to_diagnostic(config_error);
            let source = diagnostic
                .location
                .as_ref()
                .and_then(|location| std::fs::read_to_string(&location.file).ok());
            eprint!("{}", diagnostic.to_text(source.as_deref()));
        }
        None => eprintln!("Error: {error:#}"),
    }
}
