mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "docmatch",
    version,
    about = "Check rendered documents against a reference: same fields, same order, same barcode placement"
)]
struct Cli {
    /// Log pipeline progress (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct ProfileArgs {
    /// Predefined profile: default, strict
    #[arg(short, long = "profile", value_name = "NAME", default_value = "default")]
    profile: String,

    /// Custom JSON profile file (takes precedence over --profile)
    #[arg(short, long = "config", value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a document against a reference document
    Validate {
        /// Path to the document to check
        input_file: PathBuf,

        /// Path to the known-good reference document
        #[arg(short, long, value_name = "FILE")]
        reference: PathBuf,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Show the fields and barcodes extracted from one document
    Inspect {
        /// Path to the document
        input_file: PathBuf,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the extracted structure to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Manage and inspect validation profiles
    Profiles {
        #[command(subcommand)]
        action: ProfilesAction,
    },
}

#[derive(Subcommand)]
enum ProfilesAction {
    /// List predefined profiles
    List,
    /// Show the settings of a predefined profile
    Show {
        /// Preset name (e.g., "default")
        preset: String,
    },
    /// Validate a custom profile file
    Validate {
        /// Path to JSON profile file
        file: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Validate {
            input_file,
            reference,
            profile,
            output,
        } => commands::validate::run(
            input_file,
            reference,
            &profile.profile,
            profile.config,
            &output,
        ),
        Commands::Inspect {
            input_file,
            profile,
            output,
            out,
        } => commands::inspect::run(input_file, &profile.profile, profile.config, &output, out)
            .map(|()| true),
        Commands::Profiles { action } => {
            let result = match action {
                ProfilesAction::List => commands::profiles::list(),
                ProfilesAction::Show { preset } => commands::profiles::show(&preset),
                ProfilesAction::Validate { file } => commands::profiles::validate(&file),
            };
            result.map(|()| true)
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        // Structure mismatch: reported already, distinct from a failure to run.
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
