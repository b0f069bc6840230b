use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use wfd_score::scoring::AlignmentPolicy;

const EXIT_SUCCESS: u8 = 0;
const EXIT_MISMATCH: u8 = 1;
const EXIT_IO: u8 = 2;
const EXIT_CONFIG: u8 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
    Tsv,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive practice loop (default if no subcommand)
    Practice,
    /// Score a single response against a reference sentence
    Score {
        /// The original dictated sentence
        reference: String,
        /// The transcription to score
        response: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Check the scorer against the sample table
    Samples {
        /// YAML list of additional samples (reference, response, expected_score)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "wfd-score")]
#[command(about = "Write-from-dictation scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file (defaults to ~/.config/wfd-score/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Alignment policy, overriding the config file
    #[arg(long, global = true, value_enum)]
    policy: Option<AlignmentPolicy>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Practice);

    // Init writes a config, so it must not require a valid one
    if let Commands::Init = command {
        let stdin = io::stdin();
        return match wfd_score::config::run_init_wizard(stdin.lock(), io::stdout(), cli.config) {
            Ok(_) => ExitCode::from(EXIT_SUCCESS),
            Err(e) => {
                eprintln!("Init failed: {:#}", e);
                ExitCode::from(EXIT_IO)
            }
        };
    }

    let config = match wfd_score::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    if let Err(errors) = wfd_score::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return ExitCode::from(EXIT_CONFIG);
    }

    let scoring = config.effective_scoring();
    let policy = cli.policy.unwrap_or_else(|| scoring.effective_policy());
    let feedback = scoring.effective_feedback();
    let use_colors = !cli.no_color && wfd_score::output::should_use_colors();
    tracing::info!(%policy, "resolved alignment policy");

    match command {
        Commands::Practice => {
            let settings = wfd_score::session::SessionSettings {
                policy,
                feedback,
                use_colors,
            };
            let stdin = io::stdin();
            if let Err(e) = wfd_score::session::run_session(stdin.lock(), io::stdout(), &settings) {
                eprintln!("Session error: {:#}", e);
                return ExitCode::from(EXIT_IO);
            }
        }
        Commands::Score {
            reference,
            response,
            format,
        } => {
            let result = wfd_score::scoring::calculate_score(&reference, &response, policy);
            let rendered = match format {
                OutputFormat::Text => wfd_score::output::format_report(
                    &reference, &response, &result, &feedback, use_colors,
                ),
                OutputFormat::Json => match wfd_score::output::format_json(&result) {
                    Ok(json) => json,
                    Err(e) => {
                        eprintln!("Output error: {:#}", e);
                        return ExitCode::from(EXIT_IO);
                    }
                },
                OutputFormat::Tsv => wfd_score::output::format_tsv(&result),
            };
            println!("{}", rendered);
        }
        Commands::Samples { file } => {
            let mut cases = wfd_score::samples::builtin_samples();
            cases.extend(config.samples);

            if let Some(path) = file {
                let extra = match wfd_score::samples::load_samples(&path) {
                    Ok(extra) => extra,
                    Err(e) => {
                        eprintln!("Samples error: {:#}", e);
                        return ExitCode::from(EXIT_CONFIG);
                    }
                };
                if let Err(errors) = wfd_score::samples::validate_samples(&extra) {
                    eprintln!("Sample file errors:");
                    for error in errors {
                        eprintln!("  - {}", error);
                    }
                    return ExitCode::from(EXIT_CONFIG);
                }
                cases.extend(extra);
            }

            let outcomes = wfd_score::samples::run_samples(&cases, policy);
            println!(
                "{}",
                wfd_score::output::format_sample_report(&outcomes, use_colors)
            );

            if outcomes.iter().any(|o| !o.matches()) {
                return ExitCode::from(EXIT_MISMATCH);
            }
        }
        Commands::Init => unreachable!("handled before config load"),
    }

    ExitCode::from(EXIT_SUCCESS)
}
