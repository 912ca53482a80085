use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use debate_features::scoring::{validate_scoring, FeatureVersions, ScoringConfig};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    /// Aligned table
    #[default]
    Table,
    /// Tab-separated values
    Tsv,
    /// Pretty-printed JSON
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score rounds on distance, interval, order and rally
    Score {
        /// Round JSON files or directories of them
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write results to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Override the distance algorithm version
        #[arg(long, value_name = "N")]
        distance_version: Option<u8>,

        /// Override the interval algorithm version
        #[arg(long, value_name = "N")]
        interval_version: Option<u8>,

        /// Override the order algorithm version
        #[arg(long, value_name = "N")]
        order_version: Option<u8>,

        /// Override the rally algorithm version
        #[arg(long, value_name = "N")]
        rally_version: Option<u8>,
    },
    /// Print structural counts for each round
    Summary {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Validate the config file and print the effective versions
    CheckConfig,
}

#[derive(Parser, Debug)]
#[command(name = "debate-features")]
#[command(about = "Macro-structural rebuttal features for debate rounds", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/debate-features/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Validate a scoring config, printing every error, and resolve its versions.
fn resolve_versions(scoring: &ScoringConfig) -> Result<FeatureVersions, i32> {
    validate_scoring(scoring).map_err(|errors| {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        EXIT_CONFIG
    })
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    let config = match debate_features::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    debate_features::logging::init_logging(cli.verbose, config.log_level.as_deref());

    let effective_scoring = config.scoring.clone().unwrap_or_default();

    match cli.command {
        Commands::Score {
            paths,
            format,
            output,
            distance_version,
            interval_version,
            order_version,
            rally_version,
        } => {
            let scoring = effective_scoring.with_overrides(
                distance_version,
                interval_version,
                order_version,
                rally_version,
            );
            let versions = match resolve_versions(&scoring) {
                Ok(v) => v,
                Err(code) => std::process::exit(code),
            };

            let rounds = match debate_features::batch::load_all(&paths) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Input error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let scored = debate_features::batch::score_rounds(&rounds, &versions);

            let use_colors = output.is_none() && debate_features::output::should_use_colors();
            let rendered = match format {
                OutputFormat::Table => {
                    debate_features::output::format_features_table(&scored, use_colors)
                }
                OutputFormat::Tsv => debate_features::output::format_tsv(&scored),
                OutputFormat::Json => match debate_features::output::format_json(&scored) {
                    Ok(json) => json,
                    Err(e) => {
                        eprintln!("Output error: {:#}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                },
            };

            match output {
                Some(path) => {
                    if let Err(e) = debate_features::output::write_output(&path, &rendered) {
                        eprintln!("Output error: {:#}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                    if cli.verbose {
                        eprintln!("Wrote {} rounds to {}", scored.len(), path.display());
                    }
                }
                None => println!("{}", rendered),
            }

            if scored.iter().any(|s| s.incomplete) {
                eprintln!("* some features fell back to their absent value (run with --verbose for details)");
            }

            if cli.verbose {
                eprintln!("Total: {} rounds in {:?}", scored.len(), start_time.elapsed());
            }
        }
        Commands::Summary { paths } => {
            let rounds = match debate_features::batch::load_all(&paths) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Input error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };
            let use_colors = debate_features::output::should_use_colors();
            println!("{}", debate_features::output::format_summary(&rounds, use_colors));
        }
        Commands::CheckConfig => {
            let versions = match resolve_versions(&effective_scoring) {
                Ok(v) => v,
                Err(code) => std::process::exit(code),
            };
            println!("Config OK");
            for (feature, number) in versions.numbers() {
                println!("  {}: version {}", feature, number);
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
