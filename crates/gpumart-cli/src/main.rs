//! # gpumart CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gpumart_cli::compare::{run_cards, run_radar, CompareArgs};
use gpumart_cli::input::load_normalizer;
use gpumart_cli::listings::{run_listings, ListingsArgs};

/// GPU marketplace CLI.
///
/// Compares a listed GPU's benchmark against peer averages and filters
/// listing exports.
#[derive(Parser, Debug)]
#[command(name = "gpumart", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a normalizer configuration YAML file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score the six radar axes and fit the chart domain.
    Radar(CompareArgs),

    /// Build the per-metric delta cards.
    Cards(CompareArgs),

    /// Filter and sort a listings export.
    Listings(ListingsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("gpumart CLI starting");

    let result = match cli.command {
        Commands::Radar(args) => {
            load_normalizer(cli.config.as_deref()).and_then(|n| run_radar(&args, &n))
        }
        Commands::Cards(args) => {
            load_normalizer(cli.config.as_deref()).and_then(|n| run_cards(&args, &n))
        }
        Commands::Listings(args) => run_listings(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpumart_cli::listings::SortArg;

    #[test]
    fn cli_parse_radar() {
        let cli = Cli::try_parse_from(["gpumart", "radar", "listing-42.json"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
        if let Commands::Radar(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("listing-42.json"));
            assert!(!args.compact);
        } else {
            panic!("expected radar subcommand");
        }
    }

    #[test]
    fn cli_parse_cards_with_global_flags() {
        let cli = Cli::try_parse_from([
            "gpumart",
            "cards",
            "listing.yaml",
            "--compact",
            "--config",
            "normalizer.yaml",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("normalizer.yaml")));
        assert!(matches!(cli.command, Commands::Cards(ref args) if args.compact));
    }

    #[test]
    fn cli_parse_global_flags_before_subcommand() {
        let cli =
            Cli::try_parse_from(["gpumart", "-v", "--config", "n.yaml", "radar", "in.json"])
                .unwrap();
        assert_eq!(cli.verbose, 1);
        assert_eq!(cli.config, Some(PathBuf::from("n.yaml")));
    }

    #[test]
    fn cli_parse_listings_defaults() {
        let cli = Cli::try_parse_from(["gpumart", "listings", "export.json"]).unwrap();
        if let Commands::Listings(args) = cli.command {
            assert_eq!(args.sort, SortArg::Newest);
            assert!(args.min_price.is_none());
            assert!(args.max_price.is_none());
            assert!(args.vram.is_none());
            assert!(!args.include_inactive);
        } else {
            panic!("expected listings subcommand");
        }
    }

    #[test]
    fn cli_parse_listings_filters() {
        let cli = Cli::try_parse_from([
            "gpumart",
            "listings",
            "export.json",
            "--min-price",
            "2.5",
            "--max-price",
            "10",
            "--vram",
            "24",
            "--location",
            "Berlin",
            "-q",
            "4090",
            "--include-inactive",
            "--sort",
            "price-asc",
        ])
        .unwrap();
        if let Commands::Listings(args) = cli.command {
            assert_eq!(args.min_price, Some(2.5));
            assert_eq!(args.max_price, Some(10.0));
            assert_eq!(args.vram, Some(24));
            assert_eq!(args.location.as_deref(), Some("Berlin"));
            assert_eq!(args.query.as_deref(), Some("4090"));
            assert!(args.include_inactive);
            assert_eq!(args.sort, SortArg::PriceAsc);
            assert_eq!(
                gpumart_core::SortOrder::from(args.sort),
                gpumart_core::SortOrder::PriceAsc
            );
        } else {
            panic!("expected listings subcommand");
        }
    }

    #[test]
    fn cli_parse_rejects_unknown_sort() {
        let result = Cli::try_parse_from(["gpumart", "listings", "x.json", "--sort", "cheapest"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["gpumart"]).is_err());
    }
}
