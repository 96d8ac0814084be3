//! Folio CLI
//!
//! Validates the site metadata and exports what the page build needs.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Folio.
#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Site metadata tooling for the Folio blog"
)]
struct Cli {
    /// Path to the site metadata file
    #[arg(short, long, default_value = "site.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Validate metadata and content directories
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
        /// Content root holding one folder per directory page
        #[arg(long, default_value = "content")]
        content: std::path::PathBuf,
    },
    /// Export pipeline metadata and page queries
    Export {
        /// Output directory
        #[arg(short, long, default_value = "public/.folio")]
        output: std::path::PathBuf,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    folio::init_tracing(cli.verbose);

    match cli.command {
        Commands::Check { strict, content } => {
            folio::cmd::check::run(&cli.config, &content, strict)?;
        }
        Commands::Export { output } => {
            folio::cmd::export::run(&cli.config, &output)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["folio", "check"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Check { strict, content } => {
                assert!(!strict);
                assert_eq!(content, std::path::PathBuf::from("content"));
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_check_strict() {
        let args = ["folio", "check", "--strict", "--content", "posts"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Check { strict, content } => {
                assert!(strict);
                assert_eq!(content, std::path::PathBuf::from("posts"));
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_export_command_parsing() {
        let args = ["folio", "export", "-o", "dist/meta"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Export { output } => {
                assert_eq!(output, std::path::PathBuf::from("dist/meta"));
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_cli_global_options() {
        let args = ["folio", "-c", "custom.toml", "-vvv", "export"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("custom.toml"));
        assert_eq!(cli.verbose, 3);
        assert!(matches!(cli.command, Commands::Export { .. }));
    }
}
