//! Command-line interface for the tic-tac-toe binary.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal, with a running session score.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML settings file (default: ./tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["tictactoe", "-c", "my.toml", "--log-file", "out.log"]);
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("out.log")));
    }
}
