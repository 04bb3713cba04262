//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic Tac Toe - two players, one board
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Replay a sequence of cell clicks and print the result
    Replay {
        /// Cell indices 0-8, comma separated (e.g. 0,3,1,4,2)
        #[arg(short, long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
    }

    #[test]
    fn test_replay_moves() {
        let cli = Cli::parse_from(["tictactoe", "replay", "--moves", "0,3,1", "--json"]);
        match cli.command {
            Some(Command::Replay { moves, json }) => {
                assert_eq!(moves, vec![0, 3, 1]);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
