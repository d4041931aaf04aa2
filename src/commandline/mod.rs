use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(about = "A lexical analyzer driven by a deterministic finite automaton")]
pub struct Options {
    #[command(subcommand)]
    pub operation: Operation,
    /// Increase logging verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Silence all log output
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Subcommand)]
pub enum Operation {
    /// Print the token stream of a file
    Tokens {
        file: PathBuf,
        /// Keep lexing after an error and report every error at the end
        #[arg(short, long)]
        keep_going: bool,
    },
    /// Check a file for lexical errors
    Check { file: PathBuf },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn options_are_well_formed() {
        Options::command().debug_assert();
    }

    #[test]
    fn parses_tokens_subcommand() {
        let options =
            Options::parse_from(["afdlex", "-vv", "tokens", "--keep-going", "prog.txt"]);

        assert_eq!(options.verbose, 2);
        match options.operation {
            Operation::Tokens { file, keep_going } => {
                assert_eq!(file, PathBuf::from("prog.txt"));
                assert!(keep_going);
            }
            other => panic!("Unexpected operation {:?}", other),
        }
    }
}
