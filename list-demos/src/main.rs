use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod contacts;
mod doubly;
mod friends;
mod input;
mod logging;

#[derive(Parser, Debug)]
#[command(version, about = "Linked list exercises")]
struct Cli {
    /// Log level used when LISTS_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Scripted demo of the friend list sorted by message count
    Friends,
    /// Scripted run of the generic list: insert, remove, teardown
    Generic,
    /// Interactive menu over a doubly linked list of integers
    Doubly {
        /// Values inserted at the end before the menu starts
        #[arg(long, value_delimiter = ',', default_values_t = [10, 20, 30])]
        seed: Vec<i32>,
    },
    /// Interactive menu over a generic list of contacts
    Contacts,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Friends => friends::run(&mut out)?,
        Command::Generic => contacts::scenario(&mut out)?,
        Command::Doubly { seed } => {
            let mut input = input::Terminal::new()?;
            doubly::run(&seed, &mut input, &mut out)?;
        }
        Command::Contacts => {
            let mut input = input::Terminal::new()?;
            contacts::run(&mut input, &mut out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["list-demos", "doubly"]).unwrap();
        assert_eq!(cli.log_level, "warn");
        assert_eq!(
            cli.command,
            Command::Doubly {
                seed: vec![10, 20, 30]
            }
        );
    }

    #[test]
    fn parse_seed_and_level() {
        let cli =
            Cli::try_parse_from(["list-demos", "--log-level", "debug", "doubly", "--seed", "1,2"])
                .unwrap();
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.command, Command::Doubly { seed: vec![1, 2] });
    }

    #[test]
    fn parse_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["list-demos", "triply"]).is_err());
    }
}
