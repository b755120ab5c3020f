//! nightswitch - persisted night-mode switch for the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use nightswitch::{HeadlessCommand, Options};
use nightswitch_core::prelude::*;

/// nightswitch - persisted night-mode switch for the terminal
#[derive(Parser, Debug)]
#[command(name = "nightswitch")]
#[command(about = "Toggle and persist a light/dark night-mode preference", long_about = None)]
struct Args {
    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to the preference file
    #[arg(long, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Run a single command and print JSON instead of opening the TUI
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Print the persisted night-mode state
    Status,
    /// Flip night mode and persist it
    Toggle,
    /// Turn night mode on or off
    Set {
        #[arg(value_enum)]
        value: Switch,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Switch {
    On,
    Off,
}

impl From<Command> for HeadlessCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Status => HeadlessCommand::Status,
            Command::Toggle => HeadlessCommand::Toggle,
            Command::Set { value } => HeadlessCommand::Set(value == Switch::On),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let options = Options {
        config: args.config,
        store: args.store,
        log_dir: args.log_dir,
    };

    match args.command {
        None => nightswitch::run(&options).await,
        Some(command) => {
            let event = nightswitch::run_headless(&options, command.into())?;
            if !event.persisted() {
                eprintln!("Night mode changed for this run only; the preference was not saved.");
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
