use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sipa",
    about = "Create new sipa web projects from the bundled template",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new project in the current directory
    #[command(visible_alias = "n")]
    New,
}
