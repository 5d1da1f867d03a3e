pub mod demo;
pub mod report;
pub mod roster;
pub mod types;

use clap::{ArgAction, Parser, Subcommand};
use kennel_common::roster::Entry;

#[derive(Parser)]
#[command(name = "kennel")]
#[command(about = "Keeps track of owners and their pets.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Refuse to move a pet away from an owner it already has
    #[arg(long, global = true)]
    pub no_reassign: bool,

    /// Reduce output (-q hides headers, -qq only prints summaries)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Show kennel bookkeeping (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the pet types a kennel accepts
    #[command(alias = "t")]
    Types,
    /// Run the John and Alice walkthrough
    #[command(alias = "d")]
    Demo,
    /// Build a kennel from entries like `Buddy:dog`, `Fluffy:cat@John` or `Buddy@John`
    #[command(alias = "r")]
    Roster {
        #[arg(required = true)]
        entries: Vec<Entry>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
