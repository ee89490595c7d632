//! Command-line interface definition

use agora_domain::Role;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "agoravote",
    about = "Live binary voting rooms with quotas, archives, and outcome forecasts",
    version
)]
pub struct Cli {
    /// Acting user id (stands in for the authenticated identity)
    #[arg(short, long, global = true, default_value = "local-admin")]
    pub user: String,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Document store file (overrides config)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum RoleArg {
    Admin,
    Joinee,
    Developer,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Admin => Role::Admin,
            RoleArg::Joinee => Role::Joinee,
            RoleArg::Developer => Role::Developer,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Register the acting user's profile
    Register {
        #[arg(long, value_enum, default_value = "joinee")]
        role: RoleArg,
    },
    /// Create a voting room (consumes one session start)
    CreateRoom,
    /// List rooms owned by the acting user
    Rooms,
    /// Find a room by its join code
    Join { code: String },
    /// Cast the acting user's vote
    Cast { room: String, option: String },
    /// Show the live tally, cumulative series, and participants
    Results { room: String },
    /// Open or close voting
    Toggle { room: String },
    /// Edit the room's topic and lecture time
    SetDetails {
        room: String,
        #[arg(long)]
        topic: Option<String>,
        #[arg(long)]
        lecture_time: Option<String>,
    },
    /// Announce the winner from the current tally
    Announce { room: String },
    /// Archive all votes and start a new session (consumes one session start)
    Reset { room: String },
    /// Remove a participant's vote
    RemoveVote { room: String, voter: String },
    /// Delete a room, cascading to its votes
    DeleteRoom { room: String },
    /// Reset the acting user's daily session-start count
    Refill,
    /// Forecast the final outcome probabilities
    Predict { room: String },
}
