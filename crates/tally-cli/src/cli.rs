
use clap::{Parser, Subcommand};

use crate::commands::{
    Balance,
    Contacts,
    Link,
    Receive,
    Recommend,
    Settle,
    Transactions,
};

#[derive(Parser, Debug)]
#[clap(name = "tally", version=env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[clap(long, env = "TALLY_DB", default_value = "tally.sqlite3")]
    pub db: String,

    #[clap(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn init() -> Self {
        Self::parse()
    }
}


#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage ledger entries
    #[clap(subcommand)]
    Transactions(Transactions),

    /// Manage the address book
    #[clap(subcommand)]
    Contacts(Contacts),

    /// Show the account balance and expense summary
    Balance(Balance),

    /// Split a bill and render the settlement request
    Settle(Settle),

    /// Suggest settlement participants
    Recommend(Recommend),

    /// Handle an incoming settlement deep link
    Receive(Receive),

    /// Encode and decode settlement handoff links
    #[clap(subcommand)]
    Link(Link),
}
