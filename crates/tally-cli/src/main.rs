
use anyhow::Result;

use tally_db::connection;

use tally_cli::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::init();
    let db = cli.db;

    match cli.command {
        // Link encoding and decoding never touches the store.
        Command::Link(cmd) => cmd.run(),
        Command::Transactions(cmd) => cmd.run(&connection::open(&db).await?).await,
        Command::Contacts(cmd) => cmd.run(&connection::open(&db).await?).await,
        Command::Balance(cmd) => cmd.run(&connection::open(&db).await?).await,
        Command::Settle(cmd) => cmd.run(&connection::open(&db).await?).await,
        Command::Recommend(cmd) => cmd.run(&connection::open(&db).await?).await,
        Command::Receive(cmd) => cmd.run(&connection::open(&db).await?).await,
    }?;

    Ok(())
}
