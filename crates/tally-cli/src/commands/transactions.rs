use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Args, Subcommand};

use tally_data::{
    Category, Direction, Insert, Query, Transaction, TransactionFilter,
};
use tally_db::Connection;

use crate::formatting::PrintFormatted;

#[derive(Subcommand, Debug)]
pub enum Transactions {
    /// List ledger entries
    #[clap(name = "list")]
    List(ListTransactions),
    /// Append a ledger entry
    #[clap(name = "add")]
    Add(AddTransaction),
}

impl Transactions {
    pub async fn run(self, conn: &Connection) -> Result<()> {
        match self {
            Transactions::List(cmd) => cmd.run(conn).await,
            Transactions::Add(cmd) => cmd.run(conn).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct ListTransactions {
    #[clap(long)]
    pub direction: Option<Direction>,
    #[clap(long)]
    pub category: Option<Category>,
    #[clap(short, long)]
    pub after_date: Option<NaiveDate>,
    #[clap(short, long)]
    pub before_date: Option<NaiveDate>,
}

impl ListTransactions {
    /// Run the command and list ledger entries
    pub async fn run(self, db: &Connection) -> Result<()> {
        let filter = TransactionFilter {
            direction: self.direction,
            category: self.category,
            date_after: self.after_date,
            date_before: self.before_date,
            ..Default::default()
        };

        // An unreadable store counts as an empty ledger.
        let transactions: Vec<Transaction> =
            db.query(&filter).await.unwrap_or_default();
        println!("{} entries.", transactions.len());
        transactions.print_formatted();

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct AddTransaction {
    #[clap(short, long)]
    pub amount: i64,
    #[clap(long, default_value = "expense")]
    pub direction: Direction,
    #[clap(short, long, default_value = "other")]
    pub category: Category,
    #[clap(short, long)]
    pub description: String,
    #[clap(long, default_value = "")]
    pub counterparty: String,
    #[clap(long, default_value = "Tally Bank")]
    pub bank_name: String,
    #[clap(long)]
    pub date: Option<NaiveDateTime>,
}

impl AddTransaction {
    /// Run the command and append a ledger entry
    pub async fn run(self, db: &Connection) -> Result<()> {
        if self.amount < 0 {
            return Err(anyhow!("amount must not be negative"));
        }

        let tx = db
            .insert(Transaction {
                amount: self.amount,
                direction: self.direction,
                category: self.category,
                description: self.description,
                date: self.date.unwrap_or_else(|| Local::now().naive_local()),
                counterparty: self.counterparty,
                bank_name: self.bank_name,
                ..Default::default()
            })
            .await?;

        println!("Added entry {}.", tx.id);
        vec![tx].print_formatted();
        Ok(())
    }
}
