use anyhow::Result;
use chrono::Local;
use clap::Args;

use tally_data::{Category, Direction, Insert, Transaction};
use tally_db::{ledger, Connection};
use tally_link::{format_amount, parse_deep_link};
use tally_settle::{balance, Dispatcher, Event};

#[derive(Args, Debug)]
pub struct Receive {
    /// The deep link URL handed over by the web page
    pub url: String,
    #[clap(short, long, default_value = "transfer")]
    pub category: Category,
    #[clap(long, default_value_t = 5250)]
    pub starting: i64,
}

impl Receive {
    pub async fn run(self, db: &Connection) -> Result<()> {
        // A foreign scheme or host is not ours to handle.
        let Some(request) = parse_deep_link(&self.url) else {
            println!("Ignored: not a settlement deep link.");
            return Ok(());
        };

        let dispatcher = Dispatcher::default();
        let mut events = dispatcher.subscribe();

        let tx = db
            .insert(Transaction {
                amount: request.amount,
                direction: Direction::Income,
                category: self.category,
                description: request.sender,
                date: Local::now().naive_local(),
                counterparty: "mobile banking".to_string(),
                bank_name: "Tally Bank".to_string(),
                ..Default::default()
            })
            .await?;
        dispatcher.emit(Event::TransactionAdded(tx));

        // The ledger view reacts to the append by recalculating.
        while let Ok(event) = events.try_recv() {
            if let Event::TransactionAdded(tx) = event {
                println!(
                    "Received {} from {}.",
                    format_amount(tx.amount),
                    tx.description
                );
                let transactions = ledger::load_ledger(db).await;
                println!(
                    "New balance: {}",
                    format_amount(balance(self.starting, &transactions))
                );
            }
        }

        Ok(())
    }
}
