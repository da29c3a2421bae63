use anyhow::Result;
use clap::Args;

use tally_db::{ledger, Connection};
use tally_link::format_amount;
use tally_settle::balance as accounting;

use crate::formatting::PrintFormatted;

#[derive(Args, Debug)]
pub struct Balance {
    /// Opening balance of the account
    #[clap(short, long, default_value_t = 5250)]
    pub starting: i64,
}

impl Balance {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let transactions = ledger::load_ledger(db).await;

        println!(
            "Balance:\t{}",
            format_amount(accounting::balance(self.starting, &transactions))
        );
        println!(
            "Income:\t\t{}",
            format_amount(accounting::total_income(&transactions))
        );
        println!(
            "Expenses:\t{}",
            format_amount(accounting::total_expense(&transactions))
        );

        let summaries = accounting::summarize_by_category(&transactions);
        if !summaries.is_empty() {
            println!();
            summaries.print_formatted();
        }

        Ok(())
    }
}
