use anyhow::Result;
use clap::Args;

use tally_data::{Contact, ContactFilter, Query};
use tally_db::Connection;
use tally_settle::{Recommender, TableRecommender};

#[derive(Args, Debug)]
pub struct Recommend {
    /// Place of the bill, e.g. the merchant name
    #[clap(short, long)]
    pub place: String,
    /// Hour of day, 0..=23
    #[clap(long)]
    pub hour: u32,
    /// Total amount of the bill
    #[clap(short, long)]
    pub amount: i64,
    /// Precomputed recommendation table (JSON)
    #[clap(long, default_value = "recommendations.json")]
    pub data: String,
}

impl Recommend {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let recommender = TableRecommender::from_json_file(&self.data)?;

        let Some(hit) = recommender.recommend(&self.place, self.hour, self.amount)
        else {
            println!("No recommendation.");
            return Ok(());
        };

        println!("{}", hit.explanation);
        for name in &hit.recommended_participants {
            let score = hit
                .confidence_scores
                .get(name)
                .copied()
                .unwrap_or_default();

            // Resolve the name against the address book where possible.
            let known: Vec<Contact> = db
                .query(&ContactFilter {
                    name: Some(name.clone()),
                    ..Default::default()
                })
                .await?;
            match known.first() {
                Some(contact) => println!(
                    "{:<24}\t{:.2}\t{}",
                    name, score, contact.phone
                ),
                None => println!("{:<24}\t{:.2}\t(not in contacts)", name, score),
            }
        }

        Ok(())
    }
}
