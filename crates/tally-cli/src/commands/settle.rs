use anyhow::Result;
use clap::Args;

use tally_data::{Contact, Retrieve};
use tally_db::Connection;
use tally_link::format_amount;
use tally_settle::{
    RemainderPolicy, SettlementRequest, StaticRegistry, UserRegistry,
};

use crate::formatting::PrintFormatted;

#[derive(Args, Debug)]
pub struct Settle {
    /// Total amount of the bill
    #[clap(short, long)]
    pub total: i64,
    /// Contact ids of the other participants
    #[clap(short = 'w', long = "with", required = true)]
    pub with: Vec<u32>,
    /// Display name of the requester
    #[clap(long, default_value = "Me")]
    pub requester: String,
    /// What happens to the division remainder
    #[clap(long, default_value_t = RemainderPolicy::default())]
    pub policy: RemainderPolicy,
    /// Base URL of the web handoff page
    #[clap(long, default_value = "https://tally.example/settle")]
    pub link_base: String,
    /// Names of contacts registered with the app; they get an
    /// in-app notification instead of a text message
    #[clap(long)]
    pub registered: Vec<String>,
}

impl Settle {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let requester = Contact {
            id: 0,
            name: self.requester.clone(),
            phone: String::new(),
        };

        let mut participants = vec![requester.clone()];
        for id in &self.with {
            let contact: Contact = db.retrieve(*id).await?;
            participants.push(contact);
        }

        let request = SettlementRequest::new(self.total, participants)?;
        if !request.split().is_displayable() {
            println!("Nothing to split.");
            return Ok(());
        }

        request.split().print_formatted();
        if let Some(note) = request.remainder_note(self.policy) {
            println!("{}", note);
        }

        // Per-person amounts under the chosen remainder policy.
        let amounts = request.split().allocate(self.policy);
        println!();
        for (contact, amount) in request.participants.iter().zip(&amounts) {
            println!("{:<24}\t{:>12}", contact.name, format_amount(*amount));
        }

        println!();
        println!("{}", request.render_message(&requester, &self.link_base));

        let registry = StaticRegistry::new(self.registered.clone());
        println!();
        for contact in request.recipients(&requester) {
            if registry.is_registered(contact) {
                println!("notify in-app:\t{}", contact.name);
            } else {
                println!("send text to:\t{} ({})", contact.name, contact.phone);
            }
        }

        Ok(())
    }
}
