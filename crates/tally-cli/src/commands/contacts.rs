use anyhow::Result;
use clap::{Args, Subcommand};
use inquire::Confirm;

use tally_data::{Contact, ContactFilter, Delete, Insert, Query, Retrieve};
use tally_db::Connection;

use crate::formatting::PrintFormatted;

#[derive(Subcommand, Debug)]
pub enum Contacts {
    /// List contacts
    #[clap(name = "list")]
    List(ListContacts),
    /// Add a contact
    #[clap(name = "add")]
    Add(AddContact),
    /// Delete a contact
    #[clap(name = "delete")]
    Delete(DeleteContact),
}

impl Contacts {
    pub async fn run(self, conn: &Connection) -> Result<()> {
        match self {
            Contacts::List(cmd) => cmd.run(conn).await,
            Contacts::Add(cmd) => cmd.run(conn).await,
            Contacts::Delete(cmd) => cmd.run(conn).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct ListContacts {
    #[clap(short, long)]
    pub name: Option<String>,
    #[clap(short, long)]
    pub phone: Option<String>,
}

impl ListContacts {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let filter = ContactFilter {
            name: self.name,
            phone: self.phone,
            ..Default::default()
        };

        let contacts: Vec<Contact> = db.query(&filter).await?;
        println!("{} contacts.", contacts.len());
        contacts.print_formatted();

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct AddContact {
    #[clap(short, long)]
    pub name: String,
    #[clap(short, long, default_value = "")]
    pub phone: String,
}

impl AddContact {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let contact = db
            .insert(Contact {
                name: self.name,
                phone: self.phone,
                ..Default::default()
            })
            .await?;
        contact.print_formatted();
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct DeleteContact {
    #[clap(short, long)]
    pub id: u32,
}

impl DeleteContact {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let contact: Contact = db.retrieve(self.id).await?;

        let ok = Confirm::new(&format!("Delete contact {}?", contact.name))
            .prompt()?;
        if !ok {
            return Ok(());
        }

        db.delete(contact).await?;
        println!("Contact deleted.");
        Ok(())
    }
}
