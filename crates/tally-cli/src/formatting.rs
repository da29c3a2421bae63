use tally_data::{Contact, Direction, Transaction};
use tally_link::format_amount;
use tally_settle::{CategorySummary, Split};

pub trait PrintFormatted {
    fn print_formatted(&self);
}

/// Signed display amount, e.g. `-8,900` / `+50,000`.
pub fn display_amount(tx: &Transaction) -> String {
    let sign = match tx.direction {
        Direction::Expense => '-',
        Direction::Income => '+',
    };
    format!("{}{}", sign, format_amount(tx.amount))
}

impl PrintFormatted for Vec<Transaction> {
    fn print_formatted(&self) {
        println!(
            "{:>4}\t{:<16}\t{:>12}\t{:<10}\t{:<24}\t{:<18}\t{}",
            "ID", "Date", "Amount", "Category", "Description", "Counterparty", "Bank"
        );
        println!("{:-<110}", "-");
        for tx in self {
            println!(
                "{:>4}\t{:<16}\t{:>12}\t{:<10}\t{:<24}\t{:<18}\t{}",
                tx.id,
                tx.date.format("%Y-%m-%d %H:%M"),
                display_amount(tx),
                tx.category.to_string(),
                tx.description,
                tx.counterparty,
                tx.bank_name,
            );
        }
    }
}

impl PrintFormatted for Contact {
    fn print_formatted(&self) {
        println!("{:>4}\t{:<24}\t{}", self.id, self.name, self.phone);
    }
}

impl PrintFormatted for Vec<Contact> {
    fn print_formatted(&self) {
        println!("{:>4}\t{:<24}\t{}", "ID", "Name", "Phone");
        println!("{:-<50}", "-");
        for contact in self {
            contact.print_formatted();
        }
    }
}

impl PrintFormatted for Split {
    fn print_formatted(&self) {
        println!("Total:\t\t{}", format_amount(self.total));
        println!("Participants:\t{}", self.participants);
        println!("Per person:\t{}", format_amount(self.share));
        if self.remainder > 0 {
            println!("Remainder:\t{}", format_amount(self.remainder));
        }
    }
}

impl PrintFormatted for Vec<CategorySummary> {
    fn print_formatted(&self) {
        for summary in self {
            println!(
                "{:<10}\t{:>12}\t{:>5.1}%",
                summary.category.to_string(),
                format_amount(summary.total),
                summary.percentage,
            );
        }
    }
}
