use anyhow::Result;
use clap::{Args, Subcommand};

use tally_link::{
    encode_deep_link, format_amount, parse_deep_link, parse_query, web_url,
    TransferRequest,
};

#[derive(Subcommand, Debug)]
pub enum Link {
    /// Encode a settlement handoff link
    Encode(EncodeLink),
    /// Decode a settlement handoff link
    Decode(DecodeLink),
}

impl Link {
    pub fn run(self) -> Result<()> {
        match self {
            Link::Encode(cmd) => cmd.run(),
            Link::Decode(cmd) => cmd.run(),
        }
    }
}

#[derive(Args, Debug)]
pub struct EncodeLink {
    #[clap(short, long)]
    pub amount: i64,
    #[clap(short, long)]
    pub sender: String,
    /// Also print the web page URL for this handoff
    #[clap(long)]
    pub web_base: Option<String>,
}

impl EncodeLink {
    pub fn run(self) -> Result<()> {
        let request = TransferRequest::new(self.amount, &self.sender);
        println!("{}", encode_deep_link(&request));
        if let Some(base) = self.web_base {
            println!("{}", web_url(&base, &request));
        }
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct DecodeLink {
    /// A deep link, or with --query a bare query string
    pub input: String,
    /// Treat the input as a web query string
    #[clap(long)]
    pub query: bool,
}

impl DecodeLink {
    pub fn run(self) -> Result<()> {
        let request = if self.query {
            parse_query(&self.input)
        } else {
            match parse_deep_link(&self.input) {
                Some(request) => request,
                None => {
                    println!("Ignored: not a settlement deep link.");
                    return Ok(());
                }
            }
        };

        println!("Sender:\t{}", request.sender);
        println!("Amount:\t{}", format_amount(request.amount));
        Ok(())
    }
}
