
pub mod connection;
pub use connection::Connection;

pub mod results;
pub mod schema;

pub mod contacts;
pub mod ledger;
pub mod transactions;
