use tally_data::{Query, Transaction, TransactionFilter};

use crate::Connection;

/// Load the full ledger, most recent entry first.
///
/// A store that cannot be read or decoded is treated as an empty
/// ledger; display paths never surface a storage fault.
pub async fn load_ledger(db: &Connection) -> Vec<Transaction> {
    db.query(&TransactionFilter::default())
        .await
        .unwrap_or_default()
}
