use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteConnection},
    Connection as SqlConnection,
};
use tokio::sync::{Mutex, MutexGuard};

use crate::schema;


/// A thread safe, cloneable connection to the ledger database.
/// Owning the wrapper type here keeps the storage operation trait
/// impls inside this crate.
#[derive(Clone)]
pub struct Connection {
    conn: Arc<Mutex<SqliteConnection>>,
}

impl Connection {
    fn new(conn: SqliteConnection) -> Self {
        Connection {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Lock the underlying sqlite connection.
    pub async fn lock(&self) -> MutexGuard<'_, SqliteConnection> {
        self.conn.lock().await
    }
}


/// Open a connection to the database. The database file is
/// created on first use and the schema install is idempotent.
pub async fn open(filename: &str) -> Result<Connection> {
    let opts = SqliteConnectOptions::from_str(filename)?
        .create_if_missing(true)
        .foreign_keys(true);
    let conn = SqliteConnection::connect_with(&opts).await?;
    let conn = Connection::new(conn);
    schema::install(&conn).await?;
    Ok(conn)
}

pub struct TestHandle {
    filename: String,
}

impl Drop for TestHandle {
    fn drop(&mut self) {
        let path = Path::new(&self.filename);
        if path.exists() {
            fs::remove_file(path).unwrap();
        }
    }
}


/// Open a new test database connection.
/// The database will be created on each open.
pub async fn open_test() -> (TestHandle, Connection) {
    let filename = format!("/tmp/tally_test_{}.sqlite3", rand::random::<u64>());
    let handle = TestHandle {
        filename: filename.clone(),
    };

    let conn = open(&filename).await.unwrap();

    (handle, conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    use tally_data::{Insert, Query, Transaction, TransactionFilter};

    #[tokio::test]
    async fn test_store_operations_on_shared_connection() {
        let (_handle, conn) = open_test().await;

        // Writes through a clone are visible on the original.
        let writer = conn.clone();
        writer
            .insert(Transaction {
                amount: 100,
                ..Default::default()
            })
            .await
            .unwrap();

        let transactions: Vec<Transaction> =
            conn.query(&TransactionFilter::default()).await.unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].amount, 100);
    }
}
