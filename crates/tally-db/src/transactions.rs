use anyhow::Result;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};

use tally_data::{Insert, Query, Retrieve, Transaction, TransactionFilter};

use crate::{
    results::{Id, QueryError},
    Connection,
};


#[async_trait]
impl Query<Transaction> for Connection {
    type Filter = TransactionFilter;

    async fn query(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        let mut conn = self.lock().await;
        let mut qry = QueryBuilder::<Sqlite>::new(
            r#"
            SELECT
                id,
                amount,
                direction,
                category,
                description,
                date,
                counterparty,
                bank_name
            FROM transactions
            WHERE 1
            "#,
        );
        if let Some(id) = filter.id {
            qry.push(" AND id = ").push_bind(id);
        }
        if let Some(direction) = filter.direction {
            qry.push(" AND direction = ").push_bind(direction);
        }
        if let Some(category) = filter.category {
            qry.push(" AND category = ").push_bind(category);
        }
        if let Some(description) = filter.description.clone() {
            qry.push(" AND description = ").push_bind(description);
        }
        if let Some(date_before) = filter.date_before {
            qry.push(" AND date(date) <= ").push_bind(date_before);
        }
        if let Some(date_after) = filter.date_after {
            qry.push(" AND date(date) >= ").push_bind(date_after);
        }
        qry.push(" ORDER BY date DESC, id DESC ");

        let transactions: Vec<Transaction> =
            qry.build_query_as().fetch_all(&mut *conn).await?;
        Ok(transactions)
    }
}

#[async_trait]
impl Retrieve<Transaction> for Connection {
    type Key = u32;

    async fn retrieve(&self, key: u32) -> Result<Transaction> {
        let filter = TransactionFilter {
            id: Some(key),
            ..Default::default()
        };
        let transaction: Transaction = self
            .query(&filter)
            .await?
            .pop()
            .ok_or(QueryError::NotFound)?;
        Ok(transaction)
    }
}

#[async_trait]
impl Insert<Transaction> for Connection {
    async fn insert(&self, transaction: Transaction) -> Result<Transaction> {
        let insert: Id<u32> = {
            let mut conn = self.lock().await;
            let mut qry = QueryBuilder::<Sqlite>::new(
                r#"INSERT INTO transactions (
                    amount,
                    direction,
                    category,
                    description,
                    date,
                    counterparty,
                    bank_name
                ) VALUES (
                "#,
            );
            qry.separated(", ")
                .push_bind(transaction.amount)
                .push_bind(transaction.direction)
                .push_bind(transaction.category)
                .push_bind(&transaction.description)
                .push_bind(transaction.date)
                .push_bind(&transaction.counterparty)
                .push_bind(&transaction.bank_name);

            qry.push(") RETURNING id ")
                .build_query_as()
                .fetch_one(&mut *conn)
                .await?
        };
        self.retrieve(insert.id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::connection;

    use tally_data::{Category, Direction};

    fn entry(amount: i64, day: u32) -> Transaction {
        Transaction {
            amount,
            direction: Direction::Expense,
            category: Category::Food,
            description: "fried chicken".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, day)
                .unwrap()
                .and_hms_opt(20, 5, 12)
                .unwrap(),
            counterparty: "card".to_string(),
            bank_name: "Tally Bank".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_transaction_insert() {
        let (_handle, conn) = connection::open_test().await;

        let tx = conn.insert(entry(8900, 3)).await.unwrap();
        assert!(tx.id > 0);
        assert_eq!(tx.amount, 8900);
        assert_eq!(tx.direction, Direction::Expense);
        assert_eq!(tx.category, Category::Food);
        assert_eq!(tx.description, "fried chicken");
    }

    #[tokio::test]
    async fn test_transaction_query_order_and_filter() {
        let (_handle, conn) = connection::open_test().await;

        conn.insert(entry(8900, 3)).await.unwrap();
        conn.insert(entry(15000, 7)).await.unwrap();
        conn.insert(Transaction {
            direction: Direction::Income,
            ..entry(50000, 5)
        })
        .await
        .unwrap();

        // Most recent first
        let all: Vec<Transaction> =
            conn.query(&TransactionFilter::default()).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].amount, 15000);

        // Direction filter
        let expenses: Vec<Transaction> = conn
            .query(&TransactionFilter {
                direction: Some(Direction::Expense),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(expenses.len(), 2);

        // Date range filter
        let until_5th: Vec<Transaction> = conn
            .query(&TransactionFilter {
                date_before: Some(NaiveDate::from_ymd_opt(2025, 8, 5).unwrap()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(until_5th.len(), 2);
    }

    #[tokio::test]
    async fn test_transaction_retrieve_missing() {
        let (_handle, conn) = connection::open_test().await;
        let tx: Result<Transaction> = conn.retrieve(4223).await;
        assert!(tx.is_err());
    }
}
