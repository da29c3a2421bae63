use anyhow::Result;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};

use tally_data::{Contact, ContactFilter, Delete, Insert, Query, Retrieve};

use crate::{
    results::{Id, QueryError},
    Connection,
};


#[async_trait]
impl Query<Contact> for Connection {
    type Filter = ContactFilter;

    async fn query(&self, filter: &ContactFilter) -> Result<Vec<Contact>> {
        let mut conn = self.lock().await;
        let mut qry = QueryBuilder::<Sqlite>::new(
            r#"
            SELECT id, name, phone
            FROM contacts
            WHERE 1
            "#,
        );
        if let Some(id) = filter.id {
            qry.push(" AND id = ").push_bind(id);
        }
        if let Some(name) = filter.name.clone() {
            qry.push(" AND name = ").push_bind(name);
        }
        if let Some(phone) = filter.phone.clone() {
            qry.push(" AND phone = ").push_bind(phone);
        }
        qry.push(" ORDER BY name ASC, id ASC ");

        let contacts: Vec<Contact> = qry.build_query_as().fetch_all(&mut *conn).await?;
        Ok(contacts)
    }
}

#[async_trait]
impl Retrieve<Contact> for Connection {
    type Key = u32;

    async fn retrieve(&self, key: u32) -> Result<Contact> {
        let filter = ContactFilter {
            id: Some(key),
            ..Default::default()
        };
        let contact: Contact = self
            .query(&filter)
            .await?
            .pop()
            .ok_or(QueryError::NotFound)?;
        Ok(contact)
    }
}

#[async_trait]
impl Insert<Contact> for Connection {
    async fn insert(&self, contact: Contact) -> Result<Contact> {
        let insert: Id<u32> = {
            let mut conn = self.lock().await;
            let mut qry = QueryBuilder::<Sqlite>::new(
                "INSERT INTO contacts (name, phone) VALUES (",
            );
            qry.separated(", ")
                .push_bind(&contact.name)
                .push_bind(&contact.phone);

            qry.push(") RETURNING id ")
                .build_query_as()
                .fetch_one(&mut *conn)
                .await?
        };
        self.retrieve(insert.id).await
    }
}

#[async_trait]
impl Delete<Contact> for Connection {
    async fn delete(&self, contact: Contact) -> Result<()> {
        let mut conn = self.lock().await;
        QueryBuilder::<Sqlite>::new("DELETE FROM contacts WHERE id = ")
            .push_bind(contact.id)
            .build()
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection;

    #[tokio::test]
    async fn test_contact_insert_query_delete() {
        let (_handle, conn) = connection::open_test().await;

        let c = conn
            .insert(Contact {
                name: "Sehyun Cho".to_string(),
                phone: "010-1234-5678".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(c.id > 0);

        let by_name: Vec<Contact> = conn
            .query(&ContactFilter {
                name: Some("Sehyun Cho".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].phone, "010-1234-5678");

        let id = c.id;
        conn.delete(c).await.unwrap();
        let gone: Result<Contact> = conn.retrieve(id).await;
        assert!(gone.is_err());
    }
}
