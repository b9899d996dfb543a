use async_trait::async_trait;
use sqlx::PgPool;

use crate::features::contacts::models::{Contact, NewContact};

const INSERT_CONTACT: &str = r#"
    INSERT INTO contacts (name, email, subject, message, ip_address, is_read)
    VALUES ($1, $2, $3, $4, $5, false)
    RETURNING id, name, email, subject, message, created_at, ip_address, is_read
"#;

const LIST_CONTACTS: &str = r#"
    SELECT id, name, email, subject, message, created_at, ip_address, is_read
    FROM contacts
    ORDER BY created_at DESC, id DESC
"#;

/// Storage seam for contact submissions
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert an unread submission and return the stored row
    async fn insert(&self, contact: NewContact) -> Result<Contact, sqlx::Error>;

    /// Every submission, newest first
    async fn list_all(&self) -> Result<Vec<Contact>, sqlx::Error>;
}

pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn insert(&self, contact: NewContact) -> Result<Contact, sqlx::Error> {
        sqlx::query_as::<_, Contact>(INSERT_CONTACT)
            .bind(contact.name)
            .bind(contact.email)
            .bind(contact.subject)
            .bind(contact.message)
            .bind(contact.ip_address)
            .fetch_one(&self.pool)
            .await
    }

    async fn list_all(&self) -> Result<Vec<Contact>, sqlx::Error> {
        sqlx::query_as::<_, Contact>(LIST_CONTACTS)
            .fetch_all(&self.pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squash(sql: &str) -> String {
        sql.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn new_contact(name: &str) -> NewContact {
        NewContact {
            name: name.to_string(),
            email: "ana@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice portfolio".to_string(),
            ip_address: "unknown".to_string(),
        }
    }

    #[test]
    fn test_listing_sql_is_unfiltered_newest_first() {
        let sql = squash(LIST_CONTACTS);
        assert!(!sql.contains("WHERE"));
        assert!(sql.ends_with("ORDER BY created_at DESC, id DESC"));
    }

    #[test]
    fn test_insert_sql_stores_unread() {
        let sql = squash(INSERT_CONTACT);
        assert!(sql.contains("VALUES ($1, $2, $3, $4, $5, false)"));
    }

    // Needs a reachable Postgres in DATABASE_URL: cargo test -- --ignored
    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn test_pg_lists_every_contact_newest_first(pool: PgPool) {
        let repository = PgContactRepository::new(pool);
        let first = repository.insert(new_contact("Ana")).await.unwrap();
        let second = repository.insert(new_contact("Binh")).await.unwrap();
        assert!(!first.is_read);
        assert_ne!(first.id, second.id);

        let listed = repository.list_all().await.unwrap();
        let ids: Vec<i64> = listed.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn test_pg_rejects_oversized_name(pool: PgPool) {
        let repository = PgContactRepository::new(pool);
        let result = repository.insert(new_contact(&"n".repeat(101))).await;
        assert!(result.is_err());
    }
}
