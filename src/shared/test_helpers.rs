use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::features::comments::models::{Comment, NewComment};
use crate::features::comments::repositories::CommentRepository;
use crate::features::contacts::models::{Contact, NewContact};
use crate::features::contacts::repositories::ContactRepository;

/// Comment store kept in memory; counts inserts so tests can assert the
/// store was never reached.
#[derive(Default)]
pub struct InMemoryCommentRepository {
    rows: Mutex<Vec<Comment>>,
    next_id: AtomicI64,
    insert_calls: AtomicUsize,
    failing: bool,
}

impl InMemoryCommentRepository {
    /// Every call fails like an unreachable database
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn seed_comment(
        &self,
        author: &str,
        content: &str,
        created_at: DateTime<Utc>,
        is_approved: bool,
    ) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.rows.lock().unwrap().push(Comment {
            id,
            author: author.to_string(),
            content: content.to_string(),
            created_at,
            ip_address: None,
            is_approved,
        });
        id
    }

    pub fn comments(&self) -> Vec<Comment> {
        self.rows.lock().unwrap().clone()
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn insert(&self, comment: NewComment) -> Result<Comment, sqlx::Error> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(sqlx::Error::PoolTimedOut);
        }

        let row = Comment {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            author: comment.author,
            content: comment.content,
            created_at: Utc::now(),
            ip_address: Some(comment.ip_address),
            is_approved: true,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn list_approved(&self) -> Result<Vec<Comment>, sqlx::Error> {
        if self.failing {
            return Err(sqlx::Error::PoolTimedOut);
        }

        let mut rows: Vec<Comment> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.is_approved)
            .cloned()
            .collect();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows)
    }
}

/// Contact store kept in memory
#[derive(Default)]
pub struct InMemoryContactRepository {
    rows: Mutex<Vec<Contact>>,
    next_id: AtomicI64,
    insert_calls: AtomicUsize,
    failing: bool,
}

impl InMemoryContactRepository {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn contacts(&self) -> Vec<Contact> {
        self.rows.lock().unwrap().clone()
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn insert(&self, contact: NewContact) -> Result<Contact, sqlx::Error> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(sqlx::Error::PoolTimedOut);
        }

        let row = Contact {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            name: contact.name,
            email: contact.email,
            subject: contact.subject,
            message: contact.message,
            created_at: Utc::now(),
            ip_address: Some(contact.ip_address),
            is_read: false,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn list_all(&self) -> Result<Vec<Contact>, sqlx::Error> {
        if self.failing {
            return Err(sqlx::Error::PoolTimedOut);
        }

        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows)
    }
}
