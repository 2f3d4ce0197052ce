//! Row types decoded from SQL results and their mapping to entities.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::entities::{Book, BorrowedBook, Borrowing, User};

#[derive(Debug, FromRow)]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User::new(r.id, r.name, r.email, r.created_at, r.updated_at)
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct BookRow {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BookRow> for Book {
    fn from(r: BookRow) -> Self {
        Book::new(r.id, r.name, r.created_at, r.updated_at)
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct BorrowingRow {
    pub id: i64,
    pub user_id: i64,
    pub book_id: i64,
    pub borrow_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub score: Option<i16>,
}

impl From<BorrowingRow> for Borrowing {
    fn from(r: BorrowingRow) -> Self {
        Borrowing::new(
            r.id,
            r.user_id,
            r.book_id,
            r.borrow_date,
            r.return_date,
            r.score,
        )
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct BorrowedBookRow {
    pub book_name: String,
    pub borrow_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub score: Option<i16>,
}

impl From<BorrowedBookRow> for BorrowedBook {
    fn from(r: BorrowedBookRow) -> Self {
        BorrowedBook {
            book_name: r.book_name,
            borrow_date: r.borrow_date,
            return_date: r.return_date,
            score: r.score,
        }
    }
}
