//! PostgreSQL implementation of borrowing repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::BorrowingRow;
use crate::domain::entities::{Borrowing, BorrowingReturn, NewBorrowing};
use crate::domain::repositories::BorrowingRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on;

/// Partial unique index allowing one open borrowing per book.
const ACTIVE_BOOK_KEY: &str = "borrowings_active_book_key";

/// PostgreSQL repository for borrow/return records.
///
/// The `borrowings_active_book_key` index makes the "one active borrowing
/// per book" rule hold even when two borrow requests race.
pub struct PgBorrowingRepository {
    pool: Arc<PgPool>,
}

impl PgBorrowingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BorrowingRepository for PgBorrowingRepository {
    async fn find_active(
        &self,
        user_id: Option<i64>,
        book_id: i64,
    ) -> Result<Option<Borrowing>, AppError> {
        let row = sqlx::query_as::<_, BorrowingRow>(
            r#"
            SELECT id, user_id, book_id, borrow_date, return_date, score
            FROM borrowings
            WHERE return_date IS NULL
              AND book_id = $2
              AND ($1::BIGINT IS NULL OR user_id = $1)
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(book_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Borrowing::from))
    }

    async fn create(&self, new_borrowing: NewBorrowing) -> Result<Borrowing, AppError> {
        let row = sqlx::query_as::<_, BorrowingRow>(
            r#"
            INSERT INTO borrowings (user_id, book_id, borrow_date)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, book_id, borrow_date, return_date, score
            "#,
        )
        .bind(new_borrowing.user_id)
        .bind(new_borrowing.book_id)
        .bind(new_borrowing.borrow_date)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, ACTIVE_BOOK_KEY) {
                AppError::conflict(
                    format!("Book with ID: {} is already borrowed", new_borrowing.book_id),
                    json!({ "book_id": new_borrowing.book_id }),
                )
            } else {
                e.into()
            }
        })?;

        Ok(row.into())
    }

    async fn close(&self, id: i64, closing: BorrowingReturn) -> Result<Borrowing, AppError> {
        let row = sqlx::query_as::<_, BorrowingRow>(
            r#"
            UPDATE borrowings SET
                return_date = $2,
                score       = $3
            WHERE id = $1 AND return_date IS NULL
            RETURNING id, user_id, book_id, borrow_date, return_date, score
            "#,
        )
        .bind(id)
        .bind(closing.return_date)
        .bind(closing.score.value())
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Borrowing::from).ok_or_else(|| {
            AppError::not_found(
                "Borrowing not found or already returned",
                json!({ "id": id }),
            )
        })
    }

    async fn count_active(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM borrowings WHERE return_date IS NULL",
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }
}
