//! PostgreSQL implementation of book repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::BookRow;
use crate::domain::entities::{Book, NewBook, PaginationOptions};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

/// PostgreSQL repository for the book catalogue.
pub struct PgBookRepository {
    pool: Arc<PgPool>,
}

impl PgBookRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn create(&self, new_book: NewBook) -> Result<Book, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            INSERT INTO books (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(&new_book.name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            "SELECT id, name, created_at, updated_at FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Book::from))
    }

    async fn list(&self, options: PaginationOptions) -> Result<Vec<Book>, AppError> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM books
            ORDER BY name ASC, id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(options.limit)
        .bind(options.skip)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM books")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, update: NewBook) -> Result<Book, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            UPDATE books SET
                name       = $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Book::from).ok_or_else(|| {
            AppError::not_found(format!("Book with ID: {} not found", id), json!({ "id": id }))
        })
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn average_score(&self, book_id: i64) -> Result<Option<f64>, AppError> {
        // AVG over zero rows yields NULL.
        let avg = sqlx::query_scalar::<_, Option<f64>>(
            r#"
            SELECT AVG(score)::DOUBLE PRECISION
            FROM borrowings
            WHERE book_id = $1 AND score IS NOT NULL
            "#,
        )
        .bind(book_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(avg)
    }
}
