//! PostgreSQL implementation of user repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::{BorrowedBookRow, UserRow};
use crate::domain::entities::{BorrowedBook, NewUser, PaginationOptions, UpdateUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on;

const USERS_EMAIL_KEY: &str = "users_email_key";

/// PostgreSQL repository for library members.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn email_conflict(email: Option<&str>) -> AppError {
    AppError::conflict(
        format!("Email address {} is already in use", email.unwrap_or_default()),
        json!({ "email": email }),
    )
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email, created_at, updated_at
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, USERS_EMAIL_KEY) {
                email_conflict(new_user.email.as_deref())
            } else {
                e.into()
            }
        })?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }

    async fn list(&self, options: PaginationOptions) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, created_at, updated_at
            FROM users
            ORDER BY name ASC, id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(options.limit)
        .bind(options.skip)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, update: UpdateUser) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users SET
                name       = $2,
                email      = COALESCE($3, email),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, email, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.email)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, USERS_EMAIL_KEY) {
                email_conflict(update.email.as_deref())
            } else {
                e.into()
            }
        })?;

        row.map(User::from).ok_or_else(|| {
            AppError::not_found(format!("User with ID: {} not found", id), json!({ "id": id }))
        })
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_borrowed_books(&self, user_id: i64) -> Result<Vec<BorrowedBook>, AppError> {
        let rows = sqlx::query_as::<_, BorrowedBookRow>(
            r#"
            SELECT b.name AS book_name, br.borrow_date, br.return_date, br.score
            FROM borrowings br
            JOIN books b ON b.id = br.book_id
            WHERE br.user_id = $1
            ORDER BY br.borrow_date ASC, br.id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(BorrowedBook::from).collect())
    }
}
