#![allow(dead_code)]

use library_api::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub async fn create_test_user(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_user_with_email(pool: &PgPool, name: &str, email: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_book(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO books (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_active_borrowing(pool: &PgPool, user_id: i64, book_id: i64) -> i64 {
    sqlx::query_scalar("INSERT INTO borrowings (user_id, book_id) VALUES ($1, $2) RETURNING id")
        .bind(user_id)
        .bind(book_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_returned_borrowing(pool: &PgPool, user_id: i64, book_id: i64, score: i16) {
    sqlx::query(
        "INSERT INTO borrowings (user_id, book_id, borrow_date, return_date, score) \
         VALUES ($1, $2, NOW() - INTERVAL '2 days', NOW() - INTERVAL '1 day', $3)",
    )
    .bind(user_id)
    .bind(book_id)
    .bind(score)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn count_active_borrowings(pool: &PgPool, book_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM borrowings WHERE book_id = $1 AND return_date IS NULL")
        .bind(book_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}
