mod common;

use chrono::Utc;
use library_api::AppError;
use library_api::domain::entities::{BorrowingReturn, NewBorrowing, Score};
use library_api::domain::repositories::BorrowingRepository;
use library_api::infrastructure::persistence::PgBorrowingRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_borrowing(user_id: i64, book_id: i64) -> NewBorrowing {
    NewBorrowing {
        user_id,
        book_id,
        borrow_date: Utc::now(),
    }
}

fn closing(score: i64) -> BorrowingReturn {
    BorrowingReturn {
        return_date: Utc::now(),
        score: Score::new(score).unwrap(),
    }
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_create_borrowing(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "Ada").await;
    let book_id = common::create_test_book(&pool, "Dune").await;
    let repo = PgBorrowingRepository::new(Arc::new(pool));

    let borrowing = repo.create(new_borrowing(user_id, book_id)).await.unwrap();

    assert!(borrowing.is_active());
    assert_eq!(borrowing.score, None);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_second_active_borrowing_is_conflict(pool: PgPool) {
    let ada = common::create_test_user(&pool, "Ada").await;
    let bob = common::create_test_user(&pool, "Bob").await;
    let book_id = common::create_test_book(&pool, "Dune").await;
    let repo = PgBorrowingRepository::new(Arc::new(pool.clone()));

    repo.create(new_borrowing(ada, book_id)).await.unwrap();
    let result = repo.create(new_borrowing(bob, book_id)).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    assert_eq!(common::count_active_borrowings(&pool, book_id).await, 1);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_find_active_by_book_or_by_pair(pool: PgPool) {
    let ada = common::create_test_user(&pool, "Ada").await;
    let bob = common::create_test_user(&pool, "Bob").await;
    let book_id = common::create_test_book(&pool, "Dune").await;
    common::create_active_borrowing(&pool, ada, book_id).await;
    let repo = PgBorrowingRepository::new(Arc::new(pool));

    assert!(repo.find_active(None, book_id).await.unwrap().is_some());
    assert!(repo.find_active(Some(ada), book_id).await.unwrap().is_some());
    assert!(repo.find_active(Some(bob), book_id).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_close_borrowing_once(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "Ada").await;
    let book_id = common::create_test_book(&pool, "Dune").await;
    let id = common::create_active_borrowing(&pool, user_id, book_id).await;
    let repo = PgBorrowingRepository::new(Arc::new(pool));

    let closed = repo.close(id, closing(8)).await.unwrap();
    assert!(!closed.is_active());
    assert_eq!(closed.score, Some(8));

    let again = repo.close(id, closing(3)).await;
    assert!(matches!(again.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_book_can_be_borrowed_again_after_return(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "Ada").await;
    let book_id = common::create_test_book(&pool, "Dune").await;
    let repo = PgBorrowingRepository::new(Arc::new(pool));

    let first = repo.create(new_borrowing(user_id, book_id)).await.unwrap();
    repo.close(first.id, closing(6)).await.unwrap();

    assert!(repo.create(new_borrowing(user_id, book_id)).await.is_ok());
    assert_eq!(repo.count_active().await.unwrap(), 1);
}
