mod common;

use library_api::AppError;
use library_api::domain::entities::{NewUser, PaginationOptions, UpdateUser};
use library_api::domain::repositories::UserRepository;
use library_api::infrastructure::persistence::PgUserRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_create_user(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let user = repo
        .create(NewUser {
            name: "Ada Lovelace".to_string(),
            email: Some("ada@example.com".to_string()),
        })
        .await
        .unwrap();

    assert!(user.id > 0);
    assert_eq!(user.name, "Ada Lovelace");
    assert_eq!(user.email.as_deref(), Some("ada@example.com"));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_create_user_duplicate_email_is_conflict(pool: PgPool) {
    common::create_test_user_with_email(&pool, "First", "dup@example.com").await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let result = repo
        .create(NewUser {
            name: "Second".to_string(),
            email: Some("dup@example.com".to_string()),
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_users_without_email_do_not_conflict(pool: PgPool) {
    common::create_test_user(&pool, "First").await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let result = repo
        .create(NewUser {
            name: "Second".to_string(),
            email: None,
        })
        .await;

    assert!(result.is_ok());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let result = repo.find_by_id(999_999).await.unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_list_is_paginated_by_name(pool: PgPool) {
    for name in ["Carol", "Alice", "Bob"] {
        common::create_test_user(&pool, name).await;
    }
    let repo = PgUserRepository::new(Arc::new(pool));

    let first = repo.list(PaginationOptions::new(1, 2)).await.unwrap();
    let second = repo.list(PaginationOptions::new(2, 2)).await.unwrap();

    let names: Vec<_> = first.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob"]);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].name, "Carol");
    assert_eq!(repo.count().await.unwrap(), 3);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_update_user(pool: PgPool) {
    let id = common::create_test_user(&pool, "Ada").await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let user = repo
        .update(
            id,
            UpdateUser {
                name: "Ada King".to_string(),
                email: Some("ada@example.com".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(user.name, "Ada King");
    assert_eq!(user.email.as_deref(), Some("ada@example.com"));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_update_without_email_keeps_stored_email(pool: PgPool) {
    let id = common::create_test_user_with_email(&pool, "Ada", "ada@example.com").await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let user = repo
        .update(
            id,
            UpdateUser {
                name: "Ada L".to_string(),
                email: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(user.name, "Ada L");
    assert_eq!(user.email.as_deref(), Some("ada@example.com"));

    let stored = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.email.as_deref(), Some("ada@example.com"));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_update_missing_user_is_not_found(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let result = repo
        .update(
            999_999,
            UpdateUser {
                name: "Nobody".to_string(),
                email: None,
            },
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_delete_user_cascades_borrowings(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "Ada").await;
    let book_id = common::create_test_book(&pool, "Dune").await;
    common::create_active_borrowing(&pool, user_id, book_id).await;
    let repo = PgUserRepository::new(Arc::new(pool.clone()));

    assert!(repo.delete(user_id).await.unwrap());
    assert!(!repo.delete(user_id).await.unwrap());
    assert_eq!(common::count_active_borrowings(&pool, book_id).await, 0);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_list_borrowed_books(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "Ada").await;
    let returned = common::create_test_book(&pool, "I, Robot").await;
    let held = common::create_test_book(&pool, "Brave New World").await;
    common::create_returned_borrowing(&pool, user_id, returned, 5).await;
    common::create_active_borrowing(&pool, user_id, held).await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let books = repo.list_borrowed_books(user_id).await.unwrap();

    assert_eq!(books.len(), 2);
    assert_eq!(books[0].book_name, "I, Robot");
    assert_eq!(books[0].score, Some(5));
    assert!(books[0].is_returned());
    assert_eq!(books[1].book_name, "Brave New World");
    assert!(!books[1].is_returned());
}
