//! Shared application state passed to all handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{BookService, BorrowingService, UserService};
use crate::domain::repositories::{BookRepository, BorrowingRepository, UserRepository};
use crate::infrastructure::persistence::{
    PgBookRepository, PgBorrowingRepository, PgUserRepository,
};

/// Services available to every request handler.
///
/// Cloned per request by Axum; all fields are `Arc`-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub book_service: Arc<BookService>,
    pub borrowing_service: Arc<BorrowingService>,
}

impl AppState {
    /// Builds the state on top of PostgreSQL repositories sharing one pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self::from_repositories(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgBookRepository::new(pool.clone())),
            Arc::new(PgBorrowingRepository::new(pool)),
        )
    }

    /// Builds the state from arbitrary repository implementations.
    pub fn from_repositories(
        user_repository: Arc<dyn UserRepository>,
        book_repository: Arc<dyn BookRepository>,
        borrowing_repository: Arc<dyn BorrowingRepository>,
    ) -> Self {
        Self {
            user_service: Arc::new(UserService::new(user_repository.clone())),
            book_service: Arc::new(BookService::new(book_repository.clone())),
            borrowing_service: Arc::new(BorrowingService::new(
                borrowing_repository,
                user_repository,
                book_repository,
            )),
        }
    }
}
