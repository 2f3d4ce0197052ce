//! Borrow/return workflow.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{Book, BorrowingReturn, NewBorrowing, Score, User};
use crate::domain::repositories::{BookRepository, BorrowingRepository, UserRepository};
use crate::error::AppError;

/// Service enforcing the borrowing rules.
///
/// - A book has at most one active borrowing, whoever holds it.
/// - Only the user holding a book can return it, and the return carries a score.
///
/// The borrow-side check looks up active borrowings by book only, while the
/// return-side lookup filters on both user and book.
pub struct BorrowingService<
    B: BorrowingRepository + ?Sized = dyn BorrowingRepository,
    U: UserRepository + ?Sized = dyn UserRepository,
    K: BookRepository + ?Sized = dyn BookRepository,
> {
    borrowing_repository: Arc<B>,
    user_repository: Arc<U>,
    book_repository: Arc<K>,
}

impl<B, U, K> BorrowingService<B, U, K>
where
    B: BorrowingRepository + ?Sized,
    U: UserRepository + ?Sized,
    K: BookRepository + ?Sized,
{
    /// Creates a new borrowing service.
    pub fn new(
        borrowing_repository: Arc<B>,
        user_repository: Arc<U>,
        book_repository: Arc<K>,
    ) -> Self {
        Self {
            borrowing_repository,
            user_repository,
            book_repository,
        }
    }

    /// Lends a book to a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user or book does not exist.
    /// Returns [`AppError::Conflict`] if anyone currently holds the book.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn borrow_book(&self, user_id: i64, book_id: i64) -> Result<(), AppError> {
        let user = self.require_user(user_id).await?;
        let book = self.require_book(book_id).await?;

        if self
            .borrowing_repository
            .find_active(None, book.id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                format!("Book with ID: {} is already borrowed", book.id),
                json!({ "book_id": book.id }),
            ));
        }

        let borrowing = self
            .borrowing_repository
            .create(NewBorrowing {
                user_id: user.id,
                book_id: book.id,
                borrow_date: Utc::now(),
            })
            .await?;

        metrics::counter!("library_borrowings_created_total").increment(1);
        tracing::info!(
            borrowing_id = borrowing.id,
            user_id = user.id,
            book_id = book.id,
            "Book borrowed"
        );

        Ok(())
    }

    /// Takes a book back from the user holding it and records their score.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user or book does not exist, or
    /// if this user has no active borrowing of this book.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn return_book(
        &self,
        user_id: i64,
        book_id: i64,
        score: Score,
    ) -> Result<(), AppError> {
        let user = self.require_user(user_id).await?;
        let book = self.require_book(book_id).await?;

        let borrowing = self
            .borrowing_repository
            .find_active(Some(user.id), book.id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    format!(
                        "No active borrowing found for user ID: {} and book ID: {}",
                        user.id, book.id
                    ),
                    json!({ "user_id": user.id, "book_id": book.id }),
                )
            })?;

        self.borrowing_repository
            .close(
                borrowing.id,
                BorrowingReturn {
                    return_date: Utc::now(),
                    score,
                },
            )
            .await?;

        metrics::counter!("library_borrowings_returned_total").increment(1);
        tracing::info!(
            borrowing_id = borrowing.id,
            user_id = user.id,
            book_id = book.id,
            score = score.value(),
            "Book returned"
        );

        Ok(())
    }

    /// Counts borrowings that are still open.
    pub async fn count_active(&self) -> Result<i64, AppError> {
        self.borrowing_repository.count_active().await
    }

    async fn require_user(&self, user_id: i64) -> Result<User, AppError> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    format!("User with ID: {} not found", user_id),
                    json!({ "user_id": user_id }),
                )
            })
    }

    async fn require_book(&self, book_id: i64) -> Result<Book, AppError> {
        self.book_repository
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    format!("Book with ID: {} not found", book_id),
                    json!({ "book_id": book_id }),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Borrowing;
    use crate::domain::repositories::{
        MockBookRepository, MockBorrowingRepository, MockUserRepository,
    };

    fn test_user(id: i64) -> User {
        User::new(id, format!("user-{id}"), None, Utc::now(), Utc::now())
    }

    fn test_book(id: i64) -> Book {
        Book::new(id, format!("book-{id}"), Utc::now(), Utc::now())
    }

    fn active_borrowing(id: i64, user_id: i64, book_id: i64) -> Borrowing {
        Borrowing::new(id, user_id, book_id, Utc::now(), None, None)
    }

    fn users_found() -> MockUserRepository {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(test_user(id))));
        repo
    }

    fn books_found() -> MockBookRepository {
        let mut repo = MockBookRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(test_book(id))));
        repo
    }

    fn service(
        borrowings: MockBorrowingRepository,
        users: MockUserRepository,
        books: MockBookRepository,
    ) -> BorrowingService<MockBorrowingRepository, MockUserRepository, MockBookRepository> {
        BorrowingService::new(Arc::new(borrowings), Arc::new(users), Arc::new(books))
    }

    #[tokio::test]
    async fn test_borrow_book_success() {
        let mut borrowings = MockBorrowingRepository::new();
        borrowings
            .expect_find_active()
            .withf(|user_id, book_id| user_id.is_none() && *book_id == 7)
            .times(1)
            .returning(|_, _| Ok(None));
        borrowings
            .expect_create()
            .withf(|new| new.user_id == 1 && new.book_id == 7)
            .times(1)
            .returning(|new| {
                Ok(Borrowing::new(
                    10,
                    new.user_id,
                    new.book_id,
                    new.borrow_date,
                    None,
                    None,
                ))
            });

        let result = service(borrowings, users_found(), books_found())
            .borrow_book(1, 7)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_borrow_book_user_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().times(1).returning(|_| Ok(None));

        let mut borrowings = MockBorrowingRepository::new();
        borrowings.expect_create().never();

        let result = service(borrowings, users, MockBookRepository::new())
            .borrow_book(99, 7)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_borrow_book_book_not_found() {
        let mut books = MockBookRepository::new();
        books.expect_find_by_id().times(1).returning(|_| Ok(None));

        let mut borrowings = MockBorrowingRepository::new();
        borrowings.expect_create().never();

        let result = service(borrowings, users_found(), books)
            .borrow_book(1, 99)
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "Book with ID: 99 not found");
    }

    #[tokio::test]
    async fn test_borrow_book_conflict_when_held_by_another_user() {
        let mut borrowings = MockBorrowingRepository::new();
        borrowings
            .expect_find_active()
            .withf(|user_id, book_id| user_id.is_none() && *book_id == 7)
            .times(1)
            .returning(|_, book_id| Ok(Some(active_borrowing(3, 2, book_id))));
        borrowings.expect_create().never();

        let result = service(borrowings, users_found(), books_found())
            .borrow_book(1, 7)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_borrow_book_conflict_when_held_by_same_user() {
        let mut borrowings = MockBorrowingRepository::new();
        borrowings
            .expect_find_active()
            .times(1)
            .returning(|_, book_id| Ok(Some(active_borrowing(3, 1, book_id))));
        borrowings.expect_create().never();

        let result = service(borrowings, users_found(), books_found())
            .borrow_book(1, 7)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_borrow_book_storage_conflict_propagates() {
        let mut borrowings = MockBorrowingRepository::new();
        borrowings.expect_find_active().returning(|_, _| Ok(None));
        borrowings.expect_create().times(1).returning(|new| {
            Err(AppError::conflict(
                format!("Book with ID: {} is already borrowed", new.book_id),
                serde_json::json!({}),
            ))
        });

        let result = service(borrowings, users_found(), books_found())
            .borrow_book(1, 7)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_return_book_success() {
        let mut borrowings = MockBorrowingRepository::new();
        borrowings
            .expect_find_active()
            .withf(|user_id, book_id| *user_id == Some(1) && *book_id == 7)
            .times(1)
            .returning(|_, _| Ok(Some(active_borrowing(42, 1, 7))));
        borrowings
            .expect_close()
            .withf(|id, closing| *id == 42 && closing.score.value() == 8)
            .times(1)
            .returning(|id, closing| {
                Ok(Borrowing::new(
                    id,
                    1,
                    7,
                    Utc::now(),
                    Some(closing.return_date),
                    Some(closing.score.value()),
                ))
            });

        let result = service(borrowings, users_found(), books_found())
            .return_book(1, 7, Score::new(8).unwrap())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_return_book_by_other_user_is_not_found() {
        // Book 7 is held by user 2; user 1 asks to return it.
        let mut borrowings = MockBorrowingRepository::new();
        borrowings
            .expect_find_active()
            .withf(|user_id, book_id| *user_id == Some(1) && *book_id == 7)
            .times(1)
            .returning(|_, _| Ok(None));
        borrowings.expect_close().never();

        let result = service(borrowings, users_found(), books_found())
            .return_book(1, 7, Score::new(5).unwrap())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_return_book_user_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().times(1).returning(|_| Ok(None));

        let mut borrowings = MockBorrowingRepository::new();
        borrowings.expect_find_active().never();

        let result = service(borrowings, users, MockBookRepository::new())
            .return_book(1, 7, Score::new(5).unwrap())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_return_book_already_closed_concurrently() {
        let mut borrowings = MockBorrowingRepository::new();
        borrowings
            .expect_find_active()
            .returning(|_, _| Ok(Some(active_borrowing(42, 1, 7))));
        borrowings.expect_close().times(1).returning(|id, _| {
            Err(AppError::not_found(
                "Borrowing not found or already returned",
                serde_json::json!({ "id": id }),
            ))
        });

        let result = service(borrowings, users_found(), books_found())
            .return_book(1, 7, Score::new(5).unwrap())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
