//! Book catalogue service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Book, NewBook, PaginationOptions, RatedBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

/// Service for the book catalogue and its ratings.
pub struct BookService<R: BookRepository + ?Sized = dyn BookRepository> {
    repository: Arc<R>,
}

impl<R: BookRepository + ?Sized> BookService<R> {
    /// Creates a new book service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists books for one page, ordered by name.
    pub async fn get_all_books(&self, options: PaginationOptions) -> Result<Vec<Book>, AppError> {
        self.repository.list(options).await
    }

    /// Retrieves a book together with its average score.
    ///
    /// Only borrowings that were returned with a score take part in the
    /// average.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_book_by_id(&self, id: i64) -> Result<RatedBook, AppError> {
        let book = self.require_book(id).await?;
        let average_score = self.repository.average_score(id).await?;

        Ok(RatedBook {
            book,
            average_score,
        })
    }

    /// Adds a book to the catalogue.
    pub async fn create_book(&self, new_book: NewBook) -> Result<Book, AppError> {
        let book = self.repository.create(new_book).await?;
        tracing::info!(book_id = book.id, "Book created");
        Ok(book)
    }

    /// Renames a book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_book(&self, id: i64, update: NewBook) -> Result<Book, AppError> {
        self.require_book(id).await?;
        self.repository.update(id, update).await
    }

    /// Removes a book and its borrowing history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_book(&self, id: i64) -> Result<(), AppError> {
        self.require_book(id).await?;

        if !self.repository.delete(id).await? {
            return Err(AppError::internal(
                format!("Failed to delete book with ID: {}", id),
                json!({ "id": id }),
            ));
        }

        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }

    /// Counts all books.
    pub async fn count_books(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    async fn require_book(&self, id: i64) -> Result<Book, AppError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(format!("Book with ID: {} not found", id), json!({ "id": id }))
        })
    }
}
