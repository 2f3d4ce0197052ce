//! DTOs for book endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Book, NewBook, RatedBook};

/// Request body for `POST /books` and `PUT /books/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct BookRequest {
    #[validate(length(min = 2, max = 200, message = "Name must be between 2 and 200 characters"))]
    pub name: String,
}

impl From<BookRequest> for NewBook {
    fn from(req: BookRequest) -> Self {
        NewBook { name: req.name }
    }
}

/// List item and create/update response.
#[derive(Debug, Serialize)]
pub struct BookSummary {
    pub id: i64,
    pub name: String,
}

impl From<Book> for BookSummary {
    fn from(book: Book) -> Self {
        BookSummary {
            id: book.id,
            name: book.name,
        }
    }
}

/// Average rating as sent to clients: `"4.50"`, or `-1` when unrated.
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BookScore {
    Rated(String),
    Unrated(i8),
}

impl BookScore {
    pub const UNRATED: BookScore = BookScore::Unrated(-1);
}

/// Response for `GET /books/{id}`.
#[derive(Debug, Serialize)]
pub struct BookDetailResponse {
    pub id: i64,
    pub name: String,
    pub score: BookScore,
}

impl From<RatedBook> for BookDetailResponse {
    fn from(rated: RatedBook) -> Self {
        let score = rated
            .formatted_score()
            .map(BookScore::Rated)
            .unwrap_or(BookScore::UNRATED);

        BookDetailResponse {
            id: rated.book.id,
            name: rated.book.name,
            score,
        }
    }
}
