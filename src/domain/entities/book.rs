//! Book entity.

use chrono::{DateTime, Utc};

/// A book in the library catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Creates a new Book instance.
    pub fn new(id: i64, name: String, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating or renaming a book.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub name: String,
}

/// A book together with its average rating.
#[derive(Debug, Clone, PartialEq)]
pub struct RatedBook {
    pub book: Book,
    /// Mean of all non-null scores, `None` when the book was never rated.
    pub average_score: Option<f64>,
}

impl RatedBook {
    /// Average score rounded half up to two decimals, e.g. `"4.50"`.
    ///
    /// `{:.2}` alone rounds exact ties to even (4.125 -> "4.12"), so the
    /// value is rounded first.
    pub fn formatted_score(&self) -> Option<String> {
        self.average_score
            .map(|avg| format!("{:.2}", (avg * 100.0).round() / 100.0))
    }
}
