//! Borrowing entity: one loan of one book to one user.
//!
//! ```text
//! [nonexistent] --borrow--> [active, return_date = None]
//!               --return--> [closed, return_date and score set]
//! ```
//!
//! A closed borrowing never becomes active again.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::error::AppError;

/// Rating given to a book when it is returned, within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(i16);

impl Score {
    pub const MIN: i16 = 1;
    pub const MAX: i16 = 10;

    /// Creates a score, rejecting values outside `1..=10`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the value is out of range.
    pub fn new(value: i64) -> Result<Self, AppError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(AppError::bad_request(
                format!("Score must be between {} and {}", Self::MIN, Self::MAX),
                json!({ "score": value }),
            ));
        }
        Ok(Self(value as i16))
    }

    pub fn value(self) -> i16 {
        self.0
    }
}

/// A persisted borrowing record.
#[derive(Debug, Clone, PartialEq)]
pub struct Borrowing {
    pub id: i64,
    pub user_id: i64,
    pub book_id: i64,
    pub borrow_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub score: Option<i16>,
}

impl Borrowing {
    /// Creates a new Borrowing instance.
    pub fn new(
        id: i64,
        user_id: i64,
        book_id: i64,
        borrow_date: DateTime<Utc>,
        return_date: Option<DateTime<Utc>>,
        score: Option<i16>,
    ) -> Self {
        Self {
            id,
            user_id,
            book_id,
            borrow_date,
            return_date,
            score,
        }
    }

    /// Returns true while the book has not been returned.
    pub fn is_active(&self) -> bool {
        self.return_date.is_none()
    }
}

/// Input data for opening a borrowing.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBorrowing {
    pub user_id: i64,
    pub book_id: i64,
    pub borrow_date: DateTime<Utc>,
}

/// Data written when a borrowing is closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorrowingReturn {
    pub return_date: DateTime<Utc>,
    pub score: Score,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bounds_accepted() {
        assert_eq!(Score::new(1).unwrap().value(), 1);
        assert_eq!(Score::new(10).unwrap().value(), 10);
    }

    #[test]
    fn test_score_out_of_range_rejected() {
        assert!(matches!(Score::new(0), Err(AppError::Validation { .. })));
        assert!(matches!(Score::new(11), Err(AppError::Validation { .. })));
        assert!(matches!(Score::new(-3), Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_borrowing_is_active() {
        let mut borrowing = Borrowing::new(1, 2, 3, Utc::now(), None, None);
        assert!(borrowing.is_active());

        borrowing.return_date = Some(Utc::now());
        borrowing.score = Some(8);
        assert!(!borrowing.is_active());
    }
}
