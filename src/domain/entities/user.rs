//! User entity and its borrowing history view.

use chrono::{DateTime, Utc};

/// A library member.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(
        id: i64,
        name: String,
        email: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: Option<String>,
}

/// New values for a user's editable fields.
///
/// `email: None` keeps the stored address.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateUser {
    pub name: String,
    pub email: Option<String>,
}

/// A book as it appears in a user's borrowing history.
#[derive(Debug, Clone, PartialEq)]
pub struct BorrowedBook {
    pub book_name: String,
    pub borrow_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub score: Option<i16>,
}

impl BorrowedBook {
    /// Returns true if the book has been handed back.
    pub fn is_returned(&self) -> bool {
        self.return_date.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let now = Utc::now();
        let user = User::new(
            1,
            "Ada Lovelace".to_string(),
            Some("ada@example.com".to_string()),
            now,
            now,
        );

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.email.as_deref(), Some("ada@example.com"));
        assert_eq!(user.created_at, now);
    }

    #[test]
    fn test_borrowed_book_is_returned() {
        let open = BorrowedBook {
            book_name: "Dune".to_string(),
            borrow_date: Utc::now(),
            return_date: None,
            score: None,
        };
        let closed = BorrowedBook {
            return_date: Some(Utc::now()),
            score: Some(7),
            ..open.clone()
        };

        assert!(!open.is_returned());
        assert!(closed.is_returned());
    }
}
