//! User management service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{BorrowedBook, NewUser, PaginationOptions, UpdateUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// A user together with their borrowing history split by state.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user: User,
    /// Returned borrowings, oldest first.
    pub past: Vec<BorrowedBook>,
    /// Borrowings still open, oldest first.
    pub present: Vec<BorrowedBook>,
}

/// Service for managing library members.
pub struct UserService<R: UserRepository + ?Sized = dyn UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists users for one page.
    pub async fn get_all_users(&self, options: PaginationOptions) -> Result<Vec<User>, AppError> {
        self.repository.list(options).await
    }

    /// Retrieves a user with past and present borrowings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_user_by_id(&self, id: i64) -> Result<UserProfile, AppError> {
        let user = self.require_user(id).await?;

        let (past, present): (Vec<_>, Vec<_>) = self
            .repository
            .list_borrowed_books(id)
            .await?
            .into_iter()
            .partition(BorrowedBook::is_returned);

        Ok(UserProfile {
            user,
            past,
            present,
        })
    }

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already in use.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        if let Some(email) = new_user.email.as_deref() {
            self.ensure_email_available(email, None).await?;
        }

        let user = self.repository.create(new_user).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Updates a user's name and email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Conflict`] if the email belongs to another user.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_user(&self, id: i64, update: UpdateUser) -> Result<User, AppError> {
        let existing = self.require_user(id).await?;

        if let Some(email) = update.email.as_deref()
            && existing.email.as_deref() != Some(email)
        {
            self.ensure_email_available(email, Some(id)).await?;
        }

        self.repository.update(id, update).await
    }

    /// Deletes a user and their borrowing history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        self.require_user(id).await?;

        if !self.repository.delete(id).await? {
            return Err(AppError::internal(
                format!("Failed to delete user with ID: {}", id),
                json!({ "id": id }),
            ));
        }

        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    /// Counts all users.
    pub async fn count_users(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    async fn require_user(&self, id: i64) -> Result<User, AppError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(format!("User with ID: {} not found", id), json!({ "id": id }))
        })
    }

    async fn ensure_email_available(&self, email: &str, owner: Option<i64>) -> Result<(), AppError> {
        match self.repository.find_by_email(email).await? {
            Some(other) if Some(other.id) != owner => Err(AppError::conflict(
                format!("Email address {} is already in use", email),
                json!({ "email": email }),
            )),
            _ => Ok(()),
        }
    }
}
