//! API route configuration.

use crate::api::handlers::{
    borrow_book_handler, create_book_handler, create_user_handler, delete_book_handler,
    delete_user_handler, get_book_handler, get_user_handler, list_books_handler,
    list_users_handler, return_book_handler, update_book_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All library API routes.
///
/// # Endpoints
///
/// - `GET    /users`                          - List users (paginated)
/// - `POST   /users`                          - Create a user
/// - `GET    /users/{id}`                     - User with past and present borrowings
/// - `PUT    /users/{id}`                     - Update a user
/// - `DELETE /users/{id}`                     - Delete a user
/// - `POST   /users/{userId}/borrow/{bookId}` - Borrow a book
/// - `POST   /users/{userId}/return/{bookId}` - Return a book with a score
/// - `GET    /books`                          - List books (paginated)
/// - `POST   /books`                          - Create a book
/// - `GET    /books/{id}`                     - Book with average score
/// - `PUT    /books/{id}`                     - Rename a book
/// - `DELETE /books/{id}`                     - Delete a book
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route("/users/{user_id}/borrow/{book_id}", post(borrow_book_handler))
        .route("/users/{user_id}/return/{book_id}", post(return_book_handler))
        .route("/books", get(list_books_handler).post(create_book_handler))
        .route(
            "/books/{id}",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler),
        )
}
