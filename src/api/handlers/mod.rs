//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod books;
pub mod borrowings;
pub mod health;
pub mod users;


pub use books::{
    create_book_handler, delete_book_handler, get_book_handler, list_books_handler,
    update_book_handler,
};
pub use borrowings::{borrow_book_handler, return_book_handler};
pub use health::health_handler;
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
