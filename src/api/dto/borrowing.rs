//! DTOs for the borrow/return endpoints.

use serde::Deserialize;
use validator::Validate;

/// Request body for `POST /users/{userId}/return/{bookId}`.
#[derive(Debug, Deserialize, Validate)]
pub struct ReturnBookRequest {
    #[validate(range(min = 1, max = 10, message = "Score must be between 1 and 10"))]
    pub score: i64,
}
