//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::UserProfile;
use crate::domain::entities::{NewUser, UpdateUser, User};

/// Request body for `POST /users` and `PUT /users/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UserRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: Option<String>,
}

impl From<UserRequest> for NewUser {
    fn from(req: UserRequest) -> Self {
        NewUser {
            name: req.name,
            email: req.email,
        }
    }
}

impl From<UserRequest> for UpdateUser {
    fn from(req: UserRequest) -> Self {
        UpdateUser {
            name: req.name,
            email: req.email,
        }
    }
}

/// List item and create/update response.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        UserSummary {
            id: user.id,
            name: user.name,
        }
    }
}

/// A returned book with the score the user gave it.
#[derive(Debug, Serialize)]
pub struct PastBook {
    pub name: String,
    #[serde(rename = "userScore")]
    pub user_score: Option<i16>,
}

/// A book the user currently holds.
#[derive(Debug, Serialize)]
pub struct PresentBook {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct UserBooks {
    pub past: Vec<PastBook>,
    pub present: Vec<PresentBook>,
}

/// Response for `GET /users/{id}`.
#[derive(Debug, Serialize)]
pub struct UserDetailResponse {
    pub id: i64,
    pub name: String,
    pub books: UserBooks,
}

impl From<UserProfile> for UserDetailResponse {
    fn from(profile: UserProfile) -> Self {
        UserDetailResponse {
            id: profile.user.id,
            name: profile.user.name,
            books: UserBooks {
                past: profile
                    .past
                    .into_iter()
                    .map(|b| PastBook {
                        name: b.book_name,
                        user_score: b.score,
                    })
                    .collect(),
                present: profile
                    .present
                    .into_iter()
                    .map(|b| PresentBook { name: b.book_name })
                    .collect(),
            },
        }
    }
}
