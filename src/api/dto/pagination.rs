//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::PaginationOptions;

/// Pagination query parameters (`?page=2&limit=20`).
///
/// Uses `serde_with` to parse numbers from query strings.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

impl PaginationParams {
    pub const DEFAULT_LIMIT: u32 = 10;
    pub const MAX_LIMIT: u32 = 100;

    /// Validates the parameters and converts them to pagination options.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `limit`: 10
    ///
    /// # Validation
    ///
    /// - Page must be > 0
    /// - Limit must be between 1 and 100
    pub fn validate_and_get_options(&self) -> Result<PaginationOptions, String> {
        let page = self.page.unwrap_or(1);
        let limit = self.limit.unwrap_or(Self::DEFAULT_LIMIT);

        if page == 0 {
            return Err("Page must be greater than 0".to_string());
        }

        if !(1..=Self::MAX_LIMIT).contains(&limit) {
            return Err(format!("Limit must be between 1 and {}", Self::MAX_LIMIT));
        }

        Ok(PaginationOptions::new(i64::from(page), i64::from(limit)))
    }
}
