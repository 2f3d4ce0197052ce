//! Pagination options for list queries.

/// Page number, page size and the derived row offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationOptions {
    pub page: i64,
    pub limit: i64,
    pub skip: i64,
}

impl PaginationOptions {
    /// Builds options for a 1-indexed page; `skip = (page - 1) * limit`.
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page,
            limit,
            skip: (page - 1) * limit,
        }
    }
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self::new(1, 10)
    }
}
