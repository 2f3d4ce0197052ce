//! Helpers for inspecting database driver errors.

/// Returns true if `e` is a unique violation raised by the named constraint
/// or unique index.
pub fn is_unique_violation_on(e: &sqlx::Error, constraint: &str) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.constraint() == Some(constraint)
}
