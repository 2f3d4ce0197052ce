//! Shared helpers.
//!
//! - [`db_error`] - Classification of database driver errors

pub mod db_error;
