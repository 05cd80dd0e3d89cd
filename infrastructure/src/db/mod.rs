//! SQLite persistence adapter

mod sqlite;

pub use sqlite::{DbError, SqlitePollRepository};
