//! SQLite job definition store for Cronit.
//!
//! Identity uniqueness is enforced by the table's primary key.

mod backend;
mod schema;

pub use backend::SqliteJobDefinitionStore;
