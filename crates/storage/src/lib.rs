#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod records;
mod sqlite;

pub use records::RecordError;
pub use sqlite::SqliteStore;
