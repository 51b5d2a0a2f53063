pub mod repository;
pub mod schema;
pub mod sqlite;

pub use repository::{Repository, TableCounts};
pub use schema::DB_SCHEMA_VERSION;
pub use sqlite::SqliteRepo;
