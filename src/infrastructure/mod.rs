pub mod crypto;
pub mod database;
pub mod storage;

pub use database::{init_database, DatabaseConfig};
