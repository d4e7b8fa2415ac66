//! Infrastructure layer - database connection, state construction, and DB error mapping.

pub mod db;
pub mod db_errors;
pub mod state;
