//! SQLite management for flight log records.
//!
//! This module provides the low-level database operations behind
//! [`SqliteStore`](crate::store::SqliteStore): connection handling, schema
//! setup, and the flight log queries.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{Result, StoreResultExt};

pub mod flight_queries;
pub mod schema;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens a database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).store_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database, mostly useful for tests.
    pub fn open_in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory()
            .store_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
