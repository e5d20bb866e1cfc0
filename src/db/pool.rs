//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database and bring its schema up to date.
    pub fn new(path: impl AsRef<Path>) -> AppResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        init_db(&conn)?;
        Ok(Self { conn })
    }
}
