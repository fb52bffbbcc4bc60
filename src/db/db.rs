use super::migrations;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

/// Database file created in the working directory.
pub const DB_FILE_NAME: &str = "database.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens (creating if missing) the task database in the working directory
    /// and brings its schema up to date.
    pub fn new() -> Result<Db> {
        Self::open(DB_FILE_NAME)
    }

    /// Opens the database at an explicit path. Migration failures are logged
    /// by the migration runner and do not prevent the connection from being
    /// handed out; requests against a stale schema fail individually.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        migrations::init_with_migrations(&mut conn);
        Ok(Db { conn })
    }

    /// Opens a connection without touching the schema. Used by migration
    /// tests to stage legacy database layouts.
    pub fn open_without_migrations<P: AsRef<Path>>(path: P) -> Result<Connection> {
        Ok(Connection::open(path)?)
    }
}
