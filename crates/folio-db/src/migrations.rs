use anyhow::Result;
use rusqlite::Connection;
use tracing::debug;

/// Create the submissions table if it does not exist yet. Safe to call on
/// every startup.
pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS messages (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            email       TEXT NOT NULL,
            message     TEXT NOT NULL
        );
        ",
    )?;

    debug!("Database schema ensured");
    Ok(())
}
