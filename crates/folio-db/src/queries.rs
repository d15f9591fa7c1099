use crate::Database;
use crate::models::MessageRow;
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension, Row};

impl Database {
    /// Append one submission and return its assigned id.
    pub fn insert_message(&self, name: &str, email: &str, message: &str) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO messages (name, email, message) VALUES (?1, ?2, ?3)",
                (name, email, message),
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn get_message(&self, id: i64) -> Result<Option<MessageRow>> {
        self.with_conn(|conn| query_message(conn, id))
    }

    /// All submissions, oldest first.
    pub fn list_messages(&self) -> Result<Vec<MessageRow>> {
        self.with_conn(query_messages)
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<MessageRow> {
    Ok(MessageRow {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        message: row.get(3)?,
    })
}

fn query_message(conn: &Connection, id: i64) -> Result<Option<MessageRow>> {
    let row = conn
        .query_row(
            "SELECT id, name, email, message FROM messages WHERE id = ?1",
            [id],
            map_row,
        )
        .optional()?;

    Ok(row)
}

fn query_messages(conn: &Connection) -> Result<Vec<MessageRow>> {
    let mut stmt = conn.prepare("SELECT id, name, email, message FROM messages ORDER BY id ASC")?;

    let rows = stmt
        .query_map([], map_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_read_back() {
        let db = Database::open_in_memory().unwrap();
        let id = db.insert_message("Ada", "ada@example.test", "Hello!").unwrap();

        let row = db.get_message(id).unwrap().unwrap();
        assert_eq!(row.name, "Ada");
        assert_eq!(row.email, "ada@example.test");
        assert_eq!(row.message, "Hello!");
    }

    #[test]
    fn ids_increase_monotonically() {
        let db = Database::open_in_memory().unwrap();
        let first = db.insert_message("a", "a@x", "1").unwrap();
        let second = db.insert_message("b", "b@x", "2").unwrap();
        assert!(second > first);

        let rows = db.list_messages().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, first);
        assert_eq!(rows[1].message, "2");
    }

    #[test]
    fn missing_id_is_none() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.get_message(42).unwrap().is_none());
    }

    #[test]
    fn file_backed_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.db");

        {
            let db = Database::open(&path).unwrap();
            db.insert_message("Grace", "grace@example.test", "Persisted").unwrap();
        }

        let db = Database::open(&path).unwrap();
        let rows = db.list_messages().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Grace");
    }
}
