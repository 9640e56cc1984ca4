use cmdbook_types::StoreResult;
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// Shared handle to the SQLite database backing the command store.
///
/// Single process, single connection; the mutex only guards against
/// accidental concurrent use from within this process.
#[derive(Clone, Debug)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
}

impl Db {
    pub fn new(path: PathBuf) -> StoreResult<Self> {
        debug!("opening command database at {:?}", path);
        let conn = Connection::open(path)?;

        let db = Db {
            conn: Arc::new(Mutex::new(conn)),
        };

        db.init_schema()?;

        Ok(db)
    }

    fn init_schema(&self) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();

        conn.execute(
            "CREATE TABLE IF NOT EXISTS command (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                alias TEXT,
                command TEXT,
                tags TEXT,
                note TEXT,
                last_used INTEGER
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_command_last_used ON command(last_used DESC)",
            [],
        )?;

        Ok(())
    }

    pub fn get_connection(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap()
    }
}
