//! The single authority over persisted command records.

use crate::db::Db;
use crate::query::{Predicate, SearchFilters};
use chrono::Local;
use cmdbook_types::{Command, StoreError, StoreResult};
use rusqlite::{Row, params, params_from_iter};
use tracing::debug;

const SELECT_COLUMNS: &str = "id, alias, command, tags, note, last_used";

fn command_from_row(row: &Row) -> rusqlite::Result<Command> {
    Ok(Command {
        id: row.get(0)?,
        alias: row.get(1)?,
        command: row.get(2)?,
        tags: row.get(3)?,
        note: row.get(4)?,
        last_used: row.get(5)?,
    })
}

/// CRUD operations and search over the command table. Every operation is a
/// short-lived prepared statement; no transaction spans two operations.
#[derive(Clone, Debug)]
pub struct CommandStore {
    db: Db,
}

impl CommandStore {
    pub fn new(db: Db) -> Self {
        CommandStore { db }
    }

    /// Insert a new command and return its assigned id. An empty alias
    /// falls back to the command text so no record is stored without a
    /// display name.
    pub fn add(&self, alias: &str, command: &str, tags: &str, note: &str) -> StoreResult<i64> {
        if command.trim().is_empty() {
            return Err(StoreError::InvalidArgument(
                "command text cannot be empty".to_string(),
            ));
        }
        let alias = if alias.is_empty() { command } else { alias };
        let last_used = Local::now().timestamp();

        let conn = self.db.get_connection();
        conn.execute(
            "INSERT INTO command (alias, command, tags, note, last_used)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![alias, command, tags, note, last_used],
        )?;
        let id = conn.last_insert_rowid();
        debug!("added command #{id} ({alias})");
        Ok(id)
    }

    pub fn get_by_id(&self, id: i64) -> StoreResult<Command> {
        let conn = self.db.get_connection();
        let mut stmt =
            conn.prepare(&format!("SELECT {SELECT_COLUMNS} FROM command WHERE id = ?1"))?;
        stmt.query_row([id], command_from_row).map_err(|err| match err {
            rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound(id),
            other => StoreError::Storage(other),
        })
    }

    /// Run the filter predicate against storage. Matching nothing is an
    /// empty result, not an error; an all-empty filter set never reaches
    /// the database.
    pub fn search(&self, filters: &SearchFilters) -> StoreResult<Vec<Command>> {
        let predicate = Predicate::build(filters)?;

        let conn = self.db.get_connection();
        let mut stmt = conn.prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM command WHERE {}",
            predicate.clause()
        ))?;
        let rows = stmt.query_map(params_from_iter(predicate.params()), command_from_row)?;
        let commands = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        debug!("search matched {} commands", commands.len());
        Ok(commands)
    }

    /// Return up to `limit` commands, most recently used first when
    /// `order_by_recency` is set, in insertion order otherwise. Recency
    /// ties break on id so the order is total.
    pub fn list_all(&self, limit: i64, order_by_recency: bool) -> StoreResult<Vec<Command>> {
        if limit <= 0 {
            return Err(StoreError::InvalidArgument(format!(
                "limit must be positive, got {limit}"
            )));
        }

        let conn = self.db.get_connection();
        let sql = if order_by_recency {
            format!(
                "SELECT {SELECT_COLUMNS} FROM command
                 ORDER BY last_used DESC, id DESC LIMIT ?1"
            )
        } else {
            format!("SELECT {SELECT_COLUMNS} FROM command ORDER BY id LIMIT ?1")
        };
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([limit], command_from_row)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(Into::into)
    }

    /// Replace every mutable field and refresh the usage timestamp. The
    /// single UPDATE keeps the replacement atomic as observed by readers.
    pub fn update_by_id(
        &self,
        id: i64,
        alias: &str,
        command: &str,
        tags: &str,
        note: &str,
    ) -> StoreResult<()> {
        if command.trim().is_empty() {
            return Err(StoreError::InvalidArgument(
                "command text cannot be empty".to_string(),
            ));
        }
        let alias = if alias.is_empty() { command } else { alias };
        let last_used = Local::now().timestamp();

        let conn = self.db.get_connection();
        let changed = conn.execute(
            "UPDATE command SET alias = ?1, command = ?2, tags = ?3, note = ?4, last_used = ?5
             WHERE id = ?6",
            params![alias, command, tags, note, last_used, id],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        debug!("updated command #{id}");
        Ok(())
    }

    /// Stamp the record as used now, leaving every other field untouched.
    /// Invoked once per user selection, not per search.
    pub fn touch_last_used(&self, id: Option<i64>) -> StoreResult<()> {
        let id = id.ok_or_else(|| {
            StoreError::InvalidArgument("cannot touch a command without an id".to_string())
        })?;
        let last_used = Local::now().timestamp();

        let conn = self.db.get_connection();
        let changed = conn.execute(
            "UPDATE command SET last_used = ?1 WHERE id = ?2",
            params![last_used, id],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    /// Remove a record permanently. The existence read runs first so a
    /// missing id reports `NotFound` rather than being inferred from the
    /// affected-row count; the check/delete pair is not transactional.
    pub fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        self.get_by_id(id)?;

        let conn = self.db.get_connection();
        conn.execute("DELETE FROM command WHERE id = ?1", [id])?;
        debug!("deleted command #{id}");
        Ok(())
    }
}
