use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;
use rusqlite::types::ValueRef;

use crate::error::SQLError;
use crate::traits::{Row, SQLStore, Value};

/// SqliteStore is a SQLStore implementation backed by rusqlite (bundled SQLite).
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create a SQLite database at the given path.
    pub fn open(path: &Path) -> Result<Self, SQLError> {
        let conn = Connection::open(path)
            .map_err(|e| SQLError::Connection(e.to_string()))?;

        // Enable WAL mode for better concurrent read performance.
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|e| SQLError::Connection(e.to_string()))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory SQLite database (useful for tests).
    pub fn open_in_memory() -> Result<Self, SQLError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| SQLError::Connection(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

/// Convert our Value enum to rusqlite's ToSql.
fn bind_params(params: &[Value]) -> Vec<Box<dyn rusqlite::types::ToSql + '_>> {
    params
        .iter()
        .map(|v| -> Box<dyn rusqlite::types::ToSql + '_> {
            match v {
                Value::Null => Box::new(rusqlite::types::Null),
                Value::Integer(i) => Box::new(*i),
                Value::Real(f) => Box::new(*f),
                Value::Text(s) => Box::new(s.as_str()),
                Value::Blob(b) => Box::new(b.as_slice()),
            }
        })
        .collect()
}

impl SQLStore for SqliteStore {
    fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, SQLError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| SQLError::Query(e.to_string()))?;

        let bound = bind_params(params);
        let param_refs: Vec<&dyn rusqlite::types::ToSql> =
            bound.iter().map(|b| b.as_ref()).collect();

        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| SQLError::Query(e.to_string()))?;

        let column_names: Vec<String> = stmt
            .column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let rows = stmt
            .query_map(param_refs.as_slice(), |row| {
                let mut columns = Vec::new();
                for (i, name) in column_names.iter().enumerate() {
                    columns.push((name.clone(), value_at(row, i)));
                }
                Ok(Row { columns })
            })
            .map_err(|e| SQLError::Query(e.to_string()))?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row.map_err(|e| SQLError::Query(e.to_string()))?);
        }
        Ok(result)
    }

    fn exec(&self, sql: &str, params: &[Value]) -> Result<u64, SQLError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| SQLError::Execution(e.to_string()))?;

        let bound = bind_params(params);
        let param_refs: Vec<&dyn rusqlite::types::ToSql> =
            bound.iter().map(|b| b.as_ref()).collect();

        let affected = conn
            .execute(sql, param_refs.as_slice())
            .map_err(|e| SQLError::Execution(e.to_string()))?;

        Ok(affected as u64)
    }

    fn insert(&self, sql: &str, params: &[Value]) -> Result<i64, SQLError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| SQLError::Execution(e.to_string()))?;

        let bound = bind_params(params);
        let param_refs: Vec<&dyn rusqlite::types::ToSql> =
            bound.iter().map(|b| b.as_ref()).collect();

        conn.execute(sql, param_refs.as_slice())
            .map_err(|e| SQLError::Execution(e.to_string()))?;

        Ok(conn.last_insert_rowid())
    }
}

/// Extract a Value from a rusqlite row at a given column index.
fn value_at(row: &rusqlite::Row, idx: usize) -> Value {
    match row.get_ref(idx) {
        Ok(ValueRef::Integer(i)) => Value::Integer(i),
        Ok(ValueRef::Real(f)) => Value::Real(f),
        Ok(ValueRef::Text(t)) => Value::Text(String::from_utf8_lossy(t).into_owned()),
        Ok(ValueRef::Blob(b)) => Value::Blob(b.to_vec()),
        Ok(ValueRef::Null) | Err(_) => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_table() -> SqliteStore {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .exec(
                "CREATE TABLE things (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL)",
                &[],
            )
            .unwrap();
        store
    }

    #[test]
    fn insert_returns_generated_rowid() {
        let store = store_with_table();
        let a = store
            .insert("INSERT INTO things (name) VALUES (?1)", &[Value::Text("a".into())])
            .unwrap();
        let b = store
            .insert("INSERT INTO things (name) VALUES (?1)", &[Value::Text("b".into())])
            .unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[test]
    fn query_roundtrip() {
        let store = store_with_table();
        store
            .insert("INSERT INTO things (name) VALUES (?1)", &[Value::Text("widget".into())])
            .unwrap();

        let rows = store
            .query("SELECT id, name FROM things WHERE id = ?1", &[Value::Integer(1)])
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get_i64("id"), Some(1));
        assert_eq!(rows[0].get_str("name"), Some("widget"));
    }

    #[test]
    fn exec_reports_affected_rows() {
        let store = store_with_table();
        for name in ["a", "b", "c"] {
            store
                .insert("INSERT INTO things (name) VALUES (?1)", &[Value::Text(name.into())])
                .unwrap();
        }
        let affected = store
            .exec("UPDATE things SET name = ?1 WHERE id > ?2", &[Value::Text("x".into()), Value::Integer(1)])
            .unwrap();
        assert_eq!(affected, 2);

        let deleted = store.exec("DELETE FROM things WHERE id = ?1", &[Value::Integer(99)]).unwrap();
        assert_eq!(deleted, 0);
    }

    #[test]
    fn null_columns_come_back_null() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .exec("CREATE TABLE t (id INTEGER PRIMARY KEY, note TEXT)", &[])
            .unwrap();
        store
            .insert("INSERT INTO t (note) VALUES (?1)", &[Value::Null])
            .unwrap();
        let rows = store.query("SELECT note FROM t", &[]).unwrap();
        assert!(matches!(rows[0].get("note"), Some(Value::Null)));
    }

    #[test]
    fn open_on_disk_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.sqlite");
        {
            let store = SqliteStore::open(&path).unwrap();
            store
                .exec("CREATE TABLE t (id INTEGER PRIMARY KEY, name TEXT)", &[])
                .unwrap();
            store
                .insert("INSERT INTO t (name) VALUES (?1)", &[Value::Text("kept".into())])
                .unwrap();
        }
        let store = SqliteStore::open(&path).unwrap();
        let rows = store.query("SELECT name FROM t", &[]).unwrap();
        assert_eq!(rows[0].get_str("name"), Some("kept"));
    }
}
