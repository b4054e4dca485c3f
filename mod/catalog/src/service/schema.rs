use shopkeep_core::ServiceError;
use shopkeep_sql::SQLStore;

/// SQL DDL statements to initialize the catalog schema.
///
/// Two plain relational tables; products reference categories by id.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        category_id INTEGER NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_products_category ON products(category_id)",
];

pub(crate) fn init_schema(sql: &dyn SQLStore) -> Result<(), ServiceError> {
    for stmt in SCHEMA {
        sql.exec(stmt, &[])
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_schema_is_idempotent() {
        let store = shopkeep_sql::SqliteStore::open_in_memory().unwrap();
        init_schema(&store).unwrap();
        init_schema(&store).unwrap();
    }
}
