pub mod schema;

pub mod category;
pub mod product;
pub mod seed;

use shopkeep_core::ServiceError;
use shopkeep_sql::SQLStore;

/// Maximum length of a category or product name, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Catalog service — owns the SQL store and implements the business logic.
///
/// One instance is shared across requests behind an `Arc`; every
/// operation is a single statement against the store.
pub struct CatalogService {
    pub(crate) sql: Box<dyn SQLStore>,
}

impl CatalogService {
    pub fn new(sql: Box<dyn SQLStore>) -> Result<Self, ServiceError> {
        schema::init_schema(sql.as_ref())?;
        Ok(Self { sql })
    }

    /// Validate a required name field before any store write.
    ///
    /// Returns the trimmed name on success.
    pub(crate) fn validate_name(kind: &str, name: &str) -> Result<String, ServiceError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ServiceError::Validation(format!("{kind} name is required")));
        }
        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(ServiceError::Validation(format!(
                "{kind} name must be at most {MAX_NAME_LEN} characters"
            )));
        }
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
pub(crate) fn test_service() -> CatalogService {
    let store = shopkeep_sql::SqliteStore::open_in_memory().unwrap();
    CatalogService::new(Box::new(store)).unwrap()
}
