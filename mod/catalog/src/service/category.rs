use shopkeep_core::{ServiceError, now_rfc3339};
use shopkeep_sql::{Row, Value};

use crate::model::Category;
use super::CatalogService;

fn category_from_row(row: &Row) -> Result<Category, ServiceError> {
    Ok(Category {
        id: row
            .get_i64("id")
            .ok_or_else(|| ServiceError::Internal("missing id column".into()))?,
        name: row
            .get_str("name")
            .ok_or_else(|| ServiceError::Internal("missing name column".into()))?
            .to_string(),
        created_at: row.get_str("created_at").unwrap_or_default().to_string(),
        updated_at: row.get_str("updated_at").unwrap_or_default().to_string(),
    })
}

impl CatalogService {
    /// All categories, in id order.
    pub fn list_categories(&self) -> Result<Vec<Category>, ServiceError> {
        let rows = self
            .sql
            .query(
                "SELECT id, name, created_at, updated_at FROM categories ORDER BY id",
                &[],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        rows.iter().map(category_from_row).collect()
    }

    pub fn get_category(&self, id: i64) -> Result<Category, ServiceError> {
        let rows = self
            .sql
            .query(
                "SELECT id, name, created_at, updated_at FROM categories WHERE id = ?1",
                &[Value::Integer(id)],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        let row = rows
            .first()
            .ok_or_else(|| ServiceError::NotFound(format!("category {id} not found")))?;
        category_from_row(row)
    }

    pub fn create_category(&self, name: &str) -> Result<Category, ServiceError> {
        let name = Self::validate_name("category", name)?;
        let now = now_rfc3339();

        let id = self
            .sql
            .insert(
                "INSERT INTO categories (name, created_at, updated_at) VALUES (?1, ?2, ?3)",
                &[
                    Value::Text(name.clone()),
                    Value::Text(now.clone()),
                    Value::Text(now.clone()),
                ],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        Ok(Category {
            id,
            name,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    pub fn update_category(&self, id: i64, name: &str) -> Result<Category, ServiceError> {
        let name = Self::validate_name("category", name)?;
        let current = self.get_category(id)?;
        let now = now_rfc3339();

        self.sql
            .exec(
                "UPDATE categories SET name = ?1, updated_at = ?2 WHERE id = ?3",
                &[
                    Value::Text(name.clone()),
                    Value::Text(now.clone()),
                    Value::Integer(id),
                ],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        Ok(Category {
            id,
            name,
            created_at: current.created_at,
            updated_at: now,
        })
    }

    /// Delete a category.
    ///
    /// Fails with a conflict when products still reference it; nothing
    /// is deleted in that case.
    pub fn delete_category(&self, id: i64) -> Result<(), ServiceError> {
        let dependents = self.count_products_in_category(id)?;
        if dependents > 0 {
            return Err(ServiceError::Conflict(format!(
                "category {id} still has {dependents} product(s); delete or reassign them first"
            )));
        }

        let affected = self
            .sql
            .exec(
                "DELETE FROM categories WHERE id = ?1",
                &[Value::Integer(id)],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        if affected == 0 {
            return Err(ServiceError::NotFound(format!("category {id} not found")));
        }
        Ok(())
    }

    /// Number of products referencing the given category.
    pub fn count_products_in_category(&self, category_id: i64) -> Result<i64, ServiceError> {
        let rows = self
            .sql
            .query(
                "SELECT COUNT(*) AS cnt FROM products WHERE category_id = ?1",
                &[Value::Integer(category_id)],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(rows.first().and_then(|r| r.get_i64("cnt")).unwrap_or(0))
    }
}
