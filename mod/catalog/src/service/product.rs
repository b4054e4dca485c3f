use shopkeep_core::{Pagination, ServiceError, now_rfc3339};
use shopkeep_sql::{Row, Value};

use crate::model::{Product, ProductDetail, ProductListing, ProductPage};
use super::CatalogService;

/// Products shown per page on the list view.
pub const PAGE_SIZE: usize = 10;

fn product_from_row(row: &Row) -> Result<Product, ServiceError> {
    Ok(Product {
        id: row
            .get_i64("id")
            .ok_or_else(|| ServiceError::Internal("missing id column".into()))?,
        name: row
            .get_str("name")
            .ok_or_else(|| ServiceError::Internal("missing name column".into()))?
            .to_string(),
        category_id: row
            .get_i64("category_id")
            .ok_or_else(|| ServiceError::Internal("missing category_id column".into()))?,
        created_at: row.get_str("created_at").unwrap_or_default().to_string(),
        updated_at: row.get_str("updated_at").unwrap_or_default().to_string(),
    })
}

impl CatalogService {
    /// One page of products, id-ordered for stable pagination, with
    /// category names joined in.
    ///
    /// The requested page may be anything the query string held; it is
    /// clamped, never rejected.
    pub fn list_products(&self, requested_page: i64) -> Result<ProductPage, ServiceError> {
        let total = self.count_products()?;
        let pagination = Pagination::for_page(requested_page, total, PAGE_SIZE);

        let rows = self
            .sql
            .query(
                "SELECT p.id, p.name, p.category_id, c.name AS category_name
                 FROM products p LEFT JOIN categories c ON c.id = p.category_id
                 ORDER BY p.id LIMIT ?1 OFFSET ?2",
                &[
                    Value::Integer(pagination.limit() as i64),
                    Value::Integer(pagination.offset() as i64),
                ],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in &rows {
            items.push(ProductListing {
                id: row
                    .get_i64("id")
                    .ok_or_else(|| ServiceError::Internal("missing id column".into()))?,
                name: row
                    .get_str("name")
                    .ok_or_else(|| ServiceError::Internal("missing name column".into()))?
                    .to_string(),
                category_id: row.get_i64("category_id").unwrap_or(0),
                category_name: row.get_str("category_name").map(str::to_string),
            });
        }

        Ok(ProductPage { items, pagination })
    }

    pub fn count_products(&self) -> Result<usize, ServiceError> {
        let rows = self
            .sql
            .query("SELECT COUNT(*) AS cnt FROM products", &[])
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(rows.first().and_then(|r| r.get_i64("cnt")).unwrap_or(0) as usize)
    }

    pub fn get_product(&self, id: i64) -> Result<ProductDetail, ServiceError> {
        let rows = self
            .sql
            .query(
                "SELECT p.id, p.name, p.category_id, p.created_at, p.updated_at,
                        c.name AS category_name
                 FROM products p LEFT JOIN categories c ON c.id = p.category_id
                 WHERE p.id = ?1",
                &[Value::Integer(id)],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        let row = rows
            .first()
            .ok_or_else(|| ServiceError::NotFound(format!("product {id} not found")))?;

        Ok(ProductDetail {
            product: product_from_row(row)?,
            category_name: row.get_str("category_name").map(str::to_string),
        })
    }

    pub fn create_product(&self, name: &str, category_id: i64) -> Result<Product, ServiceError> {
        let name = Self::validate_name("product", name)?;
        self.require_category(category_id)?;
        let now = now_rfc3339();

        let id = self
            .sql
            .insert(
                "INSERT INTO products (name, category_id, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4)",
                &[
                    Value::Text(name.clone()),
                    Value::Integer(category_id),
                    Value::Text(now.clone()),
                    Value::Text(now.clone()),
                ],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        Ok(Product {
            id,
            name,
            category_id,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    pub fn update_product(
        &self,
        id: i64,
        name: &str,
        category_id: i64,
    ) -> Result<Product, ServiceError> {
        let name = Self::validate_name("product", name)?;
        self.require_category(category_id)?;
        let current = self.get_product(id)?;
        let now = now_rfc3339();

        self.sql
            .exec(
                "UPDATE products SET name = ?1, category_id = ?2, updated_at = ?3 WHERE id = ?4",
                &[
                    Value::Text(name.clone()),
                    Value::Integer(category_id),
                    Value::Text(now.clone()),
                    Value::Integer(id),
                ],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;

        Ok(Product {
            id,
            name,
            category_id,
            created_at: current.product.created_at,
            updated_at: now,
        })
    }

    pub fn delete_product(&self, id: i64) -> Result<(), ServiceError> {
        let affected = self
            .sql
            .exec("DELETE FROM products WHERE id = ?1", &[Value::Integer(id)])
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        if affected == 0 {
            return Err(ServiceError::NotFound(format!("product {id} not found")));
        }
        Ok(())
    }

    /// Every product must reference an existing category.
    fn require_category(&self, category_id: i64) -> Result<(), ServiceError> {
        if category_id <= 0 {
            return Err(ServiceError::Validation("a category must be selected".into()));
        }
        let rows = self
            .sql
            .query(
                "SELECT id FROM categories WHERE id = ?1",
                &[Value::Integer(category_id)],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        if rows.is_empty() {
            return Err(ServiceError::Validation(format!(
                "category {category_id} does not exist"
            )));
        }
        Ok(())
    }
}
