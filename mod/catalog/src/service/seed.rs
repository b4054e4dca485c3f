//! Demo-data seeding, backing the ad-hoc `/products/seed` diagnostic.

use shopkeep_core::ServiceError;
use tracing::info;

use super::CatalogService;

/// Categories created when the category table is empty.
const SEED_CATEGORIES: &[&str] = &["Electronics", "Books", "Clothing", "Sports", "Food"];

/// Products are topped up to this many rows...
const SEED_PRODUCT_TARGET: usize = 30;

/// ...but only when fewer than this many already exist.
const SEED_PRODUCT_THRESHOLD: usize = 25;

/// What a seeding run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOutcome {
    pub categories_created: usize,
    pub products_created: usize,
    pub total_products: usize,
}

impl CatalogService {
    /// Populate demo data for pagination testing.
    ///
    /// Creates the fixed category set when none exist, then tops the
    /// product table up to `SEED_PRODUCT_TARGET` rows when fewer than
    /// `SEED_PRODUCT_THRESHOLD` exist, assigning categories
    /// round-robin. Safe to call repeatedly.
    pub fn seed_demo_data(&self) -> Result<SeedOutcome, ServiceError> {
        let mut categories = self.list_categories()?;
        let mut categories_created = 0;
        if categories.is_empty() {
            for name in SEED_CATEGORIES {
                self.create_category(name)?;
                categories_created += 1;
            }
            categories = self.list_categories()?;
        }

        let existing = self.count_products()?;
        let mut products_created = 0;
        if existing < SEED_PRODUCT_THRESHOLD {
            for i in existing + 1..=SEED_PRODUCT_TARGET {
                let category = &categories[(i - 1) % categories.len()];
                self.create_product(&format!("Test Product {i}"), category.id)?;
                products_created += 1;
            }
        }

        let total_products = self.count_products()?;
        info!(
            categories_created,
            products_created, total_products, "seeded demo data"
        );

        Ok(SeedOutcome {
            categories_created,
            products_created,
            total_products,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_service;
    use super::*;

    #[test]
    fn seed_from_empty_creates_categories_and_products() {
        let svc = test_service();
        let outcome = svc.seed_demo_data().unwrap();
        assert_eq!(outcome.categories_created, SEED_CATEGORIES.len());
        assert_eq!(outcome.products_created, SEED_PRODUCT_TARGET);
        assert_eq!(outcome.total_products, SEED_PRODUCT_TARGET);

        // Every product references an existing category.
        let page = svc.list_products(1).unwrap();
        assert!(page.items.iter().all(|p| p.category_name.is_some()));
    }

    #[test]
    fn seed_is_idempotent_above_threshold() {
        let svc = test_service();
        svc.seed_demo_data().unwrap();
        let second = svc.seed_demo_data().unwrap();
        assert_eq!(second.categories_created, 0);
        assert_eq!(second.products_created, 0);
        assert_eq!(second.total_products, SEED_PRODUCT_TARGET);
    }

    #[test]
    fn seed_tops_up_partial_data() {
        let svc = test_service();
        let c = svc.create_category("Existing").unwrap();
        for i in 1..=3 {
            svc.create_product(&format!("Manual {i}"), c.id).unwrap();
        }

        let outcome = svc.seed_demo_data().unwrap();
        // Categories existed, so none were added.
        assert_eq!(outcome.categories_created, 0);
        assert_eq!(outcome.products_created, SEED_PRODUCT_TARGET - 3);
        assert_eq!(outcome.total_products, SEED_PRODUCT_TARGET);
    }

    #[test]
    fn seed_leaves_enough_data_alone() {
        let svc = test_service();
        let c = svc.create_category("Existing").unwrap();
        for i in 1..=SEED_PRODUCT_THRESHOLD {
            svc.create_product(&format!("Manual {i}"), c.id).unwrap();
        }

        let outcome = svc.seed_demo_data().unwrap();
        assert_eq!(outcome.products_created, 0);
        assert_eq!(outcome.total_products, SEED_PRODUCT_THRESHOLD);
    }
}
