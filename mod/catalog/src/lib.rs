pub mod model;
pub mod service;
pub mod web;

use std::sync::Arc;

use axum::Router;
use shopkeep_core::Module;

use service::CatalogService;

/// Catalog module — category and product administration.
pub struct CatalogModule {
    service: Arc<CatalogService>,
}

impl CatalogModule {
    pub fn new(service: CatalogService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl Module for CatalogModule {
    fn name(&self) -> &str {
        "catalog"
    }

    fn routes(&self) -> Router {
        web::router(self.service.clone())
    }
}
