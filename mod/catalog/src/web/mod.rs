pub mod pages;

pub mod category;
pub mod product;

use std::sync::Arc;

use axum::Router;
use axum::response::{Html, IntoResponse, Response};

use shopkeep_core::ServiceError;

use crate::service::CatalogService;

/// Shared handler state.
pub type AppState = Arc<CatalogService>;

/// Build the catalog web router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(category::routes())
        .merge(product::routes())
        .with_state(state)
}

/// A service error rendered as an HTML page.
///
/// Used by the page GET handlers; form POST handlers re-render their
/// form with the error message instead.
pub struct PageError(pub ServiceError);

impl From<ServiceError> for PageError {
    fn from(err: ServiceError) -> Self {
        PageError(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        let body = pages::error_page(status, &self.0.to_string());
        (status, Html(body)).into_response()
    }
}
