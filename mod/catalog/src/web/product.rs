//! Product pages — paginated list, detail, create/edit forms, delete
//! confirm, and the ad-hoc seed diagnostic.

use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use shopkeep_core::ServiceError;

use crate::model::{Category, ProductDetail, ProductPage};
use super::pages::{error_banner, escape, render};
use super::{AppState, PageError};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(index))
        .route("/products/new", get(new_form).post(create))
        .route("/products/seed", get(seed))
        .route("/products/{id}", get(detail))
        .route("/products/{id}/edit", get(edit_form).post(update))
        .route("/products/{id}/delete", get(delete_confirm).post(destroy))
}

#[derive(Deserialize)]
struct ListQuery {
    #[serde(default = "default_page")]
    page: i64,
}

fn default_page() -> i64 {
    1
}

#[derive(Deserialize)]
struct ProductForm {
    name: String,
    category_id: i64,
}

async fn index(
    State(svc): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, PageError> {
    let page = svc.list_products(query.page)?;
    Ok(Html(render_index(&page)))
}

async fn detail(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let product = svc.get_product(id)?;
    Ok(Html(render_detail(&product)))
}

async fn new_form(State(svc): State<AppState>) -> Result<Html<String>, PageError> {
    let categories = svc.list_categories()?;
    Ok(Html(render_form(
        "/products/new",
        "New Product",
        "",
        0,
        &categories,
        None,
    )))
}

async fn create(
    State(svc): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Response {
    match svc.create_product(&form.name, form.category_id) {
        Ok(_) => Redirect::to("/products").into_response(),
        Err(err) => {
            let categories = match svc.list_categories() {
                Ok(c) => c,
                Err(e) => return PageError(e).into_response(),
            };
            Html(render_form(
                "/products/new",
                "New Product",
                &form.name,
                form.category_id,
                &categories,
                Some(&err.to_string()),
            ))
            .into_response()
        }
    }
}

async fn edit_form(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let detail = svc.get_product(id)?;
    let categories = svc.list_categories()?;
    Ok(Html(render_form(
        &format!("/products/{id}/edit"),
        "Edit Product",
        &detail.product.name,
        detail.product.category_id,
        &categories,
        None,
    )))
}

async fn update(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ProductForm>,
) -> Response {
    match svc.update_product(id, &form.name, form.category_id) {
        Ok(_) => Redirect::to("/products").into_response(),
        Err(err @ ServiceError::NotFound(_)) => PageError(err).into_response(),
        Err(err) => {
            let categories = match svc.list_categories() {
                Ok(c) => c,
                Err(e) => return PageError(e).into_response(),
            };
            Html(render_form(
                &format!("/products/{id}/edit"),
                "Edit Product",
                &form.name,
                form.category_id,
                &categories,
                Some(&err.to_string()),
            ))
            .into_response()
        }
    }
}

async fn delete_confirm(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let detail = svc.get_product(id)?;
    Ok(Html(render_delete_confirm(&detail, None)))
}

async fn destroy(State(svc): State<AppState>, Path(id): Path<i64>) -> Response {
    match svc.delete_product(id) {
        Ok(()) => Redirect::to("/products").into_response(),
        Err(err @ ServiceError::NotFound(_)) => PageError(err).into_response(),
        Err(err) => {
            let detail = match svc.get_product(id) {
                Ok(d) => d,
                Err(e) => return PageError(e).into_response(),
            };
            Html(render_delete_confirm(&detail, Some(&err.to_string()))).into_response()
        }
    }
}

/// Ad-hoc diagnostic: populate demo data for pagination testing.
/// Responds with a JSON success/error envelope rather than a page.
async fn seed(State(svc): State<AppState>) -> Json<serde_json::Value> {
    match svc.seed_demo_data() {
        Ok(outcome) => Json(serde_json::json!({
            "success": true,
            "message": format!(
                "Demo data ready: {} product(s) total",
                outcome.total_products
            ),
        })),
        Err(err) => Json(serde_json::json!({
            "success": false,
            "error": err.to_string(),
        })),
    }
}

// ── Rendering ──

fn render_index(page: &ProductPage) -> String {
    let mut body = String::from("<h1>Products</h1>\n");
    body.push_str("<p><a href=\"/products/new\">New product</a></p>\n");

    if page.items.is_empty() {
        body.push_str("<p class=\"muted\">No products yet.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>Id</th><th>Name</th><th>Category</th><th></th></tr>\n");
        for p in &page.items {
            let category = match &p.category_name {
                Some(name) => escape(name),
                None => "<span class=\"muted\">—</span>".to_string(),
            };
            body.push_str(&format!(
                "<tr><td>{id}</td><td><a href=\"/products/{id}\">{name}</a></td>\
                 <td>{category}</td>\
                 <td class=\"actions\"><a href=\"/products/{id}/edit\">Edit</a>\
                 <a href=\"/products/{id}/delete\">Delete</a></td></tr>\n",
                id = p.id,
                name = escape(&p.name),
                category = category,
            ));
        }
        body.push_str("</table>\n");
    }

    body.push_str(&render_pager(page));
    render("Products", &body)
}

fn render_pager(page: &ProductPage) -> String {
    let pg = &page.pagination;
    let prev = if pg.has_prev() {
        format!("<a href=\"/products?page={}\">&laquo; Prev</a>", pg.page - 1)
    } else {
        "<span class=\"muted\">&laquo; Prev</span>".to_string()
    };
    let next = if pg.has_next() {
        format!("<a href=\"/products?page={}\">Next &raquo;</a>", pg.page + 1)
    } else {
        "<span class=\"muted\">Next &raquo;</span>".to_string()
    };
    format!(
        "<div class=\"pager\">{prev}<span>Page {page} of {count}</span>{next}\
         <span class=\"muted\">{total} record(s)</span></div>\n",
        prev = prev,
        page = pg.page,
        count = pg.page_count,
        next = next,
        total = pg.total_records,
    )
}

fn render_detail(detail: &ProductDetail) -> String {
    let p = &detail.product;
    let category = match &detail.category_name {
        Some(name) => format!(
            "<a href=\"/categories/{}\">{}</a>",
            p.category_id,
            escape(name)
        ),
        None => "<span class=\"muted\">—</span>".to_string(),
    };
    let content = format!(
        "<h1>{name}</h1>\n\
         <p class=\"muted\">Product #{id}</p>\n\
         <p>Category: {category}</p>\n\
         <p>Created: {created}<br>Updated: {updated}</p>\n\
         <p class=\"actions\"><a href=\"/products/{id}/edit\">Edit</a>\
         <a href=\"/products/{id}/delete\">Delete</a>\
         <a href=\"/products\">Back to list</a></p>\n",
        name = escape(&p.name),
        id = p.id,
        category = category,
        created = escape(&p.created_at),
        updated = escape(&p.updated_at),
    );
    render(&p.name, &content)
}

fn render_form(
    action: &str,
    heading: &str,
    name: &str,
    selected_category: i64,
    categories: &[Category],
    error: Option<&str>,
) -> String {
    let mut options = String::from("<option value=\"0\">-- select a category --</option>\n");
    for c in categories {
        let selected = if c.id == selected_category { " selected" } else { "" };
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            c.id,
            selected,
            escape(&c.name),
        ));
    }

    let content = format!(
        "<h1>{heading}</h1>\n{banner}\
         <form method=\"post\" action=\"{action}\">\n\
         <p><label for=\"name\">Name</label>\n\
         <input type=\"text\" id=\"name\" name=\"name\" value=\"{value}\" maxlength=\"100\"></p>\n\
         <p><label for=\"category_id\">Category</label>\n\
         <select id=\"category_id\" name=\"category_id\">\n{options}</select></p>\n\
         <p><button type=\"submit\">Save</button> <a href=\"/products\">Cancel</a></p>\n\
         </form>\n",
        heading = escape(heading),
        banner = error_banner(error),
        action = escape(action),
        value = escape(name),
        options = options,
    );
    render(heading, &content)
}

fn render_delete_confirm(detail: &ProductDetail, error: Option<&str>) -> String {
    let p = &detail.product;
    let category = detail
        .category_name
        .as_deref()
        .map(escape)
        .unwrap_or_else(|| "—".to_string());
    let content = format!(
        "<h1>Delete Product</h1>\n{banner}\
         <p>Delete product <strong>{name}</strong> (#{id}, category {category})?</p>\n\
         <form method=\"post\" action=\"/products/{id}/delete\">\n\
         <p><button type=\"submit\">Delete</button> <a href=\"/products\">Cancel</a></p>\n\
         </form>\n",
        banner = error_banner(error),
        name = escape(&p.name),
        id = p.id,
        category = category,
    );
    render("Delete Product", &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductListing};
    use shopkeep_core::Pagination;

    fn listing_page(total: usize, page_no: i64) -> ProductPage {
        let pagination = Pagination::for_page(page_no, total, 10);
        let items = (1..=pagination.limit().min(total))
            .map(|i| ProductListing {
                id: i as i64,
                name: format!("Item {i}"),
                category_id: 1,
                category_name: Some("Bulk".into()),
            })
            .collect();
        ProductPage { items, pagination }
    }

    fn sample_detail() -> ProductDetail {
        ProductDetail {
            product: Product {
                id: 7,
                name: "Hammer <XL>".into(),
                category_id: 2,
                created_at: "2026-01-01T00:00:00+00:00".into(),
                updated_at: "2026-01-01T00:00:00+00:00".into(),
            },
            category_name: Some("Tools".into()),
        }
    }

    #[test]
    fn index_shows_pager_state() {
        let page = render_index(&listing_page(25, 2));
        assert!(page.contains("Page 2 of 3"));
        assert!(page.contains("href=\"/products?page=1\""));
        assert!(page.contains("href=\"/products?page=3\""));
        assert!(page.contains("25 record(s)"));
    }

    #[test]
    fn first_page_has_no_prev_link() {
        let page = render_index(&listing_page(25, 1));
        assert!(!page.contains("href=\"/products?page=0\""));
        assert!(page.contains("href=\"/products?page=2\""));
    }

    #[test]
    fn last_page_has_no_next_link() {
        let page = render_index(&listing_page(25, 3));
        assert!(!page.contains("href=\"/products?page=4\""));
        assert!(page.contains("href=\"/products?page=2\""));
    }

    #[test]
    fn detail_escapes_name_and_links_category() {
        let page = render_detail(&sample_detail());
        assert!(page.contains("Hammer &lt;XL&gt;"));
        assert!(page.contains("href=\"/categories/2\""));
        assert!(page.contains("Tools"));
    }

    #[test]
    fn detail_renders_placeholder_for_orphan() {
        let mut detail = sample_detail();
        detail.category_name = None;
        let page = render_detail(&detail);
        assert!(page.contains("—"));
    }

    #[test]
    fn form_preselects_category_and_retains_name() {
        let categories = vec![
            Category {
                id: 1,
                name: "Books".into(),
                created_at: String::new(),
                updated_at: String::new(),
            },
            Category {
                id: 2,
                name: "Tools".into(),
                created_at: String::new(),
                updated_at: String::new(),
            },
        ];
        let page = render_form(
            "/products/new",
            "New Product",
            "Draft name",
            2,
            &categories,
            Some("product name is required"),
        );
        assert!(page.contains("value=\"Draft name\""));
        assert!(page.contains("<option value=\"2\" selected>Tools</option>"));
        assert!(page.contains("<option value=\"1\">Books</option>"));
        assert!(page.contains("product name is required"));
    }
}
