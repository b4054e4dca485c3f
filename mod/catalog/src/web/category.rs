//! Category pages — list, detail, create/edit forms, delete confirm.

use axum::Router;
use axum::extract::{Form, Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use serde::Deserialize;

use shopkeep_core::ServiceError;

use crate::model::Category;
use super::pages::{error_banner, escape, render};
use super::{AppState, PageError};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(index))
        .route("/categories/new", get(new_form).post(create))
        .route("/categories/{id}", get(detail))
        .route("/categories/{id}/edit", get(edit_form).post(update))
        .route("/categories/{id}/delete", get(delete_confirm).post(destroy))
}

#[derive(Deserialize)]
struct CategoryForm {
    name: String,
}

async fn index(State(svc): State<AppState>) -> Result<Html<String>, PageError> {
    let categories = svc.list_categories()?;
    Ok(Html(render_index(&categories)))
}

async fn detail(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let category = svc.get_category(id)?;
    Ok(Html(render_detail(&category)))
}

async fn new_form() -> Html<String> {
    Html(render_form("/categories/new", "New Category", "", None))
}

async fn create(
    State(svc): State<AppState>,
    Form(form): Form<CategoryForm>,
) -> Response {
    match svc.create_category(&form.name) {
        Ok(_) => Redirect::to("/categories").into_response(),
        Err(err) => Html(render_form(
            "/categories/new",
            "New Category",
            &form.name,
            Some(&err.to_string()),
        ))
        .into_response(),
    }
}

async fn edit_form(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let category = svc.get_category(id)?;
    Ok(Html(render_form(
        &format!("/categories/{id}/edit"),
        "Edit Category",
        &category.name,
        None,
    )))
}

async fn update(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<CategoryForm>,
) -> Response {
    match svc.update_category(id, &form.name) {
        Ok(_) => Redirect::to("/categories").into_response(),
        Err(err @ ServiceError::NotFound(_)) => PageError(err).into_response(),
        Err(err) => Html(render_form(
            &format!("/categories/{id}/edit"),
            "Edit Category",
            &form.name,
            Some(&err.to_string()),
        ))
        .into_response(),
    }
}

async fn delete_confirm(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let category = svc.get_category(id)?;
    let dependents = svc.count_products_in_category(id)?;
    Ok(Html(render_delete_confirm(&category, dependents, None)))
}

async fn destroy(State(svc): State<AppState>, Path(id): Path<i64>) -> Response {
    match svc.delete_category(id) {
        Ok(()) => Redirect::to("/categories").into_response(),
        Err(err @ ServiceError::NotFound(_)) => PageError(err).into_response(),
        Err(err) => {
            // Re-render the confirm page with the failure message.
            let category = match svc.get_category(id) {
                Ok(c) => c,
                Err(e) => return PageError(e).into_response(),
            };
            let dependents = svc.count_products_in_category(id).unwrap_or(0);
            Html(render_delete_confirm(
                &category,
                dependents,
                Some(&err.to_string()),
            ))
            .into_response()
        }
    }
}

// ── Rendering ──

fn render_index(categories: &[Category]) -> String {
    let mut body = String::from("<h1>Categories</h1>\n");
    body.push_str("<p><a href=\"/categories/new\">New category</a></p>\n");

    if categories.is_empty() {
        body.push_str("<p class=\"muted\">No categories yet.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>Id</th><th>Name</th><th></th></tr>\n");
        for c in categories {
            body.push_str(&format!(
                "<tr><td>{id}</td><td><a href=\"/categories/{id}\">{name}</a></td>\
                 <td class=\"actions\"><a href=\"/categories/{id}/edit\">Edit</a>\
                 <a href=\"/categories/{id}/delete\">Delete</a></td></tr>\n",
                id = c.id,
                name = escape(&c.name),
            ));
        }
        body.push_str("</table>\n");
    }

    render("Categories", &body)
}

fn render_detail(category: &Category) -> String {
    let content = format!(
        "<h1>{name}</h1>\n\
         <p class=\"muted\">Category #{id}</p>\n\
         <p>Created: {created}<br>Updated: {updated}</p>\n\
         <p class=\"actions\"><a href=\"/categories/{id}/edit\">Edit</a>\
         <a href=\"/categories/{id}/delete\">Delete</a>\
         <a href=\"/categories\">Back to list</a></p>\n",
        name = escape(&category.name),
        id = category.id,
        created = escape(&category.created_at),
        updated = escape(&category.updated_at),
    );
    render(&category.name, &content)
}

fn render_form(action: &str, heading: &str, name: &str, error: Option<&str>) -> String {
    let content = format!(
        "<h1>{heading}</h1>\n{banner}\
         <form method=\"post\" action=\"{action}\">\n\
         <p><label for=\"name\">Name</label>\n\
         <input type=\"text\" id=\"name\" name=\"name\" value=\"{value}\" maxlength=\"100\"></p>\n\
         <p><button type=\"submit\">Save</button> <a href=\"/categories\">Cancel</a></p>\n\
         </form>\n",
        heading = escape(heading),
        banner = error_banner(error),
        action = escape(action),
        value = escape(name),
    );
    render(heading, &content)
}

fn render_delete_confirm(category: &Category, dependents: i64, error: Option<&str>) -> String {
    let warning = if dependents > 0 {
        format!(
            "<p class=\"danger\">This category still has {dependents} product(s); \
             the delete will be refused.</p>\n"
        )
    } else {
        String::new()
    };
    let content = format!(
        "<h1>Delete Category</h1>\n{banner}\
         <p>Delete category <strong>{name}</strong> (#{id})?</p>\n{warning}\
         <form method=\"post\" action=\"/categories/{id}/delete\">\n\
         <p><button type=\"submit\">Delete</button> <a href=\"/categories\">Cancel</a></p>\n\
         </form>\n",
        banner = error_banner(error),
        name = escape(&category.name),
        id = category.id,
        warning = warning,
    );
    render("Delete Category", &content)
}
