//! Shared page-rendering helpers.
//!
//! Pages are built server-side by substituting content into the
//! embedded shell in `layout.html`.

use axum::http::StatusCode;

/// Render a full page from the embedded layout.
pub(crate) fn render(title: &str, content: &str) -> String {
    include_str!("layout.html")
        .replace("{{title}}", &escape(title))
        .replace("{{content}}", content)
}

/// Escape user-supplied text for embedding in HTML.
pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// An error banner fragment, or nothing.
pub(crate) fn error_banner(error: Option<&str>) -> String {
    match error {
        Some(msg) => format!("<div class=\"error\">{}</div>\n", escape(msg)),
        None => String::new(),
    }
}

/// A full error page for a failed page request.
pub(crate) fn error_page(status: StatusCode, message: &str) -> String {
    let title = if status == StatusCode::NOT_FOUND {
        "Not Found"
    } else {
        "Error"
    };
    let content = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/products\">Back to products</a></p>\n",
        escape(title),
        escape(message),
    );
    render(title, &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_html_metacharacters() {
        assert_eq!(
            escape("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn render_substitutes_title_and_content() {
        let page = render("Products", "<h1>Products</h1>");
        assert!(page.contains("<title>Products — Shopkeep</title>"));
        assert!(page.contains("<h1>Products</h1>"));
        assert!(!page.contains("{{content}}"));
        assert!(!page.contains("{{title}}"));
    }

    #[test]
    fn error_banner_escapes_message() {
        assert_eq!(error_banner(None), "");
        let banner = error_banner(Some("name <script> is bad"));
        assert!(banner.contains("&lt;script&gt;"));
    }

    #[test]
    fn error_page_uses_status() {
        let page = error_page(StatusCode::NOT_FOUND, "product 9 not found");
        assert!(page.contains("Not Found"));
        assert!(page.contains("product 9 not found"));
    }
}
