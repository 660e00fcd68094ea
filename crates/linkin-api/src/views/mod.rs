//! HTML views. Every page is a [`Document`] rendered by [`render_document`];
//! the view functions only decide what goes into it.
//!
//! Settings text is interpolated as-is, without HTML escaping.

mod admin;
mod dashboard;
mod home;

pub use admin::admin;
pub use dashboard::dashboard;
pub use home::{home, home_fallback};

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::error;

use linkin_types::models::PageSettings;

use crate::{AppState, run_blocking};

const HTML: &str = "text/html;charset=UTF-8";

/// View-model for one HTML page.
#[derive(Debug, Default, Clone)]
pub struct Document {
    pub title: String,
    /// Extra `<head>` markup after the charset and viewport tags.
    pub meta: String,
    pub style: String,
    pub body: String,
    pub script: String,
}

pub fn render_document(doc: &Document) -> String {
    let script = if doc.script.is_empty() {
        String::new()
    } else {
        format!("\n    <script>\n{}\n    </script>", doc.script)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>{meta}
    <style>
{style}
    </style>
</head>
<body>
{body}{script}
</body>
</html>"#,
        title = doc.title,
        meta = doc.meta,
        style = doc.style,
        body = doc.body,
        script = script,
    )
}

/// Home page. Falls back to a static page when the store cannot be read.
pub async fn render_home(State(state): State<AppState>) -> Response {
    let data = run_blocking(&state, |app| {
        Ok((app.db.get_page()?, app.db.get_links()?, app.db.get_socials()?))
    })
    .await;

    match data {
        Ok((page, links, socials)) => {
            let page = page.unwrap_or_else(PageSettings::default);
            let html = render_document(&home(&page, &links, &socials));
            (
                [
                    (header::CONTENT_TYPE, HTML),
                    (header::CACHE_CONTROL, "public, max-age=300"),
                ],
                html,
            )
                .into_response()
        }
        Err(e) => {
            error!("Home page data unavailable: {}", e);
            html_response(render_document(&home_fallback(&e.to_string())))
        }
    }
}

pub async fn render_admin() -> Response {
    html_response(render_document(&admin()))
}

pub async fn render_dashboard() -> Response {
    html_response(render_document(&dashboard()))
}

fn html_response(html: String) -> Response {
    ([(header::CONTENT_TYPE, HTML)], html).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_skeleton() {
        let html = render_document(&Document {
            title: "T".into(),
            meta: "\n    <meta name=\"x\" content=\"y\">".into(),
            style: "body { color: red; }".into(),
            body: "<p>hi</p>".into(),
            script: String::new(),
        });
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>T</title>"));
        assert!(html.contains("<meta name=\"x\" content=\"y\">"));
        assert!(html.contains("body { color: red; }"));
        assert!(html.contains("<body>\n<p>hi</p>\n</body>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn script_is_wrapped_when_present() {
        let html = render_document(&Document {
            script: "console.log(1);".into(),
            ..Document::default()
        });
        assert!(html.contains("<script>\nconsole.log(1);\n    </script>"));
    }
}
