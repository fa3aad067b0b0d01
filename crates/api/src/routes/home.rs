//! Landing page route.

use axum::{Router, response::Html, routing::get};

use crate::AppState;

/// Static landing page markup.
const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Docdrop</title>
</head>
<body>
    <h1>Docdrop</h1>
    <p>Upload PDF, DOCX, or TXT documents up to 10 MB and receive a storage
    reference back.</p>
    <p>POST a multipart form with a single <code>file</code> field to
    <code>/api/upload</code>.</p>
</body>
</html>
"#;

/// Landing page handler.
async fn home() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// Creates the landing page route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}
