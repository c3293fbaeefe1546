use axum::response::Html;

/// Minimal homepage with a file upload form.
const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Depot</title>
</head>
<body>
    <h2>Upload a file</h2>
    <form action="/upload" method="post" enctype="multipart/form-data">
        <input type="file" name="file">
        <input type="submit" value="send">
    </form>
</body>
</html>"#;

/// `GET /` -- serves the homepage with the upload form.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
