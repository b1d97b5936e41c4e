pub fn render_search_header(value: &str) -> String {
    format!(r#"<h2 class="page-title">query: {}</h2>"#, value)
}
