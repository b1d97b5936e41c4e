/// Which element the page exposes for dynamic content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLayout {
    SearchResults,
    HomeSection,
}

impl PageLayout {
    fn open_container_tag(&self) -> &'static str {
        match self {
            PageLayout::SearchResults => r#"<div id="response-container">"#,
            PageLayout::HomeSection => r#"<section data-route="home">"#,
        }
    }

    fn close_container_tag(&self) -> &'static str {
        match self {
            PageLayout::SearchResults => "</div>",
            PageLayout::HomeSection => "</section>",
        }
    }
}

const PAGE_STYLE: &str = r#"body { font-family: sans-serif; margin: 2rem auto; max-width: 52rem; }
figure { margin: 0 0 1.5rem; }
figure img { max-width: 100%; }
.error { color: #a33; padding: 0.5rem 0; }
.article h3 { margin-bottom: 0.25rem; }"#;

pub fn render_page(title: &str, layout: PageLayout, inner_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
{style}
</style>
</head>
<body>
<h1>{title}</h1>
{open}
{inner}
{close}
</body>
</html>
"#,
        title = title,
        style = PAGE_STYLE,
        open = layout.open_container_tag(),
        inner = inner_html,
        close = layout.close_container_tag(),
    )
}
