use crate::core::models::{ArticleResult, ImageResult, LookupKind};

pub fn render_image_figure(keyword: &str, image: &ImageResult) -> String {
    format!(
        r#"<figure>
    <img src="{}" alt="{}">
    <figcaption>{} by <a href="{}" target="_blank">{}</a></figcaption>
</figure>"#,
        image.image_url, keyword, keyword, image.photographer_link, image.photographer_name
    )
}

pub fn render_no_images() -> String {
    r#"<div class="error-no-image error">No images available</div>"#.to_string()
}

pub fn render_article_list(articles: &[ArticleResult]) -> String {
    let mut html_content = String::from(r#"<ul id="articles">"#);

    for article in articles {
        html_content.push_str(&format!(
            r#"
    <li class="article">
        <h3><a href="{}" target="_blank">{}</a></h3>
        <p>{}</p>
    </li>"#,
            article.url, article.title, article.snippet
        ));
    }

    html_content.push_str("\n</ul>");
    html_content
}

pub fn render_no_articles() -> String {
    r#"<div class="error-no-articles error">No articles available</div>"#.to_string()
}

pub fn render_request_error(kind: LookupKind) -> String {
    format!(r#"<div class="network-error error">No {} available</div>"#, kind)
}
