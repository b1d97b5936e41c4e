mod page_template;
mod search_header_view;
mod search_results_view;

pub use page_template::{render_page, PageLayout};
pub use search_header_view::render_search_header;
pub use search_results_view::{
    render_article_list, render_image_figure, render_no_articles, render_no_images,
    render_request_error,
};
