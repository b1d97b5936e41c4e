mod article_search_provider;
mod image_search_provider;
mod resource_fetcher;

pub use article_search_provider::ArticleSearchProvider;
pub use image_search_provider::ImageSearchProvider;
pub use resource_fetcher::ResourceFetcher;
