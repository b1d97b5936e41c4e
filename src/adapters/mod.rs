mod nyt_article_search_provider;
mod page_resource_fetcher;
mod unsplash_image_search_provider;

pub use nyt_article_search_provider::NytArticleSearchProvider;
pub use page_resource_fetcher::PageResourceFetcher;
pub use unsplash_image_search_provider::UnsplashImageSearchProvider;
