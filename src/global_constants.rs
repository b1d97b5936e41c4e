pub const APPLICATION_NAME: &str = "Async Search Demos";
pub const CONFIG_DIRECTORY_NAME: &str = "async-search-demos";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_ORCHESTRATOR: &str = "[ORCHESTRATOR]";
pub const LOG_TAG_QUIZ: &str = "[QUIZ]";
pub const LOG_TAG_UNSPLASH: &str = "[UNSPLASH]";
pub const LOG_TAG_NYT: &str = "[NYT]";
pub const LOG_TAG_FETCHER: &str = "[FETCHER]";
pub const LOG_TAG_PAGE: &str = "[PAGE]";
pub const LOG_TAG_FORM: &str = "[FORM]";

pub const UNSPLASH_SEARCH_URL: &str = "https://api.unsplash.com/search/photos";
pub const UNSPLASH_APP_ID: &str = "your-unsplash-app-id";
pub const NYT_ARTICLE_SEARCH_URL: &str = "http://api.nytimes.com/svc/search/v2/articlesearch.json";
pub const NYT_API_KEY: &str = "your-nyt-api-key";

pub const DEFAULT_IMAGE_QUERY: &str = "night sky";
pub const DEFAULT_QUIZ_SOURCE: &str = "data/earth-like-results.json";
pub const DEFAULT_SEARCH_OUTPUT_FILE: &str = "search-results.html";
pub const DEFAULT_QUIZ_OUTPUT_FILE: &str = "search-header.html";

pub const MIN_ARTICLES_FOR_LIST: usize = 2;

pub const UNKNOWN_QUERY_HEADER: &str = "unknown";

pub const SEARCH_PAGE_TITLE: &str = "Asynchronous Search";
pub const QUIZ_PAGE_TITLE: &str = "Exoplanet Explorer";

pub const USER_MESSAGE_SEARCH_PROMPT: &str =
    "Type a keyword and press Enter to search (empty line or Ctrl+D to quit):";
