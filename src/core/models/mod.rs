mod article_result;
mod image_result;
mod insert_position;
mod lookup_kind;
mod query_document;
mod user_settings;

pub use article_result::ArticleResult;
pub use image_result::ImageResult;
pub use insert_position::InsertPosition;
pub use lookup_kind::LookupKind;
pub use query_document::QueryDocument;
pub use user_settings::DemoSettings;
