mod page_section;
mod response_container;
mod search_field;

pub use page_section::PageSection;
pub use response_container::ResponseContainer;
pub use search_field::SearchField;
