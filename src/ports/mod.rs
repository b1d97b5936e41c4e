mod html_page_document;
mod terminal_search_field;
mod terminal_search_form;

pub use html_page_document::HtmlPageDocument;
pub use terminal_search_field::TerminalSearchField;
pub use terminal_search_form::TerminalSearchForm;
