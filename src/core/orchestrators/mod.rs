pub mod search_header_quiz;
pub mod search_orchestrator;
