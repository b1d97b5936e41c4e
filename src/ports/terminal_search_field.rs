use std::sync::{Mutex, PoisonError};

use crate::core::interfaces::ports::SearchField;

#[derive(Default)]
pub struct TerminalSearchField {
    value: Mutex<String>,
}

impl TerminalSearchField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_value(&self, value: &str) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = value.to_string();
    }
}

impl SearchField for TerminalSearchField {
    fn read_value(&self) -> String {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn clear_value(&self) {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
