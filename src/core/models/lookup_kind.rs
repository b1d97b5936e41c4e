use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Image,
    Articles,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKind::Image => write!(f, "image"),
            LookupKind::Articles => write!(f, "articles"),
        }
    }
}
