//! Todo Item Entity
//!
//! A single todo entry with its completion and inline-edit flags.

use std::fmt;

/// Opaque item identifier, unique within a session and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TodoId(i64);

impl TodoId {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A todo entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Visible label, trimmed and never empty
    pub content: String,
    /// Completion status
    pub complete: bool,
    /// Inline-edit mode (view state only)
    pub editing: bool,
}

impl TodoItem {
    /// Fresh item: incomplete, not being edited
    pub fn new(id: TodoId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            complete: false,
            editing: false,
        }
    }
}

/// Trim raw input, rejecting empty or whitespace-only text
pub(crate) fn normalize_content(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let item = TodoItem::new(TodoId::new(7), "milk");
        assert_eq!(item.id, TodoId::new(7));
        assert_eq!(item.content, "milk");
        assert!(!item.complete);
        assert!(!item.editing);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(TodoId::new(1700000000123).to_string(), "1700000000123");
    }

    #[test]
    fn test_normalize_content() {
        assert_eq!(normalize_content("  buy milk \n"), Some("buy milk"));
        assert_eq!(normalize_content(""), None);
        assert_eq!(normalize_content(" \t "), None);
    }
}
