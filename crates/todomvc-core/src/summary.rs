//! Footer Summary

/// Counts shown in the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Items not yet complete
    pub active: usize,
    /// All items
    pub total: usize,
}

impl Summary {
    pub fn new(active: usize, total: usize) -> Self {
        Self { active, total }
    }

    /// "item" for zero or one, "items" otherwise
    pub fn items_left_label(&self) -> &'static str {
        if self.active <= 1 {
            "item"
        } else {
            "items"
        }
    }

    /// Whether "Clear completed" has anything to do
    pub fn has_completed(&self) -> bool {
        self.active != self.total
    }

    /// Whether the toggle-all checkbox shows as checked
    pub fn all_complete(&self) -> bool {
        self.total > 0 && self.active == 0
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
