use crate::core::{
    FilterButton,
    ProjectCard,
};

pub const ALL: &str = "all";

/// Filter buttons with exactly one active at a time.
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    buttons: Vec<FilterButton>,
    active: usize,
}

impl CategoryFilter {
    /// An "all" button is put first if the list does not already have one.
    pub fn new(mut buttons: Vec<FilterButton>) -> Self {
        if !buttons.iter().any(|b| b.tag == ALL) {
            buttons.insert(0, FilterButton::new("All", ALL));
        }
        let active = buttons.iter().position(|b| b.tag == ALL).unwrap_or(0);
        Self { buttons, active }
    }

    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    pub fn current(&self) -> &str {
        &self.buttons[self.active].tag
    }

    /// Activates the button at `index`. Returns false if there is no such button.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.buttons.len() {
            return false;
        }
        self.active = index;
        true
    }
}

pub fn matches_filter(card: &ProjectCard, filter: &str) -> bool {
    filter == ALL || card.tags.contains(filter)
}
