use crate::page::PageEvent;

// Widgets push actions here instead of holding a mutable borrow of the page while drawing
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Page(PageEvent),
    JumpToSection(usize),
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn page(&mut self, event: PageEvent) {
        self.actions.push(UiAction::Page(event));
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
