pub const NAVBAR_SCROLLED_AFTER: f32 = 100.0;
pub const BACK_TO_TOP_AFTER: f32 = 300.0;
/// Space left above a section when jumping to it, so the navbar does not cover the heading.
pub const ANCHOR_OFFSET: f32 = 80.0;

#[derive(Debug, Clone, Default)]
pub struct NavState {
    scroll_offset: f32,
    menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, offset: f32) {
        self.scroll_offset = offset.max(0.0);
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll_offset > NAVBAR_SCROLLED_AFTER
    }

    pub fn shows_back_to_top(&self) -> bool {
        self.scroll_offset > BACK_TO_TOP_AFTER
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A nav link was followed. Closes the mobile menu and returns where to scroll.
    pub fn follow_link(&mut self, section_top: f32) -> f32 {
        self.menu_open = false;
        anchor_target(section_top)
    }
}

pub fn anchor_target(section_top: f32) -> f32 {
    (section_top - ANCHOR_OFFSET).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_thresholds() {
        let mut nav = NavState::new();
        nav.on_scroll(100.0);
        assert!(!nav.is_scrolled());
        nav.on_scroll(101.0);
        assert!(nav.is_scrolled());
        assert!(!nav.shows_back_to_top());
        nav.on_scroll(301.0);
        assert!(nav.shows_back_to_top());
        nav.on_scroll(-20.0);
        assert_eq!(nav.scroll_offset(), 0.0);
    }

    #[test]
    fn test_menu_closes_on_link() {
        let mut nav = NavState::new();
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        assert_eq!(nav.follow_link(500.0), 420.0);
        assert!(!nav.is_menu_open());
        assert_eq!(nav.follow_link(30.0), 0.0);
    }
}
