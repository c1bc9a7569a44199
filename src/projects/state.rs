use tracing::debug;

use super::{
    filter::{
        matches_filter,
        CategoryFilter,
    },
    search::matches_search,
};
use crate::core::{
    utils::normalize_query,
    FilterButton,
    ProjectCard,
};

pub const NO_RESULTS_MESSAGE: &str = "No projects found matching your criteria.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardPresentation {
    /// Not yet touched by a filter or search.
    #[default]
    Initial,
    FadeIn,
    Hidden,
}

/// Project cards plus the category filter and search predicates that gate them.
pub struct ProjectGrid {
    cards: Vec<ProjectCard>,
    presentation: Vec<CardPresentation>,
    filter: CategoryFilter,
    search_input: String,
    search: String,
    no_results: bool,
    visible_count: usize,
}

impl ProjectGrid {
    pub fn new(cards: Vec<ProjectCard>, buttons: Vec<FilterButton>) -> Self {
        let presentation = vec![CardPresentation::Initial; cards.len()];
        let visible_count = cards.len();
        let no_results = cards.is_empty();
        Self {
            cards,
            presentation,
            filter: CategoryFilter::new(buttons),
            search_input: String::new(),
            search: String::new(),
            no_results,
            visible_count,
        }
    }

    pub fn cards(&self) -> &[ProjectCard] {
        &self.cards
    }

    pub fn presentation(&self, index: usize) -> CardPresentation {
        self.presentation.get(index).copied().unwrap_or_default()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.presentation(index) != CardPresentation::Hidden
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn current_filter(&self) -> &str {
        self.filter.current()
    }

    pub fn current_search(&self) -> &str {
        &self.search
    }

    /// The raw text in the search box.
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn shows_clear_button(&self) -> bool {
        !self.search.is_empty()
    }

    pub fn shows_no_results(&self) -> bool {
        self.no_results
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn select_filter(&mut self, index: usize) {
        if self.filter.select(index) {
            self.recompute();
        }
    }

    pub fn set_search(&mut self, raw: &str) {
        self.search_input = raw.to_string();
        self.search = normalize_query(raw);
        self.recompute();
    }

    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.search.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        let mut visible_count = 0;
        for (card, presentation) in self.cards.iter().zip(self.presentation.iter_mut()) {
            let matches = matches_filter(card, self.filter.current())
                && matches_search(card, &self.search);
            if matches {
                *presentation = CardPresentation::FadeIn;
                visible_count += 1;
            } else {
                *presentation = CardPresentation::Hidden;
            }
        }

        self.visible_count = visible_count;
        // A flag rather than an element, so the placeholder can never be duplicated.
        self.no_results = visible_count == 0;
        debug!(
            "Projects filtered: filter='{}' search='{}' visible={}",
            self.filter.current(),
            self.search,
            visible_count
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::filter::ALL;

    fn grid() -> ProjectGrid {
        ProjectGrid::new(
            vec![
                ProjectCard::new("Face Recognition", &["cv", "python"]),
                ProjectCard::new("Support Chatbot", &["nlp", "llm"]),
                ProjectCard::new("Sales Forecast", &["ml"]),
                ProjectCard::new("Document QA", &["nlp", "cv"]),
            ],
            vec![
                FilterButton::new("All", ALL),
                FilterButton::new("Vision", "cv"),
                FilterButton::new("NLP", "nlp"),
                FilterButton::new("Robotics", "robotics"),
            ],
        )
    }

    fn visible_titles(grid: &ProjectGrid) -> Vec<&str> {
        grid.cards()
            .iter()
            .enumerate()
            .filter(|(i, _)| grid.is_visible(*i))
            .map(|(_, c)| c.title.as_str())
            .collect()
    }

    #[test]
    fn test_initial_state_shows_everything() {
        let grid = grid();
        assert_eq!(grid.visible_count(), 4);
        assert_eq!(grid.presentation(0), CardPresentation::Initial);
        assert!(!grid.shows_no_results());
        assert!(!grid.shows_clear_button());
    }

    #[test]
    fn test_empty_grid_starts_with_placeholder() {
        let grid = ProjectGrid::new(Vec::new(), Vec::new());
        assert_eq!(grid.visible_count(), 0);
        assert!(grid.shows_no_results());
    }

    #[test]
    fn test_filter_and_search_combine() {
        let mut grid = grid();
        grid.select_filter(2); // nlp
        assert_eq!(visible_titles(&grid), vec!["Support Chatbot", "Document QA"]);
        assert_eq!(grid.presentation(0), CardPresentation::Hidden);
        assert_eq!(grid.presentation(1), CardPresentation::FadeIn);

        grid.set_search("  CV ");
        assert_eq!(grid.current_search(), "cv");
        assert_eq!(grid.search_input(), "  CV ");
        assert_eq!(visible_titles(&grid), vec!["Document QA"]);
        assert!(grid.shows_clear_button());
    }

    #[test]
    fn test_every_pair_follows_matching_rule() {
        let mut grid = grid();
        let searches = ["", "face", "NLP", "qa", "zzz", "ml"];
        for filter_index in 0..grid.filter().buttons().len() {
            for search in searches {
                grid.select_filter(filter_index);
                grid.set_search(search);
                let tag = grid.current_filter().to_string();
                let query = search.to_lowercase();
                let mut expected_visible = 0;
                for (index, card) in grid.cards().iter().enumerate() {
                    let expected = (tag == ALL || card.tags.contains(&tag))
                        && (query.is_empty() || card.search_text().contains(&query));
                    assert_eq!(grid.is_visible(index), expected, "{tag} / {search}");
                    expected_visible += usize::from(expected);
                }
                assert_eq!(grid.shows_no_results(), expected_visible == 0);
            }
        }
    }

    #[test]
    fn test_no_results_appears_and_goes_away() {
        let mut grid = grid();
        grid.select_filter(3); // robotics has no cards
        assert!(grid.shows_no_results());
        grid.set_search("x");
        assert!(grid.shows_no_results());
        grid.select_filter(0);
        grid.clear_search();
        assert!(!grid.shows_no_results());
        assert_eq!(grid.visible_count(), 4);
        assert_eq!(grid.search_input(), "");
        assert!(!grid.shows_clear_button());
    }

    #[test]
    fn test_whitespace_search_matches_everything() {
        let mut grid = grid();
        grid.set_search("   ");
        assert_eq!(grid.visible_count(), 4);
        assert!(!grid.shows_clear_button());
    }
}
