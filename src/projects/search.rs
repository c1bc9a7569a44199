use crate::core::{
    utils::text_matches_search,
    ProjectCard,
};

/// `query` must already be normalized (lowercased and trimmed).
pub fn matches_search(card: &ProjectCard, query: &str) -> bool {
    text_matches_search(&card.search_text(), query)
}
