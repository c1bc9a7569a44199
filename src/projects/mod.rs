pub mod filter;
mod search;
mod state;

pub use filter::CategoryFilter;
pub use search::matches_search;
pub use state::{
    CardPresentation,
    ProjectGrid,
    NO_RESULTS_MESSAGE,
};
