pub mod actions;
mod app;
mod contact;
mod hero;
pub mod layout;
mod navbar;
mod projects;
mod sections;
pub mod theme;

pub use app::FolioApp;
