pub mod animation;
pub mod config;
pub mod contact;
pub mod content;
pub mod core;
pub mod decor;
pub mod gui;
pub mod navigation;
pub mod observer;
pub mod page;
pub mod persistence;
pub mod preference;
pub mod projects;
