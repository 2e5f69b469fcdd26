pub mod api;
pub mod app;
pub mod components;
pub mod pages;
pub mod utils;
