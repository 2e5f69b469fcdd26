pub mod composer;
pub mod errors;
pub mod feed;
pub mod formatting;
pub mod resources;
pub mod visibility;
