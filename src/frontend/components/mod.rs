pub mod comment;
pub mod comment_editor;
pub mod comment_section;
pub mod nav;
pub mod suspense_error;
