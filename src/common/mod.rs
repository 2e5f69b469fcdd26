pub mod comment;
pub mod newtypes;
pub mod segment;
pub mod user;

use serde::{Deserialize, Serialize};

pub static AUTH_COOKIE: &str = "auth";

/// Session cookie forwarded to the API during server side rendering.
#[derive(Clone, Debug)]
pub struct Auth(pub Option<String>);

#[derive(Deserialize, Serialize, Debug)]
pub struct SuccessResponse {
    success: bool,
}

impl Default for SuccessResponse {
    fn default() -> Self {
        Self { success: true }
    }
}
