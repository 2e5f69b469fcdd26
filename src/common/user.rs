use super::newtypes::UserId;
use serde::{Deserialize, Serialize};

/// The account behind the active dashboard session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub admin: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    #[serde(default)]
    pub my_profile: Option<CurrentUser>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct LoginUserParams {
    pub username: String,
    pub password: String,
}
