use super::ApiClient;
use crate::{
    common::{
        user::{CurrentUser, LoginUserParams, SessionView},
        SuccessResponse,
    },
    frontend::utils::errors::FrontendResult,
};

impl ApiClient {
    /// The session behind the auth cookie, `my_profile: None` when logged out.
    pub async fn my_profile(&self) -> FrontendResult<SessionView> {
        self.get("/api/v1/auth/me", None::<()>).await
    }

    pub async fn login(&self, params: LoginUserParams) -> FrontendResult<CurrentUser> {
        self.post("/api/v1/auth/login", Some(&params)).await
    }

    pub async fn logout(&self) -> FrontendResult<SuccessResponse> {
        self.post("/api/v1/auth/logout", None::<()>).await
    }
}
