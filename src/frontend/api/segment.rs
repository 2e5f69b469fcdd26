use super::ApiClient;
use crate::{
    common::segment::{GetSegmentParams, Segment},
    frontend::utils::errors::FrontendResult,
};

impl ApiClient {
    pub async fn get_segment(&self, params: &GetSegmentParams) -> FrontendResult<Segment> {
        self.get("/api/v1/segments", Some(&params)).await
    }
}
