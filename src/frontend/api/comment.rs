use super::ApiClient;
use crate::{
    common::comment::{
        Comment, CommentPage, CommentStats, CreateCommentParams, GetCommentStatsParams,
        ListCommentsParams, ListRepliesParams, ReplyList,
    },
    frontend::utils::errors::FrontendResult,
};

impl ApiClient {
    /// One page of top level comments (or replies when `parent_id` is set).
    pub async fn list_comments(&self, params: &ListCommentsParams) -> FrontendResult<CommentPage> {
        self.get("/api/v1/comments", Some(&params)).await
    }

    pub async fn list_replies(&self, params: &ListRepliesParams) -> FrontendResult<ReplyList> {
        self.get("/api/v1/comments/replies", Some(&params)).await
    }

    pub async fn get_comment_stats(
        &self,
        params: &GetCommentStatsParams,
    ) -> FrontendResult<CommentStats> {
        self.get("/api/v1/comments/stats", Some(&params)).await
    }

    pub async fn create_comment(&self, params: &CreateCommentParams) -> FrontendResult<Comment> {
        self.post("/api/v1/comments", Some(&params)).await
    }
}
