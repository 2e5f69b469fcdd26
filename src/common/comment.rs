use super::newtypes::{CommentId, SubjectId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a comment section is attached to. Serialized in lowercase as the API
/// expects it in query strings.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SubjectType {
    Segment,
    Article,
    User,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CommentType {
    #[default]
    Text,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CommentVisibility {
    #[default]
    Public,
    Hidden,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    CreatedAt,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentAuthor {
    pub id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Denormalized relation counts as Prisma serializes them (`_count.replies`).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentCounts {
    #[serde(default)]
    pub replies: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub subject_type: SubjectType,
    pub subject_id: SubjectId,
    #[serde(default)]
    pub parent_id: Option<CommentId>,
    pub user_id: UserId,
    #[serde(default)]
    pub user: Option<CommentAuthor>,
    pub content: String,
    #[serde(rename = "type", default)]
    pub kind: CommentType,
    #[serde(default)]
    pub visibility: CommentVisibility,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub edited: bool,
    #[serde(default)]
    pub edited_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reply_count: Option<i64>,
    #[serde(rename = "_count", default)]
    pub counts: Option<CommentCounts>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// The backend maintains the count, either flattened or under `_count`.
    /// It is trusted as-is for gating reply fetches.
    pub fn reply_count(&self) -> i64 {
        self.reply_count
            .or_else(|| self.counts.map(|c| c.replies))
            .unwrap_or(0)
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListCommentsParams {
    pub subject_type: SubjectType,
    pub subject_id: SubjectId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CommentId>,
    pub page: i64,
    pub limit: i64,
    pub sort_by: SortBy,
    pub order: SortOrder,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentPage {
    pub items: Vec<Comment>,
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListRepliesParams {
    pub comment_id: CommentId,
    pub limit: i64,
    pub sort_by: SortBy,
    pub order: SortOrder,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ReplyList {
    pub items: Vec<Comment>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetCommentStatsParams {
    pub subject_type: SubjectType,
    pub subject_id: SubjectId,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentStats {
    pub total: i64,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentParams {
    pub subject_type: SubjectType,
    pub subject_id: SubjectId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CommentId>,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: CommentType,
    pub visibility: CommentVisibility,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reply_count_from_either_wire_shape() {
        let flattened = r#"{
            "id": "cm1", "subjectType": "segment", "subjectId": "seg1",
            "userId": "u1", "content": "hi", "replyCount": 3,
            "createdAt": "2024-05-01T10:00:00Z", "updatedAt": "2024-05-01T10:00:00Z"
        }"#;
        let comment: Comment = serde_json::from_str(flattened).unwrap();
        assert_eq!(3, comment.reply_count());
        assert_eq!(None, comment.parent_id);
        assert_eq!(CommentType::Text, comment.kind);

        let nested = r#"{
            "id": "cm2", "subjectType": "segment", "subjectId": "seg1",
            "parentId": "cm1", "userId": "u1", "content": "hi again",
            "_count": { "replies": 7 },
            "createdAt": "2024-05-01T10:00:00Z", "updatedAt": "2024-05-01T10:00:00Z"
        }"#;
        let comment: Comment = serde_json::from_str(nested).unwrap();
        assert_eq!(7, comment.reply_count());
        assert_eq!(Some(CommentId("cm1".to_string())), comment.parent_id);
    }

    #[test]
    fn reply_count_defaults_to_zero() {
        let bare = r#"{
            "id": "cm3", "subjectType": "article", "subjectId": "a1",
            "userId": "u2", "content": "no counts here",
            "createdAt": "2024-05-01T10:00:00Z", "updatedAt": "2024-05-01T10:00:00Z"
        }"#;
        let comment: Comment = serde_json::from_str(bare).unwrap();
        assert_eq!(0, comment.reply_count());
    }

    #[test]
    fn list_params_serialize_as_query_string() {
        let params = ListCommentsParams {
            subject_type: SubjectType::Segment,
            subject_id: SubjectId("seg1".to_string()),
            parent_id: None,
            page: 1,
            limit: 20,
            sort_by: SortBy::CreatedAt,
            order: SortOrder::Desc,
        };
        let query = serde_urlencoded::to_string(&params).unwrap();
        assert_eq!(
            "subjectType=segment&subjectId=seg1&page=1&limit=20&sortBy=createdAt&order=DESC",
            query
        );
    }
}
