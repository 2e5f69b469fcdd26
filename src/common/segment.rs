use super::newtypes::SubjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single media segment as the detail page needs it. The segment CRUD
/// screens live in a separate admin service.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub id: SubjectId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub media_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct GetSegmentParams {
    pub id: SubjectId,
}
