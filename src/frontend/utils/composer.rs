use crate::common::{
    comment::{Comment, CommentType, CommentVisibility, CreateCommentParams, SubjectType},
    newtypes::SubjectId,
};

/// Turns composer state into a create request, or `None` when submitting
/// would be a no-op: logged out, or nothing but whitespace. Content is
/// trimmed, replies inherit their parent from the reply target.
pub fn prepare_submit(
    content: &str,
    reply_to: Option<&Comment>,
    logged_in: bool,
    subject_type: SubjectType,
    subject_id: SubjectId,
) -> Option<CreateCommentParams> {
    let content = content.trim();
    if !logged_in || content.is_empty() {
        return None;
    }
    Some(CreateCommentParams {
        subject_type,
        subject_id,
        parent_id: reply_to.map(|c| c.id.clone()),
        content: content.to_string(),
        kind: CommentType::Text,
        visibility: CommentVisibility::Public,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::common::newtypes::{CommentId, UserId};
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn subject() -> SubjectId {
        SubjectId("seg1".to_string())
    }

    fn parent() -> Comment {
        Comment {
            id: CommentId("cmA".to_string()),
            subject_type: SubjectType::Segment,
            subject_id: subject(),
            parent_id: None,
            user_id: UserId("u1".to_string()),
            user: None,
            content: "parent".to_string(),
            kind: CommentType::Text,
            visibility: CommentVisibility::Public,
            pinned: false,
            edited: false,
            edited_at: None,
            reply_count: Some(1),
            counts: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn whitespace_only_content_is_a_noop() {
        assert_eq!(
            None,
            prepare_submit("   ", None, true, SubjectType::Segment, subject())
        );
        assert_eq!(
            None,
            prepare_submit("", None, true, SubjectType::Segment, subject())
        );
    }

    #[test]
    fn logged_out_submit_is_a_noop() {
        assert_eq!(
            None,
            prepare_submit("Hello", None, false, SubjectType::Segment, subject())
        );
    }

    #[test]
    fn top_level_submit_trims_content() {
        let params =
            prepare_submit("  Hello \n", None, true, SubjectType::Segment, subject()).unwrap();
        assert_eq!("Hello", params.content);
        assert_eq!(None, params.parent_id);
        assert_eq!(CommentType::Text, params.kind);
        assert_eq!(CommentVisibility::Public, params.visibility);
    }

    #[test]
    fn reply_target_becomes_parent_id() {
        let target = parent();
        let params = prepare_submit(
            "agreed",
            Some(&target),
            true,
            SubjectType::Segment,
            subject(),
        )
        .unwrap();
        assert_eq!(Some(target.id), params.parent_id);
    }
}
