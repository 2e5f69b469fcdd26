use crate::{
    common::{
        comment::{Comment, CommentPage, ListCommentsParams, SortBy, SortOrder, SubjectType},
        newtypes::SubjectId,
    },
    frontend::{api::CLIENT, utils::errors::FrontendError},
};
use leptos::prelude::*;

pub const COMMENTS_PER_PAGE: i64 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FetchPhase {
    Idle,
    LoadingFirst,
    LoadingNext,
}

/// A page request the state machine has committed to. Handing these out only
/// from `begin_*` keeps duplicate in-flight fetches impossible; the
/// generation ties responses to the feed lifetime that requested them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
    pub generation: u64,
}

/// Accumulates top level comments page by page, newest first. Pages are
/// appended in fetch order and never reordered or deduplicated.
#[derive(Clone, Debug, PartialEq)]
pub struct CommentFeed {
    items: Vec<Comment>,
    page_size: i64,
    next_page: i64,
    phase: FetchPhase,
    has_next_page: bool,
    loaded_first: bool,
    error: Option<FrontendError>,
    generation: u64,
}

impl CommentFeed {
    pub fn new(page_size: i64) -> Self {
        Self {
            items: vec![],
            page_size,
            next_page: 1,
            phase: FetchPhase::Idle,
            has_next_page: false,
            loaded_first: false,
            error: None,
            generation: 0,
        }
    }

    pub fn items(&self) -> &[Comment] {
        &self.items
    }

    /// True only while the first page is loading.
    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::LoadingFirst
    }

    /// True only while a follow-up page is loading.
    pub fn is_fetching_next_page(&self) -> bool {
        self.phase == FetchPhase::LoadingNext
    }

    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    pub fn error(&self) -> Option<&FrontendError> {
        self.error.as_ref()
    }

    /// The initial fetch, issued once when the section activates. Returns
    /// `None` on every later call.
    pub fn begin_first(&mut self) -> Option<PageRequest> {
        if self.loaded_first || self.phase != FetchPhase::Idle {
            return None;
        }
        self.phase = FetchPhase::LoadingFirst;
        Some(PageRequest {
            page: self.next_page,
            limit: self.page_size,
            generation: self.generation,
        })
    }

    /// Refused while any fetch is in flight or nothing more is available.
    pub fn begin_next(&mut self) -> Option<PageRequest> {
        if self.phase != FetchPhase::Idle || !self.has_next_page {
            return None;
        }
        self.phase = FetchPhase::LoadingNext;
        Some(PageRequest {
            page: self.next_page,
            limit: self.page_size,
            generation: self.generation,
        })
    }

    /// Responses from before a `reset` carry an older generation and are
    /// dropped, so a stale in-flight page can never end up in the list.
    pub fn complete(&mut self, generation: u64, page: CommentPage) {
        if generation != self.generation {
            return;
        }
        self.items.extend(page.items);
        self.has_next_page = page.has_more;
        self.next_page += 1;
        self.loaded_first = true;
        self.phase = FetchPhase::Idle;
        self.error = None;
    }

    /// A failed fetch is terminal for the list; retrying is up to the user
    /// reloading or the caller resetting the feed. Stale failures are
    /// dropped like stale pages.
    pub fn fail(&mut self, generation: u64, error: FrontendError) {
        if generation != self.generation {
            return;
        }
        self.phase = FetchPhase::Idle;
        self.loaded_first = true;
        self.has_next_page = false;
        self.error = Some(error);
    }

    /// Drop everything and request page one again, used after a successful
    /// comment submission. Bumps the generation so a fetch still in flight
    /// cannot corrupt the fresh list.
    pub fn reset(&mut self) -> Option<PageRequest> {
        let generation = self.generation.wrapping_add(1);
        *self = Self::new(self.page_size);
        self.generation = generation;
        self.begin_first()
    }
}

#[derive(Clone, Copy)]
pub struct UseCommentFeedReturn {
    pub comments: Signal<Vec<Comment>>,
    pub is_loading: Signal<bool>,
    pub is_fetching_next_page: Signal<bool>,
    pub has_next_page: Signal<bool>,
    pub error: Signal<Option<FrontendError>>,
    pub fetch_next_page: Callback<()>,
    pub refetch: Callback<()>,
}

/// Drives a `CommentFeed` against the comments API. Nothing is fetched until
/// `enabled` turns true; after that `fetch_next_page` appends pages while the
/// feed reports more.
pub fn use_comment_feed(
    subject_type: SubjectType,
    subject_id: SubjectId,
    enabled: Signal<bool>,
    page_size: i64,
) -> UseCommentFeedReturn {
    let state = RwSignal::new(CommentFeed::new(page_size));

    let load = Action::new(move |request: &PageRequest| {
        let request = *request;
        let subject_id = subject_id.clone();
        async move {
            let params = ListCommentsParams {
                subject_type,
                subject_id,
                parent_id: None,
                page: request.page,
                limit: request.limit,
                sort_by: SortBy::CreatedAt,
                order: SortOrder::Desc,
            };
            let result = CLIENT.list_comments(&params).await;
            state.update(|feed| match result {
                Ok(page) => feed.complete(request.generation, page),
                Err(error) => feed.fail(request.generation, error),
            });
        }
    });

    Effect::new(move |_| {
        if enabled.get() {
            if let Some(request) = state.try_update(|feed| feed.begin_first()).flatten() {
                load.dispatch(request);
            }
        }
    });

    let fetch_next_page = Callback::new(move |()| {
        if let Some(request) = state.try_update(|feed| feed.begin_next()).flatten() {
            load.dispatch(request);
        }
    });

    let refetch = Callback::new(move |()| {
        if let Some(request) = state.try_update(|feed| feed.reset()).flatten() {
            load.dispatch(request);
        }
    });

    UseCommentFeedReturn {
        comments: Signal::derive(move || state.with(|feed| feed.items().to_vec())),
        is_loading: Signal::derive(move || state.with(|feed| feed.is_loading())),
        is_fetching_next_page: Signal::derive(move || {
            state.with(|feed| feed.is_fetching_next_page())
        }),
        has_next_page: Signal::derive(move || state.with(|feed| feed.has_next_page())),
        error: Signal::derive(move || state.with(|feed| feed.error().cloned())),
        fetch_next_page,
        refetch,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::common::{
        comment::{CommentType, CommentVisibility},
        newtypes::{CommentId, UserId},
    };
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn comment(id: &str) -> Comment {
        Comment {
            id: CommentId(id.to_string()),
            subject_type: SubjectType::Segment,
            subject_id: SubjectId("seg1".to_string()),
            parent_id: None,
            user_id: UserId("u1".to_string()),
            user: None,
            content: format!("comment {id}"),
            kind: CommentType::Text,
            visibility: CommentVisibility::Public,
            pinned: false,
            edited: false,
            edited_at: None,
            reply_count: None,
            counts: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn page(ids: std::ops::Range<usize>, has_more: bool) -> CommentPage {
        CommentPage {
            items: ids.map(|i| comment(&format!("cm{i}"))).collect(),
            has_more,
            next_cursor: None,
        }
    }

    #[test]
    fn no_request_before_first_begin() {
        let feed = CommentFeed::new(20);
        assert!(!feed.is_loading());
        assert!(!feed.has_next_page());
        assert_eq!(0, feed.items().len());
    }

    #[test]
    fn first_page_only_fires_once() {
        let mut feed = CommentFeed::new(20);
        let request = feed.begin_first().unwrap();
        assert_eq!(
            PageRequest {
                page: 1,
                limit: 20,
                generation: 0,
            },
            request
        );
        assert!(feed.is_loading());

        // double activation reports must not refetch
        assert_eq!(None, feed.begin_first());
        feed.complete(request.generation, page(0..20, true));
        assert_eq!(None, feed.begin_first());
    }

    #[test]
    fn next_page_refused_while_in_flight() {
        let mut feed = CommentFeed::new(20);
        let first = feed.begin_first().unwrap();
        // sentinel visible before the first page resolved
        assert_eq!(None, feed.begin_next());

        feed.complete(first.generation, page(0..20, true));
        let request = feed.begin_next().unwrap();
        assert_eq!(2, request.page);
        assert!(feed.is_fetching_next_page());
        assert!(!feed.is_loading());
        // duplicate trigger while page two is outstanding
        assert_eq!(None, feed.begin_next());
    }

    #[test]
    fn forty_five_comments_paged_by_twenty() {
        let mut feed = CommentFeed::new(20);
        let request = feed.begin_first().unwrap();
        feed.complete(request.generation, page(0..20, true));
        assert_eq!(20, feed.items().len());
        assert!(feed.has_next_page());

        let request = feed.begin_next().unwrap();
        feed.complete(request.generation, page(20..40, true));
        assert_eq!(40, feed.items().len());
        assert!(feed.has_next_page());

        let request = feed.begin_next().unwrap();
        feed.complete(request.generation, page(40..45, false));
        assert_eq!(45, feed.items().len());
        assert!(!feed.has_next_page());

        // list exhausted, the sentinel is gone and further calls are no-ops
        assert_eq!(None, feed.begin_next());
    }

    #[test]
    fn pages_append_in_fetch_order() {
        let mut feed = CommentFeed::new(2);
        let request = feed.begin_first().unwrap();
        feed.complete(request.generation, page(0..2, true));
        let request = feed.begin_next().unwrap();
        feed.complete(request.generation, page(2..4, false));

        let ids: Vec<_> = feed.items().iter().map(|c| c.id.0.clone()).collect();
        assert_eq!(vec!["cm0", "cm1", "cm2", "cm3"], ids);
    }

    #[test]
    fn visible_sentinel_chains_pages_without_new_intersection() {
        // the sentinel can stay inside the viewport the whole time; every
        // completion alone must enable the next request
        let mut feed = CommentFeed::new(5);
        let request = feed.begin_first().unwrap();
        feed.complete(request.generation, page(0..5, true));

        let request = feed.begin_next().unwrap();
        assert!(feed.is_fetching_next_page());
        feed.complete(request.generation, page(5..10, true));
        assert!(!feed.is_fetching_next_page());

        let request = feed.begin_next().unwrap();
        feed.complete(request.generation, page(10..12, false));
        assert_eq!(12, feed.items().len());
        assert_eq!(None, feed.begin_next());
    }

    #[test]
    fn fetch_error_is_terminal() {
        let mut feed = CommentFeed::new(20);
        let request = feed.begin_first().unwrap();
        feed.fail(request.generation, FrontendError::new("boom"));

        assert!(!feed.is_loading());
        assert!(!feed.has_next_page());
        assert_eq!(Some(&FrontendError::new("boom")), feed.error());
        assert_eq!(None, feed.begin_first());
        assert_eq!(None, feed.begin_next());
    }

    #[test]
    fn reset_starts_over_from_page_one() {
        let mut feed = CommentFeed::new(20);
        let request = feed.begin_first().unwrap();
        feed.complete(request.generation, page(0..20, true));

        let request = feed.reset().unwrap();
        assert_eq!(1, request.page);
        assert_eq!(20, request.limit);
        assert_eq!(0, feed.items().len());
        feed.complete(request.generation, page(0..21, false));
        assert_eq!(21, feed.items().len());
    }

    #[test]
    fn reset_during_inflight_fetch_drops_stale_page() {
        let mut feed = CommentFeed::new(20);
        let first = feed.begin_first().unwrap();
        feed.complete(first.generation, page(0..20, true));
        let second = feed.begin_next().unwrap();

        // a submit resets the feed while page two is still outstanding
        let fresh = feed.reset().unwrap();
        assert_eq!(1, fresh.page);

        // the stale page two resolves after the reset and must be dropped
        feed.complete(second.generation, page(20..40, true));
        assert_eq!(0, feed.items().len());
        assert!(feed.is_loading());

        // a stale failure is dropped the same way
        feed.fail(second.generation, FrontendError::new("stale"));
        assert_eq!(None, feed.error());

        feed.complete(fresh.generation, page(0..20, true));
        let ids: Vec<_> = feed.items().iter().map(|c| c.id.0.clone()).collect();
        assert_eq!(20, ids.len());
        assert_eq!("cm0", ids[0]);
        assert!(!feed.is_loading());
    }
}
