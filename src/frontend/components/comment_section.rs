use crate::{
    common::{
        comment::{Comment, GetCommentStatsParams, SubjectType},
        newtypes::SubjectId,
    },
    frontend::{
        api::CLIENT,
        components::{comment::CommentView, comment_editor::CommentEditorView},
        utils::{
            feed::{use_comment_feed, COMMENTS_PER_PAGE},
            visibility::{use_visibility_activation, SECTION_ROOT_MARGIN, SENTINEL_ROOT_MARGIN},
        },
    },
};
use leptos::{html::Div, prelude::*};
use phosphor_leptos::{Icon, CHAT_CIRCLE};

/// Discussion thread for one subject. Everything below the heading is lazy:
/// comments and stats are only requested once the section scrolls near the
/// viewport, and further pages only as the sentinel at the end of the list
/// becomes visible.
#[component]
pub fn CommentSection(subject_type: SubjectType, subject_id: SubjectId) -> impl IntoView {
    let section_ref = NodeRef::<Div>::new();
    let active = use_visibility_activation(section_ref, SECTION_ROOT_MARGIN);
    let feed = use_comment_feed(subject_type, subject_id.clone(), active, COMMENTS_PER_PAGE);

    // total count from the stats endpoint, not the number of loaded pages
    let stats = Resource::new(move || active.get(), {
        let subject_id = subject_id.clone();
        move |active: bool| {
            let subject_id = subject_id.clone();
            async move {
                if !active {
                    return None;
                }
                let params = GetCommentStatsParams {
                    subject_type,
                    subject_id,
                };
                CLIENT.get_comment_stats(&params).await.ok()
            }
        }
    });

    let reply_target = RwSignal::new(None::<Comment>);

    // a successful submit refreshes both the list and the total
    let refresh = {
        let refetch = feed.refetch;
        Callback::new(move |()| {
            refetch.run(());
            stats.refetch();
        })
    };

    view! {
        <div node_ref=section_ref class="mt-8">
            <h2 class="flex gap-2 items-center my-4 font-serif text-2xl font-bold">
                <Icon icon=CHAT_CIRCLE />
                "Comments"
                <Suspense>
                    <span class="badge badge-neutral">
                        {move || stats.get().flatten().map(|s| s.total)}
                    </span>
                </Suspense>
            </h2>
            <CommentEditorView
                subject_type
                subject_id=subject_id.clone()
                reply_target
                on_success=refresh
            />
            <Show when=move || active.get()>
                {move || {
                    feed.error
                        .get()
                        .map(|e| {
                            view! {
                                <div class="alert alert-error">
                                    {format!("Failed to load comments: {e}")}
                                </div>
                            }
                        })
                }}
                <Show when=move || feed.error.get().is_none()>
                    <Show
                        when=move || !feed.is_loading.get()
                        fallback=|| view! { <p>"Loading comments..."</p> }
                    >
                        <Show
                            when=move || !feed.comments.get().is_empty()
                            fallback=|| {
                                view! { <p class="italic">"No comments yet. Start the discussion!"</p> }
                            }
                        >
                            <div>
                                <For
                                    each=move || feed.comments.get()
                                    key=|comment| comment.id.clone()
                                    children=move |comment: Comment| {
                                        view! { <CommentView comment reply_target /> }
                                    }
                                />
                            </div>
                        </Show>
                        <LoadMoreSentinel
                            has_next_page=feed.has_next_page
                            is_fetching_next_page=feed.is_fetching_next_page
                            fetch_next_page=feed.fetch_next_page
                        />
                    </Show>
                </Show>
            </Show>
        </div>
    }
}

/// End-of-list marker driving infinite scroll. Rendered only while more
/// pages exist; its observer is tied to the node and goes away with it.
#[component]
fn LoadMoreSentinel(
    has_next_page: Signal<bool>,
    is_fetching_next_page: Signal<bool>,
    fetch_next_page: Callback<()>,
) -> impl IntoView {
    use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

    let sentinel_ref = NodeRef::<Div>::new();
    let (intersecting, set_intersecting) = signal(false);
    use_intersection_observer_with_options(
        sentinel_ref,
        move |entries, _| {
            set_intersecting.set(entries.iter().any(|e| e.is_intersecting()));
        },
        UseIntersectionObserverOptions::default()
            .root_margin(SENTINEL_ROOT_MARGIN.to_string())
            .thresholds(vec![0.0]),
    );

    // If a page resolves while the sentinel never left the viewport there is
    // no new intersection event, so the trigger condition has to be
    // re-evaluated whenever any of its inputs change.
    Effect::new(move |_| {
        if intersecting.get() && has_next_page.get() && !is_fetching_next_page.get() {
            fetch_next_page.run(());
        }
    });

    view! {
        <Show when=move || has_next_page.get()>
            <div node_ref=sentinel_ref class="h-8">
                <Show when=move || is_fetching_next_page.get()>
                    <span class="loading loading-dots loading-sm"></span>
                </Show>
            </div>
        </Show>
    }
}
