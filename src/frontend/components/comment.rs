use crate::{
    common::{
        comment::{Comment, ListRepliesParams, SortBy, SortOrder},
        newtypes::CommentId,
    },
    frontend::{
        api::CLIENT,
        utils::formatting::{author_link, render_date_time, time_ago},
    },
};
use leptos::prelude::*;
use phosphor_leptos::{Icon, ARROW_BEND_DOWN_RIGHT};

/// Replies are a single fetch; nothing in the dashboard pages past this.
const REPLIES_LIMIT: i64 = 100;

#[component]
pub fn CommentView(comment: Comment, reply_target: RwSignal<Option<Comment>>) -> impl IntoView {
    let reply_count = comment.reply_count();
    let Comment {
        id,
        content,
        pinned,
        edited,
        created_at,
        user,
        ..
    } = comment.clone();

    let set_reply_target = move |_| reply_target.set(Some(comment.clone()));

    view! {
        <div class="py-2" id=format!("comment-{id}")>
            <div class="flex gap-2 items-center text-sm">
                {author_link(user.as_ref())}
                <span class="text-slate-500" title=render_date_time(created_at)>
                    {time_ago(created_at)}
                </span>
                <Show when=move || pinned>
                    <span class="badge badge-outline badge-sm">"Pinned"</span>
                </Show>
                <Show when=move || edited>
                    <span class="text-slate-500 italic">"(edited)"</span>
                </Show>
            </div>
            <div>{content}</div>
            <div class="text-sm">
                <a class="inline-flex gap-1 items-center link" on:click=set_reply_target>
                    <Icon icon=ARROW_BEND_DOWN_RIGHT />
                    "Reply"
                </a>
            </div>
            {(reply_count > 0).then(|| view! { <ReplyList comment_id=id.clone() /> })}
            <div class="m-0 divider"></div>
        </div>
    }
}

/// Loads the direct replies of one comment, oldest first so the conversation
/// reads top to bottom. Only instantiated when the denormalized reply count
/// is positive, so comments without replies never hit the network. A failure
/// here stays inside this row.
#[component]
fn ReplyList(comment_id: CommentId) -> impl IntoView {
    let replies = Resource::new(
        || (),
        move |_| {
            let comment_id = comment_id.clone();
            async move {
                let params = ListRepliesParams {
                    comment_id,
                    limit: REPLIES_LIMIT,
                    sort_by: SortBy::CreatedAt,
                    order: SortOrder::Asc,
                };
                CLIENT.list_replies(&params).await
            }
        },
    );

    view! {
        <div class="pl-6 mt-1 border-l border-slate-300">
            <Suspense fallback=|| {
                view! { <p class="text-sm text-slate-500">"Loading replies..."</p> }
            }>
                {move || {
                    replies
                        .get()
                        .map(|result| match result {
                            // the reply count promised something, show that there is nothing
                            Ok(list) if list.items.is_empty() => {
                                view! { <p class="text-sm italic">"No replies"</p> }.into_any()
                            }
                            Ok(list) => {
                                list.items.into_iter().map(reply_view).collect_view().into_any()
                            }
                            Err(e) => {
                                view! {
                                    <p class="text-sm text-error">
                                        {format!("Failed to load replies: {e}")}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

fn reply_view(reply: Comment) -> impl IntoView {
    view! {
        <div class="py-1" id=format!("comment-{}", reply.id)>
            <div class="flex gap-2 items-center text-sm">
                {author_link(reply.user.as_ref())}
                <span class="text-slate-500" title=render_date_time(reply.created_at)>
                    {time_ago(reply.created_at)}
                </span>
            </div>
            <div>{reply.content}</div>
        </div>
    }
}
