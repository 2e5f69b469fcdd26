use crate::{
    common::{
        comment::{Comment, CreateCommentParams, SubjectType},
        newtypes::SubjectId,
    },
    frontend::{
        api::CLIENT,
        utils::{
            composer::prepare_submit,
            errors::FrontendResultExt,
            formatting::author_title,
            resources::is_logged_in,
        },
    },
};
use leptos::{html::Textarea, prelude::*};
use leptos_use::{use_textarea_autosize, UseTextareaAutosizeReturn};
use phosphor_leptos::{Icon, ARROW_BEND_DOWN_RIGHT};

/// Composer for new top level comments and replies. The reply target is
/// owned by the section so any rendered comment can set it.
#[component]
pub fn CommentEditorView(
    subject_type: SubjectType,
    subject_id: SubjectId,
    reply_target: RwSignal<Option<Comment>>,
    /// Invoked after the API accepted the comment, once local state is clear.
    on_success: Callback<()>,
) -> impl IntoView {
    let textarea_ref = NodeRef::<Textarea>::new();
    let UseTextareaAutosizeReturn {
        content,
        set_content,
        trigger_resize: _,
    } = use_textarea_autosize(textarea_ref);
    let (wait_for_response, set_wait_for_response) = signal(false);

    let submit_comment_action = Action::new(move |params: &CreateCommentParams| {
        let params = params.clone();
        async move {
            set_wait_for_response.set(true);
            // content and reply target survive a failed submit
            CLIENT.create_comment(&params).await.error_popup(|_| {
                set_content.set(String::new());
                reply_target.set(None);
                on_success.run(());
            });
            set_wait_for_response.set(false);
        }
    });

    let dispatch = {
        let subject_id = subject_id.clone();
        Callback::new(move |()| {
            if wait_for_response.get_untracked() {
                return;
            }
            let target = reply_target.get_untracked();
            if let Some(params) = prepare_submit(
                &content.get_untracked(),
                target.as_ref(),
                is_logged_in(),
                subject_type,
                subject_id.clone(),
            ) {
                submit_comment_action.dispatch(params);
            }
        })
    };

    view! {
        <Show
            when=is_logged_in
            fallback=|| {
                view! {
                    <p class="my-2">
                        <a class="link link-primary" href="/login">
                            "Log in"
                        </a>
                        " to join the discussion"
                    </p>
                }
            }
        >
            <div class="my-2">
                {move || {
                    reply_target
                        .get()
                        .map(|comment| {
                            view! {
                                <div class="flex gap-2 items-center p-2 mb-2 text-sm rounded bg-base-200">
                                    <Icon icon=ARROW_BEND_DOWN_RIGHT />
                                    {format!("Replying to {}", author_title(comment.user.as_ref()))}
                                    <button
                                        class="ml-auto btn btn-ghost btn-xs"
                                        on:click=move |_| reply_target.set(None)
                                    >
                                        "Cancel"
                                    </button>
                                </div>
                            }
                        })
                }}
                <textarea
                    prop:value=content
                    placeholder="Write a comment..."
                    class="w-full resize-none textarea textarea-secondary min-h-10"
                    on:input=move |evt| {
                        let val = event_target_value(&evt);
                        set_content.set(val);
                    }
                    node_ref=textarea_ref
                ></textarea>
                <div class="flex items-center mt-2 h-min">
                    <button
                        class="btn btn-secondary btn-sm"
                        prop:disabled=move || wait_for_response.get()
                        on:click=move |_| {
                            dispatch.run(());
                        }
                    >
                        "Submit"
                    </button>
                </div>
            </div>
        </Show>
    }
}
