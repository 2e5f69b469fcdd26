use crate::{
    common::{
        comment::SubjectType,
        newtypes::SubjectId,
        segment::GetSegmentParams,
    },
    frontend::{
        api::CLIENT,
        components::{comment_section::CommentSection, suspense_error::SuspenseError},
        utils::formatting::render_date_time,
    },
};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

/// Segment detail with the lazily loaded discussion thread below it.
#[component]
pub fn SegmentPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.get().get("id").unwrap_or_default();
    let segment = Resource::new(id, |id| async move {
        let params = GetSegmentParams { id: SubjectId(id) };
        CLIENT.get_segment(&params).await
    });

    view! {
        <SuspenseError>
            {move || Suspend::new(async move {
                segment
                    .await
                    .map(|segment| {
                        view! {
                            <Title text=segment.title.clone() />
                            <h1 class="my-6 font-serif text-4xl font-bold">
                                {segment.title.clone()}
                            </h1>
                            <p class="text-sm text-slate-500">
                                {format!("Created {}", render_date_time(segment.created_at))}
                            </p>
                            {segment
                                .description
                                .clone()
                                .map(|description| {
                                    view! { <p class="mb-4 max-w-prose">{description}</p> }
                                })}
                            <CommentSection
                                subject_type=SubjectType::Segment
                                subject_id=segment.id.clone()
                            />
                        }
                    })
            })}
        </SuspenseError>
    }
}
