use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <Title text="Dashboard" />
        <h1 class="my-6 font-serif text-4xl font-bold">"Clipdeck Admin"</h1>
        <p class="max-w-prose">
            "Moderation tools for media, segments and community discussions. "
            "Open a segment from the media library to review its discussion thread."
        </p>
    }
}
