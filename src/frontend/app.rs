use crate::frontend::{
    api::CLIENT,
    components::nav::Nav,
    pages::{dashboard::Dashboard, login::Login, segment::SegmentPage},
};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Load the active session in case we are already logged in
    let session = Resource::new(
        || (),
        |_| async move { CLIENT.my_profile().await.unwrap_or_default() },
    );
    provide_context(session);

    let (error_popup, set_error_popup) = signal(None::<String>);
    provide_context(set_error_popup);

    view! {
        <Stylesheet id="clipdeck" href="/pkg/clipdeck.css" />
        <Title text="Clipdeck Admin" />
        <Router>
            <Nav />
            <main class="p-4 mx-auto max-w-4xl">
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=Dashboard />
                    <Route path=path!("/segments/:id") view=SegmentPage />
                    <Route path=path!("/login") view=Login />
                </Routes>
            </main>
        </Router>
        {move || {
            error_popup
                .get()
                .map(|err| {
                    view! {
                        <div class="z-50 toast toast-center">
                            <div class="alert alert-error">
                                <span>{err}</span>
                                <button
                                    class="btn btn-ghost btn-xs"
                                    on:click=move |_| set_error_popup.set(None)
                                >
                                    "Dismiss"
                                </button>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
