use leptos::prelude::*;

/// Suspense plus an error boundary rendering API failures inline.
#[component]
pub fn SuspenseError<Chil>(children: TypedChildren<Chil>) -> impl IntoView
where
    Chil: IntoView + Send + 'static,
{
    view! {
        <Suspense fallback=|| {
            view! { "Loading..." }
        }>
            <ErrorBoundary fallback=|errors| {
                view! {
                    <div class="grid place-items-center my-8">
                        <div class="alert alert-error w-min">
                            {move || {
                                errors
                                    .get()
                                    .into_iter()
                                    .map(|(_, e)| e.to_string())
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </div>
                }
            } children></ErrorBoundary>
        </Suspense>
    }
}
