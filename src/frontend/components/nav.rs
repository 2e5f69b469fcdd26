use crate::frontend::{
    api::CLIENT,
    utils::{
        errors::FrontendResultExt,
        resources::{is_logged_in, session, DefaultResource},
    },
};
use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    let logout_action = Action::new(move |_: &()| async move {
        CLIENT.logout().await.error_popup(|_| session().refetch());
    });

    view! {
        <nav class="p-2.5 border-b border-solid navbar border-slate-400">
            <div class="flex-1">
                <a href="/" class="font-serif text-xl font-bold">
                    "Clipdeck Admin"
                </a>
            </div>
            <div class="flex-none">
                <Transition>
                    <Show
                        when=is_logged_in
                        fallback=|| {
                            view! {
                                <a class="link" href="/login">
                                    "Login"
                                </a>
                            }
                        }
                    >
                        <span class="mx-2">
                            {move || {
                                session()
                                    .with_default(|s| {
                                        s.my_profile.as_ref().map(|p| p.username.clone())
                                    })
                            }}
                        </span>
                        <button
                            class="btn btn-outline btn-sm"
                            on:click=move |_| {
                                logout_action.dispatch(());
                            }
                        >
                            "Logout"
                        </button>
                    </Show>
                </Transition>
            </div>
        </nav>
    }
}
