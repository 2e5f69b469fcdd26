use crate::{
    common::user::LoginUserParams,
    frontend::{
        api::CLIENT,
        utils::{errors::FrontendResultExt, resources::session},
    },
};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::Redirect;

#[component]
pub fn Login() -> impl IntoView {
    let password = signal(String::new());
    let username = signal(String::new());
    let (login_response, set_login_response) = signal(false);
    let (wait_for_response, set_wait_for_response) = signal(false);

    let login_action = Action::new(move |(): &()| {
        let username = username.0.get();
        let password = password.0.get();
        let params = LoginUserParams { username, password };
        async move {
            set_wait_for_response.set(true);
            CLIENT.login(params).await.error_popup(|_| {
                session().refetch();
                set_login_response.set(true);
            });
            set_wait_for_response.set(false);
        }
    });
    let dispatch_action = move || login_action.dispatch(());

    let button_is_disabled = Signal::derive(move || {
        wait_for_response.get() || password.0.get().is_empty() || username.0.get().is_empty()
    });

    view! {
        <Title text="Login" />
        <Show
            when=move || login_response.get()
            fallback=move || {
                view! {
                    <form class="form-control max-w-80" on:submit=|ev| ev.prevent_default()>
                        <h1 class="my-4 font-serif text-4xl font-bold grow max-w-fit">Login</h1>

                        <input
                            type="text"
                            class="my-1 input input-primary input-bordered"
                            required
                            placeholder="Username"
                            bind:value=username
                            prop:disabled=move || wait_for_response.get()
                        />
                        <input
                            type="password"
                            class="my-1 input input-primary input-bordered"
                            required
                            placeholder="Password"
                            prop:disabled=move || wait_for_response.get()
                            bind:value=password
                        />

                        <div>
                            <button
                                class="my-2 btn btn-primary"
                                prop:disabled=move || button_is_disabled.get()
                                on:click=move |_| {
                                    dispatch_action();
                                }
                            >
                                "Login"
                            </button>
                        </div>
                    </form>
                }
            }
        >
            <Redirect path="/" />
        </Show>
    }
}
