use crate::common::user::SessionView;
use leptos::prelude::*;

pub fn session() -> Resource<SessionView> {
    expect_context::<Resource<SessionView>>()
}

pub fn is_logged_in() -> bool {
    let session = use_context::<Resource<SessionView>>();
    if let Some(session) = session {
        session.with_default(|s| s.my_profile.is_some())
    } else {
        false
    }
}

pub trait DefaultResource<T> {
    fn with_default<O>(&self, f: impl FnOnce(&T) -> O) -> O;
}

impl<T: Default + Send + Sync + Clone> DefaultResource<T> for Resource<T> {
    fn with_default<O>(&self, f: impl FnOnce(&T) -> O) -> O {
        self.with(|x| match x {
            Some(x) => f(x),
            None => f(&T::default()),
        })
    }
}
