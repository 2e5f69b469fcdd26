use crate::common::comment::CommentAuthor;
use chrono::{DateTime, Local, Utc};
use leptos::prelude::*;
use std::sync::OnceLock;
use timeago::Formatter;

pub fn author_title(author: Option<&CommentAuthor>) -> String {
    author
        .map(|a| {
            a.name
                .clone()
                .or_else(|| a.username.clone())
                .unwrap_or_else(|| a.id.0.clone())
        })
        .unwrap_or_else(|| "deleted user".to_string())
}

pub fn author_link(author: Option<&CommentAuthor>) -> impl IntoView {
    let title = author_title(author);
    // User detail screens live in the users section of the dashboard.
    let path = author.map(|a| format!("/users/{}", a.id));
    view! {
        <a class="link" href=path>
            {title}
        </a>
    }
}

pub fn render_date_time(date_time: DateTime<Utc>) -> String {
    date_time
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

pub fn time_ago(time: DateTime<Utc>) -> String {
    static INSTANCE: OnceLock<Formatter> = OnceLock::new();
    let secs = Utc::now().signed_duration_since(time).num_seconds();
    let duration = std::time::Duration::from_secs(secs.try_into().unwrap_or_default());
    INSTANCE.get_or_init(Formatter::new).convert(duration)
}
