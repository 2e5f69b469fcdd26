use crate::{
    backend::config::DashboardConfig,
    frontend::app::{shell, App},
};
use anyhow::Result;
use axum::Router;
use leptos::config::get_configuration;
use leptos_axum::{generate_route_list, LeptosRoutes};
use log::info;
use tower_http::{compression::CompressionLayer, cors::CorsLayer};

pub mod config;

/// Server-renders and serves the dashboard. The REST API the dashboard talks
/// to is a separate service, expected behind the same origin.
pub async fn start(config: DashboardConfig) -> Result<()> {
    let conf = get_configuration(Some("Cargo.toml"))?;
    let mut leptos_options = conf.leptos_options;
    leptos_options.site_addr = config.bind.parse()?;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .with_state(leptos_options.clone());

    info!("Listening on {}", &leptos_options.site_addr);
    let listener = tokio::net::TcpListener::bind(&leptos_options.site_addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
