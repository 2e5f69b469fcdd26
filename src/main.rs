#[cfg(feature = "ssr")]
#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    use clipdeck::backend::config::DashboardConfig;
    use log::LevelFilter;

    if std::env::args().nth(1).as_deref() == Some("--print-config") {
        println!("{}", doku::to_toml::<DashboardConfig>());
        return Ok(());
    }

    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .filter_module("clipdeck", LevelFilter::Info)
        .init();

    let config = DashboardConfig::read()?;
    clipdeck::backend::start(config).await
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // the browser bundle is mounted through `hydrate()` instead
}
