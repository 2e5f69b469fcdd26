use config::Config;
use doku::Document;
use serde::Deserialize;
use smart_default::SmartDefault;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Document, SmartDefault)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Address where the dashboard frontend is served
    #[default("127.0.0.1:3000")]
    #[doku(example = "127.0.0.1:3000")]
    pub bind: String,
}

impl DashboardConfig {
    pub fn read() -> anyhow::Result<Self> {
        let config = Config::builder()
            .add_source(config::File::with_name("config.toml").required(false))
            // Cant use _ as separator due to https://github.com/mehcode/config-rs/issues/391
            .add_source(config::Environment::with_prefix("CLIPDECK").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
