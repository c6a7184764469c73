use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub source: SourceSettings,
    pub store: StoreSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub listen_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    /// URL of the zip-compressed bulk production download.
    pub url: String,
    /// Name of the delimited table inside the archive.
    pub archive_member: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreSettings {
    /// Directory the snapshot blob is written to and loaded from.
    pub dir: String,
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/app"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
