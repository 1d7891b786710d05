use fastproxy::configuration::Settings;
use fastproxy::SourceManager;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .filter_module("fastproxy", log::LevelFilter::Debug)
        .parse_default_env()
        .init();

    let settings = match Settings::new() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load config.toml: {:#}. Using default providers.", e);
            Settings::default()
        }
    };

    let manager = SourceManager::from_settings(&settings)?;
    if manager.is_empty() {
        log::warn!("all proxy sources are disabled");
        return Ok(());
    }

    let proxies = manager.fetch_all(settings.fetch.max_proxies).await;
    for proxy in &proxies {
        println!("{}", proxy);
    }

    Ok(())
}
