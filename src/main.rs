use anyhow::Result;

#[cfg(feature = "desktop")]
fn main() -> Result<()> {
    use notion_table::config::AppConfig;
    use notion_table::logging;

    let config = AppConfig::from_env()?;
    let logs_dir = match config.ensure_logs_dir() {
        Ok(dir) => Some(dir),
        Err(err) => {
            eprintln!("Warning: Could not initialize file logging: {err:#}");
            None
        }
    };
    logging::init(logs_dir.as_deref());

    notion_table::platform::desktop::launch::launch(config)
}

#[cfg(all(feature = "web", not(feature = "desktop")))]
fn main() -> Result<()> {
    notion_table::platform::web::launch::launch();
    Ok(())
}

#[cfg(not(any(feature = "desktop", feature = "web")))]
fn main() -> Result<()> {
    anyhow::bail!("build with the `desktop` or `web` feature to launch the table")
}
