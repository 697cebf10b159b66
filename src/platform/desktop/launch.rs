use anyhow::Result;
use tracing::info;

use crate::config::AppConfig;
use crate::ui::app::App;

pub fn launch(config: AppConfig) -> Result<()> {
    let webview_data_dir = config.ensure_webview_dir()?;
    info!(data_dir = %config.data_dir.display(), "launching desktop shell");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new().with_title(config.window_title.clone()),
                )
                .with_data_directory(webview_data_dir),
        )
        .launch(App);
    Ok(())
}
