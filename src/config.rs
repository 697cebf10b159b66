use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::domain::entities::table::{DEFAULT_COLUMN_WIDTH, MIN_COLUMN_WIDTH};

/// Defaults applied by the grid when it creates or resizes columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub default_column_width: u32,
    pub min_column_width: u32,
    pub new_column_name: String,
    pub select_placeholder_options: Vec<String>,
    pub title: String,
    pub subtitle: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_column_width: DEFAULT_COLUMN_WIDTH,
            min_column_width: MIN_COLUMN_WIDTH,
            new_column_name: "New Column".to_string(),
            select_placeholder_options: vec!["Option 1".to_string(), "Option 2".to_string()],
            title: "Project Tasks".to_string(),
            subtitle: "Manage your project tasks with this Notion-like table".to_string(),
        }
    }
}

/// Shell settings for the desktop build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub window_title: String,
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let project_dirs = ProjectDirs::from("com", "notion-table", "notion-table")
            .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
        Ok(Self::with_data_dir(project_dirs.data_local_dir()))
    }

    pub fn with_data_dir(data_dir: &Path) -> Self {
        Self {
            window_title: "Notion Table".to_string(),
            data_dir: data_dir.to_path_buf(),
        }
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }

    pub fn webview_dir(&self) -> PathBuf {
        self.data_dir.join("webview2")
    }

    pub fn ensure_logs_dir(&self) -> Result<PathBuf> {
        ensure_dir(self.logs_dir())
    }

    pub fn ensure_webview_dir(&self) -> Result<PathBuf> {
        ensure_dir(self.webview_dir())
    }
}

fn ensure_dir(dir: PathBuf) -> Result<PathBuf> {
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create dir: {}", dir.display()))?;
    Ok(dir)
}
