pub mod config;
pub mod show;
pub mod status;

use std::path::PathBuf;

use anyhow::{Context, Result};
use boxlabel_core::config::{AppConfig, Workspace};
use clap::Args;

/// Where to find the dataset. Flags override the config file.
#[derive(Args)]
pub struct WorkspaceArgs {
    /// TOML config file (defaults to ./boxlabel.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory of images
    #[arg(long)]
    pub images: Option<PathBuf>,

    /// Directory of label files
    #[arg(long)]
    pub labels: Option<PathBuf>,

    /// YAML file with a `names:` list
    #[arg(long)]
    pub classes: Option<PathBuf>,
}

impl WorkspaceArgs {
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load_or_default(self.config.as_deref())
            .context("Failed to load configuration")?;
        if let Some(ref dir) = self.images {
            config.images_dir = dir.clone();
        }
        if let Some(ref dir) = self.labels {
            config.labels_dir = dir.clone();
        }
        if let Some(ref path) = self.classes {
            config.classes_path = path.clone();
        }
        Ok(config)
    }

    /// Load classes and images without creating the labels directory.
    pub fn inspect(&self) -> Result<Workspace> {
        let workspace = self.resolve_config()?.inspect()?;
        Ok(workspace)
    }
}
