use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use boxlabel_core::config::{AppConfig, DEFAULT_CONFIG_FILE};
use clap::Args;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the config to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Replace the output file if it already exists
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: &ConfigArgs) -> Result<()> {
    let text = default_config_toml()?;

    match args.output {
        Some(ref path) => {
            write_config(path, &text, args.force)?;
            println!("Default config saved to {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

/// Default settings as TOML, headed by a comment naming the file it belongs in.
fn default_config_toml() -> Result<String> {
    let body = toml::to_string_pretty(&AppConfig::default())
        .context("Failed to serialize default config")?;
    Ok(format!(
        "# boxlabel settings, read from ./{} or --config\n{body}",
        DEFAULT_CONFIG_FILE
    ))
}

fn write_config(path: &Path, text: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists, pass --force to replace it", path.display());
    }
    std::fs::write(path, text)
        .with_context(|| format!("Failed to write config to {}", path.display()))
}
