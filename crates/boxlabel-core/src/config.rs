use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::classes::ClassList;
use crate::error::{LabelerError, Result};
use crate::images::list_images;

pub const DEFAULT_MAX_DISPLAY_WIDTH: u32 = 1280;
pub const DEFAULT_MAX_DISPLAY_HEIGHT: u32 = 800;
pub const DEFAULT_CONFIG_FILE: &str = "boxlabel.toml";
/// Largest accepted canvas side. Canvas coordinates are `i32`.
pub const MAX_DISPLAY_BOUND: u32 = i32::MAX as u32;

/// Startup configuration. Nothing here is consulted after [`AppConfig::validate`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub images_dir: PathBuf,
    pub labels_dir: PathBuf,
    pub classes_path: PathBuf,
    #[serde(default = "default_max_display_width")]
    pub max_display_width: u32,
    #[serde(default = "default_max_display_height")]
    pub max_display_height: u32,
}

fn default_max_display_width() -> u32 {
    DEFAULT_MAX_DISPLAY_WIDTH
}

fn default_max_display_height() -> u32 {
    DEFAULT_MAX_DISPLAY_HEIGHT
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("dataset/images/train"),
            labels_dir: PathBuf::from("dataset/labels/train"),
            classes_path: PathBuf::from("classes.yaml"),
            max_display_width: DEFAULT_MAX_DISPLAY_WIDTH,
            max_display_height: DEFAULT_MAX_DISPLAY_HEIGHT,
        }
    }
}

impl AppConfig {
    /// Read a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| LabelerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read `path` if given, else `boxlabel.toml` in the working directory if
    /// present, else fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let local = Path::new(DEFAULT_CONFIG_FILE);
                if local.is_file() {
                    tracing::info!("Using {}", local.display());
                    Self::from_file(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load classes and images, create the labels directory.
    pub fn validate(self) -> Result<Workspace> {
        let workspace = self.inspect()?;
        fs::create_dir_all(&workspace.config.labels_dir)?;
        Ok(workspace)
    }

    /// Like [`AppConfig::validate`] but leaves the filesystem untouched.
    pub fn inspect(self) -> Result<Workspace> {
        let in_range = |v: u32| (1..=MAX_DISPLAY_BOUND).contains(&v);
        if !in_range(self.max_display_width) || !in_range(self.max_display_height) {
            return Err(LabelerError::InvalidConfig(format!(
                "display bounds must be within 1..={MAX_DISPLAY_BOUND}, got {}x{}",
                self.max_display_width, self.max_display_height
            )));
        }

        let classes = ClassList::load(&self.classes_path)?;
        let images = list_images(&self.images_dir)?;

        tracing::info!(
            "Workspace: {} images in {}, {} classes, labels in {}",
            images.len(),
            self.images_dir.display(),
            classes.len(),
            self.labels_dir.display()
        );

        Ok(Workspace {
            config: self,
            classes,
            images,
        })
    }
}

/// Validated startup state shared by the GUI and the CLI.
#[derive(Clone, Debug)]
pub struct Workspace {
    pub config: AppConfig,
    pub classes: ClassList,
    pub images: Vec<PathBuf>,
}

impl Workspace {
    pub fn label_path_for(&self, image_path: &Path) -> PathBuf {
        crate::label::label_path_for(&self.config.labels_dir, image_path)
    }
}
