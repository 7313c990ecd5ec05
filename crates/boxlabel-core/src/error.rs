use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Classes file not found: {}", .0.display())]
    ClassFileNotFound(PathBuf),

    #[error("Failed to parse classes file {}: {source}", path.display())]
    ClassFileParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid classes file {}: {message}. Expected:\n\nnames:\n  - class1\n  - class2\n", path.display())]
    ClassFileInvalid { path: PathBuf, message: String },

    #[error("No images found in {}", .0.display())]
    NoImages(PathBuf),

    #[error("Images directory not readable {}: {message}", path.display())]
    ImageDirInvalid { path: PathBuf, message: String },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Please select a class before saving.")]
    MissingClass,

    #[error("Please draw a bounding box before saving.")]
    MissingBox,
}

impl LabelerError {
    /// True for the save preconditions the user can fix in place.
    pub fn is_user_warning(&self) -> bool {
        matches!(self, Self::MissingClass | Self::MissingBox)
    }
}

pub type Result<T> = std::result::Result<T, LabelerError>;
