use std::path::{Path, PathBuf};

use image::imageops::FilterType;
pub use image::RgbaImage;
use walkdir::WalkDir;

use crate::codec::DisplayTransform;
use crate::error::{LabelerError, Result};

pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "bmp"];

/// List images directly inside `dir`, sorted by path.
///
/// Sub-directories are not searched. An empty result is an error.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(LabelerError::ImageDirInvalid {
            path: dir.to_path_buf(),
            message: "not a directory".to_string(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = entry.map_err(|source| LabelerError::ImageDirInvalid {
            path: dir.to_path_buf(),
            message: format!("failed while traversing directory: {source}"),
        })?;

        if entry.file_type().is_file() && has_image_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }

    if files.is_empty() {
        return Err(LabelerError::NoImages(dir.to_path_buf()));
    }
    files.sort();

    tracing::debug!("Found {} images in {}", files.len(), dir.display());
    Ok(files)
}

fn has_image_extension(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    IMAGE_EXTENSIONS
        .iter()
        .any(|allowed| ext.eq_ignore_ascii_case(allowed))
}

/// Read width and height from the image header without decoding pixels.
pub fn image_dimensions(path: &Path) -> Result<(u32, u32)> {
    let (width, height) = image::image_dimensions(path)?;
    if width == 0 || height == 0 {
        return Err(LabelerError::InvalidDimensions { width, height });
    }
    Ok((width, height))
}

/// Decode an image and shrink it to the size `transform` draws it at.
pub fn load_display_image(path: &Path, transform: &DisplayTransform) -> Result<RgbaImage> {
    let img = image::open(path)?.to_rgba8();
    let (width, height) = img.dimensions();
    let (disp_w, disp_h) = transform.display_size(width, height);

    if (disp_w, disp_h) == (width, height) {
        return Ok(img);
    }
    Ok(image::imageops::resize(&img, disp_w, disp_h, FilterType::Triangle))
}
