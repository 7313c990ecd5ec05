//! Label files: one line per image, kept in a separate labels directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::LabelRecord;
use crate::error::Result;

pub const LABEL_EXTENSION: &str = "txt";

/// What is on disk for one image.
#[derive(Clone, Debug, PartialEq)]
pub enum LabelState {
    Missing,
    Valid(LabelRecord),
    Malformed,
}

/// `labels_dir/<image stem>.txt`.
pub fn label_path_for(labels_dir: &Path, image_path: &Path) -> PathBuf {
    let stem = image_path.file_stem().unwrap_or_default();
    let mut file_name = stem.to_os_string();
    file_name.push(".");
    file_name.push(LABEL_EXTENSION);
    labels_dir.join(file_name)
}

/// Read the first line of a label file.
///
/// Absent, unreadable and malformed files all come back as `None`.
pub fn load_record(path: &Path) -> Option<LabelRecord> {
    match inspect_label(path) {
        LabelState::Valid(record) => Some(record),
        LabelState::Missing | LabelState::Malformed => None,
    }
}

/// Like [`load_record`] but keeps "never labeled" apart from "corrupt".
pub fn inspect_label(path: &Path) -> LabelState {
    if !path.exists() {
        return LabelState::Missing;
    }
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            tracing::debug!("Unreadable label {}: {err}", path.display());
            return LabelState::Malformed;
        }
    };

    let first_line = content.lines().next().unwrap_or("");
    match LabelRecord::parse_line(first_line) {
        Some(record) => LabelState::Valid(record),
        None => {
            tracing::debug!("Malformed label {}", path.display());
            LabelState::Malformed
        }
    }
}

/// Overwrite `path` with the single line for `record`.
pub fn save_record(path: &Path, record: &LabelRecord) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("{record}\n"))?;
    tracing::info!("Wrote {}: {record}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_path_uses_stem() {
        let path = label_path_for(Path::new("/data/labels"), Path::new("/data/images/cave_01.jpg"));
        assert_eq!(path, PathBuf::from("/data/labels/cave_01.txt"));
    }

    #[test]
    fn test_label_path_keeps_inner_dots() {
        let path = label_path_for(Path::new("labels"), Path::new("images/a.b.png"));
        assert_eq!(path, PathBuf::from("labels/a.b.txt"));
    }
}
