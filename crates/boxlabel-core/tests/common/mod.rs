#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use boxlabel_core::config::AppConfig;

/// Write a black PNG of the given size.
pub fn write_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    image::RgbImage::new(width, height).save(path).unwrap();
}

/// Write a `names:` YAML file.
pub fn write_classes(path: &Path, names: &[&str]) {
    let mut yaml = String::from("names:\n");
    for name in names {
        yaml.push_str(&format!("  - {name}\n"));
    }
    fs::write(path, yaml).unwrap();
}

/// Lay out `root/images`, `root/classes.yaml` and return a config whose
/// labels dir (`root/labels`) does not exist yet.
pub fn build_config(root: &Path, images: &[(&str, u32, u32)], classes: &[&str]) -> AppConfig {
    let images_dir = root.join("images");
    fs::create_dir_all(&images_dir).unwrap();
    for &(name, w, h) in images {
        write_png(&images_dir.join(name), w, h);
    }
    let classes_path = root.join("classes.yaml");
    write_classes(&classes_path, classes);

    AppConfig {
        images_dir,
        labels_dir: root.join("labels"),
        classes_path,
        ..AppConfig::default()
    }
}

pub fn label_path(root: &Path, stem: &str) -> PathBuf {
    root.join("labels").join(format!("{stem}.txt"))
}
