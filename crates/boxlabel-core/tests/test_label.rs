use std::fs;

use boxlabel_core::classes::ClassId;
use boxlabel_core::codec::{LabelRecord, NormalizedBox};
use boxlabel_core::label::{inspect_label, load_record, save_record, LabelState};

fn sample() -> LabelRecord {
    LabelRecord::new(ClassId::new(2), NormalizedBox::new(0.2, 0.5, 0.2, 0.6))
}

#[test]
fn test_load_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");
    assert!(load_record(&path).is_none());
    assert_eq!(inspect_label(&path), LabelState::Missing);
}

#[test]
fn test_load_wrong_token_count_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.txt");
    fs::write(&path, "1 0.5 0.5\n").unwrap();

    assert!(load_record(&path).is_none());
    assert_eq!(inspect_label(&path), LabelState::Malformed);
}

#[test]
fn test_load_empty_file_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();
    assert_eq!(inspect_label(&path), LabelState::Malformed);
}

#[test]
fn test_load_non_numeric_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "cave 0.5 0.5 0.1 0.1\n").unwrap();
    assert!(load_record(&path).is_none());
}

#[test]
fn test_load_reads_only_first_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("multi.txt");
    fs::write(&path, "0 0.5 0.5 0.1 0.1\ngarbage\n").unwrap();

    let rec = load_record(&path).unwrap();
    assert_eq!(rec.class_id, ClassId::new(0));
}

#[test]
fn test_save_writes_single_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("img.txt");
    save_record(&path, &sample()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "2 0.200000 0.500000 0.200000 0.600000\n");
}

#[test]
fn test_save_creates_missing_labels_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labels/train/img.txt");
    save_record(&path, &sample()).unwrap();
    assert!(path.is_file());
}

#[test]
fn test_save_overwrites_previous_label() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("img.txt");
    fs::write(&path, "9 0.1 0.1 0.1 0.1\n9 0.1 0.1 0.1 0.1\n").unwrap();

    save_record(&path, &sample()).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert_eq!(load_record(&path), Some(sample()));
}
