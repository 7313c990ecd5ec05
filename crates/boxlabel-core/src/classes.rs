//! Class definitions loaded from a YAML `names:` list.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{LabelerError, Result};

/// Positional index into the [`ClassList`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ClassId(pub usize);

impl ClassId {
    #[inline]
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered, immutable list of class names.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassList {
    names: Vec<String>,
}

impl ClassList {
    /// Build from names. An empty list is rejected since nothing could be
    /// labeled with it.
    pub fn new(names: Vec<String>) -> Option<Self> {
        if names.is_empty() {
            None
        } else {
            Some(Self { names })
        }
    }

    /// Load `names:` from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(LabelerError::ClassFileNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// Parse YAML content; `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let doc: ClassesYaml =
            serde_yaml::from_str(content).map_err(|source| LabelerError::ClassFileParse {
                path: path.to_path_buf(),
                source,
            })?;

        let names = doc.names.ok_or_else(|| LabelerError::ClassFileInvalid {
            path: path.to_path_buf(),
            message: "missing top-level 'names' key".to_string(),
        })?;

        let names = match names {
            serde_yaml::Value::Sequence(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| match item {
                    serde_yaml::Value::String(name) => Ok(name),
                    other => Err(LabelerError::ClassFileInvalid {
                        path: path.to_path_buf(),
                        message: format!("entry {i} is not a string: {other:?}"),
                    }),
                })
                .collect::<Result<Vec<_>>>()?,
            _ => {
                return Err(LabelerError::ClassFileInvalid {
                    path: path.to_path_buf(),
                    message: "'names' must be a list of strings".to_string(),
                })
            }
        };

        Self::new(names).ok_or_else(|| LabelerError::ClassFileInvalid {
            path: path.to_path_buf(),
            message: "'names' is empty".to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, id: ClassId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// True when `id` indexes a known class.
    pub fn contains(&self, id: ClassId) -> bool {
        id.index() < self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (ClassId::new(i), name.as_str()))
    }
}

#[derive(Debug, Deserialize)]
struct ClassesYaml {
    names: Option<serde_yaml::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<ClassList> {
        ClassList::parse(content, Path::new("classes.yaml"))
    }

    #[test]
    fn test_parse_sequence() {
        let classes = parse("names:\n  - cave\n  - tunnel\n").unwrap();
        assert_eq!(classes.len(), 2);
        assert_eq!(classes.name(ClassId::new(0)), Some("cave"));
        assert_eq!(classes.name(ClassId::new(1)), Some("tunnel"));
        assert_eq!(classes.name(ClassId::new(2)), None);
    }

    #[test]
    fn test_parse_ignores_extra_keys() {
        let classes = parse("nc: 1\nnames: [cave]\n").unwrap();
        assert_eq!(classes.len(), 1);
    }

    #[test]
    fn test_missing_key_is_invalid() {
        let err = parse("classes:\n  - cave\n").unwrap_err();
        assert!(matches!(err, LabelerError::ClassFileInvalid { .. }));
    }

    #[test]
    fn test_mapping_is_invalid() {
        let err = parse("names:\n  0: cave\n").unwrap_err();
        assert!(matches!(err, LabelerError::ClassFileInvalid { .. }));
    }

    #[test]
    fn test_non_string_entry_is_invalid() {
        let err = parse("names:\n  - cave\n  - 3\n").unwrap_err();
        assert!(matches!(err, LabelerError::ClassFileInvalid { .. }));
    }

    #[test]
    fn test_empty_list_is_invalid() {
        let err = parse("names: []\n").unwrap_err();
        assert!(matches!(err, LabelerError::ClassFileInvalid { .. }));
    }

    #[test]
    fn test_broken_yaml_is_parse_error() {
        let err = parse("names: [cave\n").unwrap_err();
        assert!(matches!(err, LabelerError::ClassFileParse { .. }));
    }

    #[test]
    fn test_non_mapping_document_is_parse_error() {
        let err = parse("- cave\n- tunnel\n").unwrap_err();
        assert!(matches!(err, LabelerError::ClassFileParse { .. }));
    }
}
