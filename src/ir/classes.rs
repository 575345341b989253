//! Class name to class id mapping, read from a plain classes file.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::ReformatError;

/// Maps class names to dense integer ids.
///
/// Ids follow line order in the classes file, starting at 0. A name that
/// appears twice keeps the id of its *last* line, and every line (blank
/// lines included) consumes an id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassIndex {
    ids: BTreeMap<String, usize>,
}

impl ClassIndex {
    /// Reads a classes file with one class name per line.
    pub fn from_path(path: &Path) -> Result<Self, ReformatError> {
        let data = fs::read_to_string(path).map_err(|source| ReformatError::ClassesRead {
            path: path.to_path_buf(),
            source,
        })?;
        let index = Self::from_lines(&data);
        tracing::debug!(
            "Loaded {} class name(s) from {}",
            index.len(),
            path.display()
        );
        Ok(index)
    }

    /// Builds an index from the contents of a classes file.
    pub fn from_lines(data: &str) -> Self {
        let ids = data
            .lines()
            .enumerate()
            .map(|(line_idx, line)| (line.trim().to_string(), line_idx))
            .collect();
        Self { ids }
    }

    pub fn get(&self, class_name: &str) -> Option<usize> {
        self.ids.get(class_name).copied()
    }

    /// Looks up `class_name`, failing if the classes file did not list it.
    ///
    /// `file_path` is only used to say which image referenced the class.
    pub fn resolve(&self, class_name: &str, file_path: &str) -> Result<usize, ReformatError> {
        self.get(class_name)
            .ok_or_else(|| ReformatError::UnknownClass {
                class_name: class_name.to_string(),
                file_path: file_path.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates `(name, id)` pairs ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        let mut pairs: Vec<(&str, usize)> = self
            .ids
            .iter()
            .map(|(name, id)| (name.as_str(), *id))
            .collect();
        pairs.sort_by_key(|(_, id)| *id);
        pairs.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_ids_in_line_order() {
        let index = ClassIndex::from_lines("cat\ndog\nbird\n");
        assert_eq!(index.get("cat"), Some(0));
        assert_eq!(index.get("dog"), Some(1));
        assert_eq!(index.get("bird"), Some(2));
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn last_duplicate_wins() {
        let index = ClassIndex::from_lines("cat\ndog\ncat\n");
        assert_eq!(index.get("cat"), Some(2));
        assert_eq!(index.get("dog"), Some(1));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn strips_surrounding_whitespace_and_crlf() {
        let index = ClassIndex::from_lines("  cat \r\n\tdog\r\n");
        assert_eq!(index.get("cat"), Some(0));
        assert_eq!(index.get("dog"), Some(1));
    }

    #[test]
    fn blank_lines_still_consume_an_id() {
        let index = ClassIndex::from_lines("cat\n\ndog\n");
        assert_eq!(index.get("dog"), Some(2));
        assert_eq!(index.get(""), Some(1));
    }

    #[test]
    fn resolve_reports_unknown_class() {
        let index = ClassIndex::from_lines("cat\n");
        assert_eq!(index.resolve("cat", "img.jpg").expect("known class"), 0);

        let err = index.resolve("dog", "img.jpg").unwrap_err();
        assert!(matches!(
            err,
            ReformatError::UnknownClass { ref class_name, .. } if class_name == "dog"
        ));
        assert!(err.to_string().contains("img.jpg"));
    }

    #[test]
    fn iter_is_ordered_by_id() {
        let index = ClassIndex::from_lines("zebra\nant\nmoth\n");
        let names: Vec<&str> = index.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["zebra", "ant", "moth"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let err = ClassIndex::from_path(&temp.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, ReformatError::ClassesRead { .. }));
    }
}
