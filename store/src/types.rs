//! The todo list and its items.
//!
//! # Design
//! `List` is a newtype over `Vec<Item>` with `#[serde(transparent)]`, so the
//! on-disk file is a bare JSON array. Ids are 1-based positions: `get`,
//! `complete`, and `delete` all subtract one before indexing.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// A single todo entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub task: String,
    pub done: bool,
}

/// The full ordered collection of items, the unit of persistence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct List(Vec<Item>);

impl List {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Reads the full list from `path`.
    ///
    /// A missing file and a zero-byte file both load as an empty list; the
    /// file only comes into existence on the first successful `save`. Any
    /// other read failure or malformed content is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::new()),
            Err(err) => return Err(StoreError::Io(err)),
        };
        if bytes.is_empty() {
            return Ok(Self::new());
        }
        serde_json::from_slice(&bytes).map_err(StoreError::Parse)
    }

    /// Serializes the full list and overwrites the file at `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let json = serde_json::to_vec(self).map_err(StoreError::Parse)?;
        fs::write(path, json).map_err(StoreError::Io)
    }

    /// Appends a new incomplete item with the given task text.
    pub fn add(&mut self, task: impl Into<String>) {
        self.0.push(Item {
            task: task.into(),
            done: false,
        });
    }

    /// Marks the item at 1-based position `id` as done.
    pub fn complete(&mut self, id: usize) -> Result<(), StoreError> {
        let len = self.0.len();
        match id.checked_sub(1).and_then(|i| self.0.get_mut(i)) {
            Some(item) => {
                item.done = true;
                Ok(())
            }
            None => Err(StoreError::OutOfRange { id, len }),
        }
    }

    /// Removes the item at 1-based position `id`, shifting later items down.
    /// Out-of-range ids are ignored; callers validate before deleting.
    pub fn delete(&mut self, id: usize) {
        if (1..=self.0.len()).contains(&id) {
            self.0.remove(id - 1);
        }
    }

    /// Returns the item at 1-based position `id`, if any.
    pub fn get(&self, id: usize) -> Option<&Item> {
        id.checked_sub(1).and_then(|i| self.0.get(i))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.0
    }

    pub fn into_items(self) -> Vec<Item> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_with_lowercase_fields() {
        let item = Item {
            task: "Test".to_string(),
            done: false,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["task"], "Test");
        assert_eq!(json["done"], false);
    }

    #[test]
    fn list_serializes_as_bare_array() {
        let mut list = List::new();
        list.add("one");
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"task":"one","done":false}]"#);
    }

    #[test]
    fn add_appends_incomplete_items_in_order() {
        let mut list = List::new();
        list.add("one");
        list.add("two");
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).map(|i| i.task.as_str()), Some("one"));
        assert_eq!(list.get(2).map(|i| i.task.as_str()), Some("two"));
        assert!(list.items().iter().all(|i| !i.done));
    }

    #[test]
    fn get_is_one_based() {
        let mut list = List::new();
        list.add("only");
        assert!(list.get(0).is_none());
        assert!(list.get(1).is_some());
        assert!(list.get(2).is_none());
    }

    #[test]
    fn complete_marks_only_the_addressed_item() {
        let mut list = List::new();
        list.add("one");
        list.add("two");
        list.add("three");
        list.complete(2).unwrap();
        let done: Vec<bool> = list.items().iter().map(|i| i.done).collect();
        assert_eq!(done, vec![false, true, false]);
    }

    #[test]
    fn complete_out_of_range_is_an_error() {
        let mut list = List::new();
        list.add("only");
        assert!(matches!(
            list.complete(0),
            Err(StoreError::OutOfRange { id: 0, len: 1 })
        ));
        assert!(matches!(
            list.complete(2),
            Err(StoreError::OutOfRange { id: 2, len: 1 })
        ));
    }

    #[test]
    fn delete_removes_and_shifts_later_items() {
        let mut list = List::new();
        list.add("one");
        list.add("two");
        list.add("three");
        list.delete(1);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).map(|i| i.task.as_str()), Some("two"));
        assert_eq!(list.get(2).map(|i| i.task.as_str()), Some("three"));
    }

    #[test]
    fn delete_out_of_range_is_a_noop() {
        let mut list = List::new();
        list.add("only");
        list.delete(0);
        list.delete(2);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn load_missing_file_is_an_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let list = List::load(dir.path().join("missing.json")).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn load_empty_file_is_an_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.json");
        fs::write(&path, "").unwrap();
        let list = List::load(&path).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn load_malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(List::load(&path), Err(StoreError::Parse(_))));
    }

    #[test]
    fn save_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.json");
        let mut list = List::new();
        list.add("one");
        list.save(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_then_load_preserves_order_and_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.json");

        let mut list = List::new();
        list.add("one");
        list.add("two");
        list.add("three");
        list.complete(2).unwrap();
        list.save(&path).unwrap();

        let loaded = List::load(&path).unwrap();
        assert_eq!(loaded, list);
    }
}
