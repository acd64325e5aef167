//! Flat, path-keyed node records.
//!
//! Hosts that describe a tree as a map of `key -> record` (with child `i` of
//! `K` stored under `K_i`) can turn it into a [`BoxTree`] here. Every child a
//! record announces must exist, and every record must hang off the root.

use indexmap::IndexMap;

use crate::errors::TreeError;
use crate::path::{NodePath, SEPARATOR};
use crate::tree::BoxTree;
use crate::types::Direction;

/// One node as described by the data source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatRecord {
    /// Content tag (solver type)
    #[cfg_attr(feature = "serde", serde(alias = "pc_type"))]
    pub category: String,
    /// Explicit split direction as written by the source; derived from the
    /// category when absent. Parsed through `Direction`'s `FromStr`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub direction: Option<String>,
    /// Number of children stored under `key_0 .. key_{n-1}`
    #[cfg_attr(feature = "serde", serde(default, alias = "num_children", alias = "child_count"))]
    pub children: usize,
    /// Label override; the path key is drawn otherwise
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<String>,
}

impl FlatRecord {
    pub fn new(category: impl Into<String>, children: usize) -> Self {
        Self {
            category: category.into(),
            direction: None,
            children,
            label: None,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction.as_str().to_string());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Explicit direction, or the category mapping.
    pub fn resolved_direction(&self) -> Result<Direction, TreeError> {
        match &self.direction {
            Some(value) => value.parse(),
            None => Ok(Direction::from_category(&self.category)),
        }
    }

    fn direction_at(&self, key: &str) -> Result<Direction, TreeError> {
        self.resolved_direction().map_err(|err| match err {
            TreeError::UnknownDirection { value, .. } => TreeError::UnknownDirection {
                key: Some(key.to_string()),
                value,
            },
            other => other,
        })
    }
}

impl BoxTree {
    /// Build a tree from path-keyed records.
    pub fn from_records<K, I>(root_key: &str, records: I) -> Result<Self, TreeError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FlatRecord)>,
    {
        let records: IndexMap<String, FlatRecord> = records
            .into_iter()
            .map(|(key, record)| (key.into(), record))
            .collect();

        for key in records.keys() {
            NodePath::parse(key, root_key)?;
        }

        let (root_index, _, root_record) = records
            .get_full(root_key)
            .ok_or_else(|| TreeError::MissingRoot { key: root_key.to_string() })?;

        let mut tree = BoxTree::with_root_key(
            root_key,
            root_record.category.clone(),
            root_record.direction_at(root_key)?,
        );
        if let Some(label) = &root_record.label {
            tree.set_label(tree.root(), label.clone())?;
        }

        let mut visited = vec![false; records.len()];
        visited[root_index] = true;

        let mut stack = vec![(root_key.to_string(), tree.root(), root_record.children)];
        while let Some((key, id, child_count)) = stack.pop() {
            for i in 0..child_count {
                let child_key = format!("{key}{SEPARATOR}{i}");
                let (index, _, record) =
                    records
                        .get_full(&child_key)
                        .ok_or_else(|| TreeError::MalformedTree {
                            key: key.clone(),
                            missing: child_key.clone(),
                        })?;

                let direction = record.direction_at(&child_key)?;
                let child = tree.add_child(id, record.category.clone(), direction)?;
                if let Some(label) = &record.label {
                    tree.set_label(child, label.clone())?;
                }
                visited[index] = true;
                stack.push((child_key, child, record.children));
            }
        }

        if let Some(index) = visited.iter().position(|seen| !seen) {
            let key = records
                .get_index(index)
                .map(|(key, _)| key.clone())
                .unwrap_or_default();
            return Err(TreeError::OrphanRecord { key });
        }

        Ok(tree)
    }

    /// Build a tree from a JSON object of path-keyed records.
    #[cfg(feature = "serde")]
    pub fn from_json(root_key: &str, json: &str) -> Result<Self, TreeError> {
        let records: IndexMap<String, FlatRecord> = serde_json::from_str(json)?;
        Self::from_records(root_key, records)
    }
}
