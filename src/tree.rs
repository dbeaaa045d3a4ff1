// SPDX-License-Identifier: MPL-2.0
//! Nested label trees: the in-memory shape of one feature namespace.
//!
//! A tree maps string keys to either a terminal display string (a leaf) or
//! a further subtree. Key paths such as `list.columns.timestamp` are stable
//! identifiers that UI code references literally, so the set of leaf paths
//! is enumerable and snapshot-tested.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One node of a label tree: a display string or a nested mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelNode {
    Leaf(String),
    Branch(LabelTree),
}

/// A mapping from keys to label nodes. Finite depth, no cycles; sibling
/// keys are unique by construction. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelTree(pub BTreeMap<String, LabelNode>);

impl LabelTree {
    /// Resolves a chain of keys to its leaf string.
    ///
    /// Fails with [`Error::MissingKey`] when a key is absent and with
    /// [`Error::ShapeMismatch`] when the path stops on a subtree or tries
    /// to descend through a leaf.
    pub fn get(&self, path: &[&str]) -> Result<&str> {
        let joined = || path.join(".");
        if path.is_empty() {
            return Err(Error::ShapeMismatch(String::new()));
        }
        let mut current = self;
        for (depth, key) in path.iter().enumerate() {
            let node = current
                .0
                .get(*key)
                .ok_or_else(|| Error::MissingKey(joined()))?;
            let last = depth == path.len() - 1;
            match node {
                LabelNode::Leaf(value) if last => return Ok(value),
                LabelNode::Leaf(_) => return Err(Error::ShapeMismatch(joined())),
                LabelNode::Branch(_) if last => return Err(Error::ShapeMismatch(joined())),
                LabelNode::Branch(subtree) => current = subtree,
            }
        }
        unreachable!("loop returns on the last path segment")
    }

    /// Enumerates every dotted leaf key path, in sorted order.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaf_paths(self, None, &mut paths);
        paths
    }

    /// Leaf paths present in `reference` but absent here. Used to diff a
    /// partially translated locale against the default-locale bundle.
    pub fn missing_paths(&self, reference: &LabelTree) -> Vec<String> {
        let own: std::collections::BTreeSet<String> = self.leaf_paths().into_iter().collect();
        reference
            .leaf_paths()
            .into_iter()
            .filter(|path| !own.contains(path))
            .collect()
    }

    /// Checks the leaf invariant: every leaf holds a non-empty string.
    /// `prefix` qualifies error paths with the caller's namespace.
    pub fn validate(&self, prefix: &str) -> Result<()> {
        for (key, node) in &self.0 {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", prefix, key)
            };
            match node {
                LabelNode::Leaf(value) if value.is_empty() => {
                    return Err(Error::EmptyLabel(path));
                }
                LabelNode::Leaf(_) => {}
                LabelNode::Branch(subtree) => subtree.validate(&path)?,
            }
        }
        Ok(())
    }
}

fn collect_leaf_paths(tree: &LabelTree, prefix: Option<&str>, out: &mut Vec<String>) {
    for (key, node) in &tree.0 {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };
        match node {
            LabelNode::Leaf(_) => out.push(path),
            LabelNode::Branch(subtree) => collect_leaf_paths(subtree, Some(&path), out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> LabelTree {
        toml::from_str(
            r#"
            [navItem]
            label = "Action log"

            [list]
            title = "Action log"

            [list.columns]
            timestamp = "Timestamp"
            actor = "User"
            "#,
        )
        .expect("sample tree should parse")
    }

    #[test]
    fn get_resolves_leaf_at_depth_three() {
        let tree = sample_tree();
        assert_eq!(
            tree.get(&["list", "columns", "timestamp"]),
            Ok("Timestamp")
        );
    }

    #[test]
    fn get_missing_key_reports_full_path() {
        let tree = sample_tree();
        let err = tree.get(&["list", "columns", "nonexistent"]).unwrap_err();
        assert_eq!(err, Error::MissingKey("list.columns.nonexistent".into()));
    }

    #[test]
    fn get_on_subtree_is_shape_mismatch() {
        let tree = sample_tree();
        let err = tree.get(&["list", "columns"]).unwrap_err();
        assert_eq!(err, Error::ShapeMismatch("list.columns".into()));
    }

    #[test]
    fn get_through_leaf_is_shape_mismatch() {
        let tree = sample_tree();
        let err = tree.get(&["navItem", "label", "deeper"]).unwrap_err();
        assert_eq!(err, Error::ShapeMismatch("navItem.label.deeper".into()));
    }

    #[test]
    fn get_empty_path_is_shape_mismatch() {
        let tree = sample_tree();
        assert!(matches!(tree.get(&[]), Err(Error::ShapeMismatch(_))));
    }

    #[test]
    fn leaf_paths_are_sorted_and_complete() {
        let tree = sample_tree();
        assert_eq!(
            tree.leaf_paths(),
            vec![
                "list.columns.actor",
                "list.columns.timestamp",
                "list.title",
                "navItem.label",
            ]
        );
    }

    #[test]
    fn missing_paths_diffs_against_reference() {
        let reference = sample_tree();
        let partial: LabelTree = toml::from_str(
            r#"
            [navItem]
            label = "Journal d'activité"

            [list.columns]
            timestamp = "Horodatage"
            "#,
        )
        .expect("partial tree should parse");

        assert_eq!(
            partial.missing_paths(&reference),
            vec!["list.columns.actor", "list.title"]
        );
        assert!(reference.missing_paths(&reference).is_empty());
    }

    #[test]
    fn validate_rejects_empty_leaf() {
        let tree: LabelTree = toml::from_str(
            r#"
            [list.columns]
            timestamp = ""
            "#,
        )
        .expect("tree should parse");
        let err = tree.validate("actionlog").unwrap_err();
        assert_eq!(
            err,
            Error::EmptyLabel("actionlog.list.columns.timestamp".into())
        );
    }

    #[test]
    fn validate_accepts_populated_tree() {
        assert_eq!(sample_tree().validate("actionlog"), Ok(()));
    }
}
