// SPDX-License-Identifier: MPL-2.0
//! A locale bundle: every feature namespace of one locale, parsed from a
//! TOML locale file and read-only from then on.

use crate::error::{Error, Result};
use crate::tree::LabelTree;
use std::collections::BTreeMap;
use unic_langid::LanguageIdentifier;

/// All label trees of a single locale, keyed by feature namespace
/// (`actionlog`). Built once at load time; no mutation API exists, so
/// shared references are safe across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleBundle {
    locale: LanguageIdentifier,
    namespaces: BTreeMap<String, LabelTree>,
}

impl LocaleBundle {
    /// Parses a locale file. Every namespace is validated so that a bundle
    /// with an empty display string never reaches lookups.
    pub fn from_toml(locale: LanguageIdentifier, source: &str) -> Result<Self> {
        let namespaces: BTreeMap<String, LabelTree> = toml::from_str(source)?;
        for (namespace, tree) in &namespaces {
            tree.validate(namespace)?;
        }
        Ok(Self { locale, namespaces })
    }

    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    /// Resolves a key path whose first segment names the namespace,
    /// e.g. `["actionlog", "list", "columns", "timestamp"]`.
    pub fn get(&self, path: &[&str]) -> Result<&str> {
        let (namespace, rest) = match path.split_first() {
            Some(parts) => parts,
            None => return Err(Error::ShapeMismatch(String::new())),
        };
        let tree = self
            .namespaces
            .get(*namespace)
            .ok_or_else(|| Error::MissingKey(path.join(".")))?;
        if rest.is_empty() {
            // The namespace itself is a subtree, never a label.
            return Err(Error::ShapeMismatch((*namespace).to_string()));
        }
        tree.get(rest).map_err(|err| qualify(err, namespace))
    }

    /// Resolves a dotted key path, e.g. `actionlog.navItem.label`.
    pub fn lookup(&self, key: &str) -> Result<&str> {
        let segments: Vec<&str> = key.split('.').collect();
        self.get(&segments)
    }

    /// Every dotted leaf key path in the bundle, namespace-qualified and
    /// sorted. The snapshot surface for rename/removal detection.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        for (namespace, tree) in &self.namespaces {
            for path in tree.leaf_paths() {
                paths.push(format!("{}.{}", namespace, path));
            }
        }
        paths
    }

    /// Leaf paths the reference bundle has and this one lacks. The English
    /// bundle is the conventional reference; a non-empty result means
    /// untranslated keys, which lookups fall back on rather than reject.
    pub fn missing_paths(&self, reference: &LocaleBundle) -> Vec<String> {
        let mut missing = Vec::new();
        for (namespace, reference_tree) in &reference.namespaces {
            match self.namespaces.get(namespace) {
                Some(tree) => {
                    for path in tree.missing_paths(reference_tree) {
                        missing.push(format!("{}.{}", namespace, path));
                    }
                }
                None => {
                    for path in reference_tree.leaf_paths() {
                        missing.push(format!("{}.{}", namespace, path));
                    }
                }
            }
        }
        missing
    }

    /// Serializes the bundle back to its on-disk TOML form.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(&self.namespaces)?)
    }
}

fn qualify(err: Error, namespace: &str) -> Error {
    match err {
        Error::MissingKey(path) => Error::MissingKey(format!("{}.{}", namespace, path)),
        Error::ShapeMismatch(path) => Error::ShapeMismatch(format!("{}.{}", namespace, path)),
        other => other,
    }
}
