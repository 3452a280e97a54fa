//! Recursive keyed tree of version strings
//!
//! A [`VersionTree`] node holds two independent maps: leaf versions (key to
//! version string) and children (key to sub-tree). A key may appear in both.
//! Each node carries its own separator, used only when flattening its own
//! children, so sub-trees can compose their paths differently from their
//! parents.
//!
//! ```
//! use version_tree::version::tree::VersionTree;
//!
//! let mut tree = VersionTree::from_leaf_versions([("a", "1")]);
//! tree.set_version_for_keys("2", &["b", "c"]).unwrap();
//!
//! assert_eq!(tree.version_for_keys(&["b", "c"]).unwrap(), Some("2"));
//! assert_eq!(tree.flatten().get("b.c").map(String::as_str), Some("2"));
//! assert_eq!(tree.max_depth(), Some(1));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::version::error::VersionTreeError;
use crate::version::info::{VersionInfo, render_version_map};
use crate::version::key::ComponentKey;

/// Separator used when none is given
pub const DEFAULT_SEPARATOR: char = '.';

fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionTree {
    #[serde(rename = "keyConcatenationSeparator", default = "default_separator")]
    separator: char,
    #[serde(
        rename = "versionStringMap",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    leaf_versions: BTreeMap<String, String>,
    #[serde(
        rename = "versionInfoMap",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    children: BTreeMap<String, VersionTree>,
}

impl Default for VersionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionTree {
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_SEPARATOR)
    }

    pub fn with_separator(separator: char) -> Self {
        Self {
            separator,
            leaf_versions: BTreeMap::new(),
            children: BTreeMap::new(),
        }
    }

    /// Create a single-level tree holding the given leaf versions
    pub fn from_leaf_versions<I, K, V>(versions: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut tree = Self::new();
        tree.set_leaf_versions(versions);
        tree
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Change the separator used to join this node's children when flattening.
    /// Existing children keep their own separators.
    pub fn set_separator(&mut self, separator: char) {
        self.separator = separator;
    }

    /// Copy of the leaf versions held directly at this node
    pub fn leaf_versions(&self) -> BTreeMap<String, String> {
        self.leaf_versions.clone()
    }

    /// Replace all leaf versions at this node with a copy of `versions`
    pub fn set_leaf_versions<I, K, V>(&mut self, versions: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.leaf_versions = versions
            .into_iter()
            .map(|(key, version)| (key.into(), version.into()))
            .collect();
    }

    /// Copy of the direct children of this node
    pub fn children(&self) -> BTreeMap<String, VersionTree> {
        self.children.clone()
    }

    /// Replace all children of this node
    pub fn set_children<I, K>(&mut self, children: I)
    where
        I: IntoIterator<Item = (K, VersionTree)>,
        K: Into<String>,
    {
        self.children = children
            .into_iter()
            .map(|(key, child)| (key.into(), child))
            .collect();
    }

    /// True when this node has neither leaf versions nor children
    pub fn is_empty(&self) -> bool {
        self.leaf_versions.is_empty() && self.children.is_empty()
    }

    /// Leaf version stored directly at this node (no recursion)
    pub fn leaf_version(&self, key: &str) -> Option<&str> {
        self.leaf_versions.get(key).map(String::as_str)
    }

    /// Child stored directly at this node (no recursion)
    pub fn child(&self, key: &str) -> Option<&VersionTree> {
        self.children.get(key)
    }

    /// Resolve a version string by key path.
    ///
    /// Given `k0, ..., kn`, this is the leaf version `kn` of the node reached
    /// through children `k0, ..., kn-1`. A missing node or leaf along the way
    /// yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// [`VersionTreeError::EmptyKeyPath`] if `keys` is empty.
    pub fn version_for_keys<K: AsRef<str>>(
        &self,
        keys: &[K],
    ) -> Result<Option<&str>, VersionTreeError> {
        let (last, parents) = keys.split_last().ok_or(VersionTreeError::EmptyKeyPath)?;

        let containing = if parents.is_empty() {
            Some(self)
        } else {
            self.version_info_for_keys(parents)
        };
        let version = containing.and_then(|node| node.leaf_version(last.as_ref()));

        if version.is_none() {
            debug!("No version found for keys {}", render_keys(keys));
        }
        Ok(version)
    }

    /// Resolve a sub-tree by key path, following children only.
    ///
    /// Returns `None` for an empty path or as soon as a child is missing.
    pub fn version_info_for_keys<K: AsRef<str>>(&self, keys: &[K]) -> Option<&VersionTree> {
        if keys.is_empty() {
            return None;
        }
        keys.iter().try_fold(self, |node, key| node.child(key.as_ref()))
    }

    /// Set the version string at a key path, replacing any existing value.
    ///
    /// Missing intermediate nodes are created with the separator of the node
    /// they are created under.
    ///
    /// # Errors
    ///
    /// [`VersionTreeError::EmptyKeyPath`] if `keys` is empty. Nothing is
    /// modified in that case.
    pub fn set_version_for_keys<K: AsRef<str>>(
        &mut self,
        version: impl Into<String>,
        keys: &[K],
    ) -> Result<(), VersionTreeError> {
        let (last, parents) = keys.split_last().ok_or(VersionTreeError::EmptyKeyPath)?;

        self.node_for_keys_mut(parents)
            .leaf_versions
            .insert(last.as_ref().to_string(), version.into());
        Ok(())
    }

    /// Set the sub-tree at a key path, replacing (not merging) any existing
    /// child.
    ///
    /// `node` is taken by value, so a tree can never become its own
    /// descendant:
    ///
    /// ```compile_fail
    /// use version_tree::version::tree::VersionTree;
    ///
    /// let mut tree = VersionTree::new();
    /// tree.set_version_info_for_keys(tree, &["k"]).unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// [`VersionTreeError::EmptyKeyPath`] if `keys` is empty. Nothing is
    /// modified in that case.
    pub fn set_version_info_for_keys<K: AsRef<str>>(
        &mut self,
        node: VersionTree,
        keys: &[K],
    ) -> Result<(), VersionTreeError> {
        let (last, parents) = keys.split_last().ok_or(VersionTreeError::EmptyKeyPath)?;

        self.node_for_keys_mut(parents)
            .children
            .insert(last.as_ref().to_string(), node);
        Ok(())
    }

    /// Walk down `keys`, creating missing children on the way
    fn node_for_keys_mut<K: AsRef<str>>(&mut self, keys: &[K]) -> &mut VersionTree {
        keys.iter().fold(self, |node, key| {
            let separator = node.separator;
            node.children
                .entry(key.as_ref().to_string())
                .or_insert_with(|| VersionTree::with_separator(separator))
        })
    }

    /// Flatten the whole tree into a single-level map.
    ///
    /// Leaf versions keep their keys; entries of a child `k` are re-keyed as
    /// `k + separator + child_key`, where `separator` is this node's own.
    pub fn flatten(&self) -> BTreeMap<String, String> {
        let mut flat = self.leaf_versions.clone();
        for (key, child) in &self.children {
            for (child_key, version) in child.flatten() {
                flat.insert(format!("{key}{}{child_key}", self.separator), version);
            }
        }
        flat
    }

    /// Flatten the whole tree, keeping each full key path as a [`ComponentKey`]
    pub fn flatten_with_component_keys(&self) -> BTreeMap<ComponentKey, String> {
        let mut flat: BTreeMap<ComponentKey, String> = self
            .leaf_versions
            .iter()
            .map(|(key, version)| (ComponentKey::new(vec![key.clone()]), version.clone()))
            .collect();
        for (key, child) in &self.children {
            for (child_key, version) in child.flatten_with_component_keys() {
                flat.insert(child_key.prepend(key), version);
            }
        }
        flat
    }

    /// Depth below this node of the deepest leaf version.
    ///
    /// `Some(0)` when this node holds leaf versions itself, `None` when no
    /// node in the subtree holds any. Children without leaf versions anywhere
    /// never add depth.
    pub fn max_depth(&self) -> Option<usize> {
        let own = (!self.leaf_versions.is_empty()).then_some(0);
        self.children
            .values()
            .filter_map(VersionTree::max_depth)
            .map(|depth| depth + 1)
            .chain(own)
            .max()
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        let pad = "  ".repeat(level);
        writeln!(f, "VersionTree {{separator={}", self.separator)?;
        write!(f, "  {pad}children=")?;
        if self.children.is_empty() {
            writeln!(f, "{{}}")?;
        } else {
            writeln!(f)?;
            for (key, child) in &self.children {
                write!(f, "  {pad}['{key}']:")?;
                child.fmt_indented(f, level + 1)?;
                writeln!(f)?;
            }
        }
        writeln!(f, "  {pad}leafVersions={}", render_version_map(&self.leaf_versions))?;
        write!(f, "{pad}}}")
    }
}

impl fmt::Display for VersionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

impl VersionInfo for VersionTree {
    fn name(&self) -> &'static str {
        "VersionTree"
    }

    fn version_map(&self) -> Option<BTreeMap<String, String>> {
        Some(self.flatten())
    }
}

fn render_keys<K: AsRef<str>>(keys: &[K]) -> String {
    let keys: Vec<&str> = keys.iter().map(|key| key.as_ref()).collect();
    format!("[{}]", keys.join(", "))
}
