//! Command implementations behind the `version-tree` binary
//!
//! Each command returns the text to print so it can be tested without a
//! process boundary.

use std::path::Path;

use anyhow::{Context, bail};
use tracing::info;

use crate::cli::loader::{
    FileFormat, load_or_create_tree, load_tree, load_version_info, save_tree,
};
use crate::version::info::{PackageVersionInfo, VersionInfo};
use crate::version::tree::VersionTree;

/// Indented structural view of a tree
pub fn show(path: &Path, separator: char) -> anyhow::Result<String> {
    let tree = load_tree(path, separator)?;
    Ok(tree.to_string())
}

/// One-line name plus the flattened version map
pub fn summary(path: &Path, separator: char) -> anyhow::Result<String> {
    let info = load_version_info(path, separator)?;
    Ok(info.version_string())
}

/// `key=value` lines, keys either joined or as full component paths
pub fn flatten(path: &Path, separator: char, component_keys: bool) -> anyhow::Result<String> {
    if component_keys {
        let tree = load_tree(path, separator)?;
        let lines: Vec<String> = tree
            .flatten_with_component_keys()
            .into_iter()
            .map(|(key, version)| format!("{key}={version}"))
            .collect();
        Ok(lines.join("\n"))
    } else {
        let info = load_version_info(path, separator)?;
        Ok(render_flat(&*info))
    }
}

/// Version at a key path
pub fn get(path: &Path, separator: char, keys: &[String]) -> anyhow::Result<String> {
    let tree = load_tree(path, separator)?;
    match tree.version_for_keys(keys)? {
        Some(version) => Ok(version.to_string()),
        None => bail!("No version found for keys [{}]", keys.join(", ")),
    }
}

/// Maximum depth, `-1` when the tree holds no versions
pub fn depth(path: &Path, separator: char) -> anyhow::Result<String> {
    let tree = load_tree(path, separator)?;
    Ok(tree
        .max_depth()
        .map_or_else(|| "-1".to_string(), |depth| depth.to_string()))
}

/// Set a version at a key path and write the tree back as JSON
pub fn set(
    path: &Path,
    separator: char,
    version: &str,
    keys: &[String],
    output: Option<&Path>,
) -> anyhow::Result<String> {
    let mut tree = load_or_create_tree(path, separator)?;
    tree.set_version_for_keys(version, keys)?;

    let target = output.unwrap_or(path);
    write_json(target, &tree)?;
    info!("Set [{}] = {}", keys.join(", "), version);
    Ok(format!("Set [{}] = {} in {}", keys.join(", "), version, target.display()))
}

/// Replace the sub-tree at a key path with the tree from `subtree_path`
pub fn graft(
    path: &Path,
    separator: char,
    subtree_path: &Path,
    keys: &[String],
    output: Option<&Path>,
) -> anyhow::Result<String> {
    let mut tree = load_or_create_tree(path, separator)?;
    let subtree = load_tree(subtree_path, separator)
        .with_context(|| format!("Failed to load subtree {}", subtree_path.display()))?;
    tree.set_version_info_for_keys(subtree, keys)?;

    let target = output.unwrap_or(path);
    write_json(target, &tree)?;
    info!("Grafted {:?} at [{}]", subtree_path, keys.join(", "));
    Ok(format!(
        "Grafted {} at [{}] in {}",
        subtree_path.display(),
        keys.join(", "),
        target.display()
    ))
}

/// Implementation details of this tool, plus an optional configuration version
pub fn about(configuration_version: Option<&str>) -> String {
    let info = PackageVersionInfo::current();
    match configuration_version {
        Some(version) => info.with_configuration_version(version).version_string(),
        None => info.version_string(),
    }
}

fn write_json(target: &Path, tree: &VersionTree) -> anyhow::Result<()> {
    if FileFormat::detect(target) != Some(FileFormat::Json) {
        bail!("Output must be a .json file: {}", target.display());
    }
    save_tree(target, tree)?;
    Ok(())
}

/// Render flat version info as sorted `key=value` lines
pub fn render_flat(info: &dyn VersionInfo) -> String {
    info.version_map()
        .map(|map| {
            map.iter()
                .map(|(key, version)| format!("{key}={version}"))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default()
}
