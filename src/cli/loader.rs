//! Reading and writing version trees on disk

use std::path::Path;

use tracing::{debug, info};

use crate::version::error::LoadError;
use crate::version::info::{SimpleVersionInfo, VersionInfo};
use crate::version::properties::parse_properties;
use crate::version::tree::VersionTree;

/// Supported on-disk formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Serialized `VersionTree` (`.json`)
    Json,
    /// Flat `key=value` properties (`.properties`)
    Properties,
}

impl FileFormat {
    pub fn detect(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(FileFormat::Json),
            Some("properties") => Some(FileFormat::Properties),
            _ => None,
        }
    }
}

/// Load a tree from a `.json` or `.properties` file.
///
/// Properties become leaf versions of a single root node using `separator`.
/// JSON trees carry their own separators.
pub fn load_tree(path: &Path, separator: char) -> Result<VersionTree, LoadError> {
    let format =
        FileFormat::detect(path).ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let tree = match format {
        FileFormat::Json => {
            serde_json::from_str(&content).map_err(|source| LoadError::Json {
                path: path.to_path_buf(),
                source,
            })?
        }
        FileFormat::Properties => {
            let mut tree = VersionTree::with_separator(separator);
            tree.set_leaf_versions(parse_properties(&content));
            tree
        }
    };

    debug!("Loaded {:?} from {:?}", format, path);
    Ok(tree)
}

/// Load any supported file as flat version info.
///
/// Properties files stay flat (`SimpleVersionInfo`); JSON files load as a
/// full `VersionTree`.
pub fn load_version_info(path: &Path, separator: char) -> Result<Box<dyn VersionInfo>, LoadError> {
    match FileFormat::detect(path) {
        Some(FileFormat::Properties) => {
            let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(SimpleVersionInfo::from_properties(&content)))
        }
        _ => Ok(Box::new(load_tree(path, separator)?)),
    }
}

/// Like [`load_tree`], but a missing file yields an empty tree
pub fn load_or_create_tree(path: &Path, separator: char) -> Result<VersionTree, LoadError> {
    if path.exists() {
        load_tree(path, separator)
    } else {
        FileFormat::detect(path).ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;
        info!("{:?} does not exist, starting from an empty tree", path);
        Ok(VersionTree::with_separator(separator))
    }
}

/// Write a tree as pretty-printed JSON
pub fn save_tree(path: &Path, tree: &VersionTree) -> Result<(), LoadError> {
    let json = serde_json::to_string_pretty(tree).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json + "\n").map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Saved version tree to {:?}", path);
    Ok(())
}
