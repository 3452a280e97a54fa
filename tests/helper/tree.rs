//! Version tree fixtures

use std::path::{Path, PathBuf};

use version_tree::version::tree::VersionTree;

/// Component versions of a small web application:
///
/// ```text
/// app = 2.4.0
/// build = 118
/// server/ (separator '-')
///   jetty = 9.4
///   ssl/
///     protocol = TLSv1.3
/// web/
///   spring = 5.3
/// ```
pub fn create_app_tree() -> VersionTree {
    let mut server = VersionTree::with_separator('-');
    server.set_version_for_keys("9.4", &["jetty"]).unwrap();
    server.set_version_for_keys("TLSv1.3", &["ssl", "protocol"]).unwrap();

    let mut tree = VersionTree::from_leaf_versions([("app", "2.4.0"), ("build", "118")]);
    tree.set_version_info_for_keys(server, &["server"]).unwrap();
    tree.set_version_for_keys("5.3", &["web", "spring"]).unwrap();
    tree
}

/// Write `content` to `name` inside `dir` and return the full path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
