mod helper;

use std::collections::BTreeMap;

use rstest::rstest;

use helper::create_app_tree;
use version_tree::version::error::VersionTreeError;
use version_tree::version::info::VersionInfo;
use version_tree::version::key::ComponentKey;
use version_tree::version::tree::VersionTree;

fn string_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn flatten_joins_each_level_with_its_own_separator() {
    let tree = create_app_tree();

    assert_eq!(
        tree.flatten(),
        string_map(&[
            ("app", "2.4.0"),
            ("build", "118"),
            ("server.jetty", "9.4"),
            ("server.ssl-protocol", "TLSv1.3"),
            ("web.spring", "5.3"),
        ])
    );
    assert_eq!(tree.max_depth(), Some(2));
}

#[test]
fn flattened_component_keys_resolve_to_same_versions() {
    let tree = create_app_tree();
    let flat = tree.flatten_with_component_keys();

    assert_eq!(flat.len(), tree.flatten().len());
    for (key, version) in &flat {
        assert_eq!(
            tree.version_for_keys(key.segments()),
            Ok(Some(version.as_str())),
            "lookup of {key}"
        );
    }
}

#[test]
fn component_keys_iterate_in_rendered_order() {
    let tree = create_app_tree();

    let rendered: Vec<String> = tree
        .flatten_with_component_keys()
        .keys()
        .map(ComponentKey::to_string)
        .collect();

    assert_eq!(
        rendered,
        vec![
            "[app]",
            "[build]",
            "[server, jetty]",
            "[server, ssl, protocol]",
            "[web, spring]",
        ]
    );
}

#[rstest]
#[case(&["app"])]
#[case(&["server", "jetty"])]
#[case(&["server", "ssl", "cipher"])]
#[case(&["new", "deeply", "nested", "component"])]
fn set_then_get_returns_value(#[case] keys: &[&str]) {
    let mut tree = create_app_tree();

    tree.set_version_for_keys("0.0.1-SNAPSHOT", keys).unwrap();

    assert_eq!(tree.version_for_keys(keys), Ok(Some("0.0.1-SNAPSHOT")));
    assert!(tree.max_depth().unwrap() >= keys.len() - 1);
}

#[rstest]
#[case(&["missing"])]
#[case(&["server", "tomcat"])]
#[case(&["server", "ssl"])]
#[case(&["web", "spring", "mvc"])]
fn lookup_misses_return_none(#[case] keys: &[&str]) {
    let tree = create_app_tree();

    assert_eq!(tree.version_for_keys(keys), Ok(None));
}

#[test]
fn contract_violations_leave_tree_untouched() {
    let mut tree = create_app_tree();
    let before = tree.clone();
    let no_keys: Vec<String> = Vec::new();

    assert_eq!(
        tree.version_for_keys(&no_keys),
        Err(VersionTreeError::EmptyKeyPath)
    );
    assert_eq!(
        tree.set_version_for_keys("1", &no_keys),
        Err(VersionTreeError::EmptyKeyPath)
    );
    assert_eq!(
        tree.set_version_info_for_keys(VersionTree::new(), &no_keys),
        Err(VersionTreeError::EmptyKeyPath)
    );
    assert_eq!(tree, before);
}

#[test]
fn grafted_subtree_keeps_its_separator() {
    let mut tree = create_app_tree();
    let mut db = VersionTree::with_separator('/');
    db.set_version_for_keys("42.7", &["driver", "postgres"]).unwrap();

    tree.set_version_info_for_keys(db, &["server", "db"]).unwrap();

    assert_eq!(
        tree.flatten().get("server.db-driver/postgres"),
        Some(&"42.7".to_string())
    );
    assert_eq!(tree.max_depth(), Some(3));
}

#[test]
fn repeated_bulk_set_is_idempotent() {
    let mut tree = create_app_tree();
    let versions = string_map(&[("app", "3.0.0"), ("build", "200")]);

    tree.set_leaf_versions(versions.clone());
    let once = tree.flatten();
    tree.set_leaf_versions(versions);

    assert_eq!(tree.flatten(), once);
}

#[test]
fn bulk_getter_copies_do_not_alias_tree() {
    let tree = create_app_tree();

    let mut leaves = tree.leaf_versions();
    leaves.clear();
    let mut children = tree.children();
    children
        .get_mut("web")
        .unwrap()
        .set_version_for_keys("6.0", &["spring"])
        .unwrap();

    assert_eq!(tree.leaf_version("app"), Some("2.4.0"));
    assert_eq!(tree.version_for_keys(&["web", "spring"]), Ok(Some("5.3")));
}

#[test]
fn json_document_with_original_field_names_loads() {
    let json = r##"{
        "keyConcatenationSeparator": "^",
        "versionStringMap": { "vsd0": "valueH" },
        "versionInfoMap": {
            "vip2.0": {
                "keyConcatenationSeparator": "#",
                "versionInfoMap": {
                    "vip0.0": { "versionStringMap": { "vsa0": "valueA" } }
                }
            }
        }
    }"##;

    let tree: VersionTree = serde_json::from_str(json).unwrap();

    assert_eq!(
        tree.flatten(),
        string_map(&[("vsd0", "valueH"), ("vip2.0^vip0.0#vsa0", "valueA")])
    );
    assert_eq!(
        tree.version_for_keys(&["vip2.0", "vip0.0", "vsa0"]),
        Ok(Some("valueA"))
    );
}

#[test]
fn version_string_ends_with_version_map() {
    let tree = create_app_tree();

    assert!(
        tree.version_string()
            .ends_with("{app=2.4.0, build=118, server.jetty=9.4, server.ssl-protocol=TLSv1.3, web.spring=5.3}")
    );
}
