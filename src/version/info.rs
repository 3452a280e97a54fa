//! Flat version information shared by every version source

use std::collections::BTreeMap;

#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::version::properties::parse_properties;

/// Anything that can present its versions as a single-level map
#[cfg_attr(test, automock)]
pub trait VersionInfo {
    /// Display name of the implementation
    fn name(&self) -> &'static str;

    /// Flat version map, or `None` when there is no version information at all
    fn version_map(&self) -> Option<BTreeMap<String, String>>;

    /// Human-readable summary ending with the rendered version map
    fn version_string(&self) -> String {
        let map = self
            .version_map()
            .map(|map| render_version_map(&map))
            .unwrap_or_else(|| "none".to_string());
        format!("{}\n versionMap={}", self.name(), map)
    }
}

/// Version info backed by a flat, optional map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleVersionInfo {
    version_map: Option<BTreeMap<String, String>>,
}

impl SimpleVersionInfo {
    pub fn new(version_map: Option<BTreeMap<String, String>>) -> Self {
        Self { version_map }
    }

    /// Build from `key=value` properties text
    pub fn from_properties(text: &str) -> Self {
        Self::new(Some(parse_properties(text)))
    }

    /// Replace the version map with a copy of `versions`, or clear it with `None`
    pub fn set_version_map<I, K, V>(&mut self, versions: Option<I>)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.version_map = versions.map(|versions| {
            versions
                .into_iter()
                .map(|(key, version)| (key.into(), version.into()))
                .collect()
        });
    }
}

impl VersionInfo for SimpleVersionInfo {
    fn name(&self) -> &'static str {
        "SimpleVersionInfo"
    }

    fn version_map(&self) -> Option<BTreeMap<String, String>> {
        self.version_map.clone()
    }
}

/// Implementation details of this package, captured at compile time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageVersionInfo {
    implementation_title: String,
    implementation_vendor: String,
    implementation_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    configuration_version: Option<String>,
}

impl PackageVersionInfo {
    pub fn new(
        title: impl Into<String>,
        vendor: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            implementation_title: title.into(),
            implementation_vendor: vendor.into(),
            implementation_version: version.into(),
            configuration_version: None,
        }
    }

    /// Title, vendor and version of the `version-tree` package itself.
    ///
    /// Cargo joins multiple authors with `:`; they are listed comma-separated.
    pub fn current() -> Self {
        let vendor = env!("CARGO_PKG_AUTHORS").split(':').collect::<Vec<_>>().join(", ");
        Self::new(env!("CARGO_PKG_NAME"), vendor, env!("CARGO_PKG_VERSION"))
    }

    pub fn with_configuration_version(mut self, version: impl Into<String>) -> Self {
        self.configuration_version = Some(version.into());
        self
    }

    pub fn implementation_title(&self) -> &str {
        &self.implementation_title
    }

    pub fn implementation_vendor(&self) -> &str {
        &self.implementation_vendor
    }

    pub fn implementation_version(&self) -> &str {
        &self.implementation_version
    }

    pub fn configuration_version(&self) -> Option<&str> {
        self.configuration_version.as_deref()
    }
}

impl VersionInfo for PackageVersionInfo {
    fn name(&self) -> &'static str {
        "PackageVersionInfo"
    }

    fn version_map(&self) -> Option<BTreeMap<String, String>> {
        let mut map = BTreeMap::from([
            (
                "implementationTitle".to_string(),
                self.implementation_title.clone(),
            ),
            (
                "implementationVendor".to_string(),
                self.implementation_vendor.clone(),
            ),
            (
                "implementationVersion".to_string(),
                self.implementation_version.clone(),
            ),
        ]);
        if let Some(version) = &self.configuration_version {
            map.insert("configurationVersion".to_string(), version.clone());
        }
        Some(map)
    }

    fn version_string(&self) -> String {
        let mut lines = vec![
            self.name().to_string(),
            format!(" implementationTitle={}", self.implementation_title),
            format!(" implementationVendor={}", self.implementation_vendor),
            format!(" implementationVersion={}", self.implementation_version),
        ];
        if let Some(version) = &self.configuration_version {
            lines.push(format!(" configurationVersion={version}"));
        }
        lines.join("\n")
    }
}

/// Render a map as `{k0=v0, k1=v1}`
pub fn render_version_map(map: &BTreeMap<String, String>) -> String {
    let entries: Vec<String> = map.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{{{}}}", entries.join(", "))
}
