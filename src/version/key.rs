//! Composite keys for flattened version trees

use std::cmp::Ordering;
use std::fmt;

/// Full ordered path of keys from a tree node down to one of its leaf versions.
///
/// Ordering follows the rendered form (`[a, b]`), so `["a", "b"]` sorts
/// before both `["a.b"]` and `["a"]`. Paths with the same rendering fall
/// back to comparing the segments themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ComponentKey(Vec<String>);

impl ComponentKey {
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub(crate) fn prepend(mut self, key: &str) -> Self {
        self.0.insert(0, key.to_string());
        self
    }

    /// Characters of the `Display` form, produced without allocating
    fn rendered(&self) -> impl Iterator<Item = char> + '_ {
        let body = self.0.iter().enumerate().flat_map(|(i, segment)| {
            let comma = if i == 0 { "" } else { ", " };
            comma.chars().chain(segment.chars())
        });
        std::iter::once('[').chain(body).chain(std::iter::once(']'))
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

impl Ord for ComponentKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rendered()
            .cmp(other.rendered())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for ComponentKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Vec<String>> for ComponentKey {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl From<&[&str]> for ComponentKey {
    fn from(segments: &[&str]) -> Self {
        Self(segments.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ComponentKey {
    fn from(segments: [&str; N]) -> Self {
        Self(segments.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn display_renders_bracketed_comma_separated_segments() {
        assert_eq!(ComponentKey::from(["a", "b", "c"]).to_string(), "[a, b, c]");
        assert_eq!(ComponentKey::default().to_string(), "[]");
    }

    #[rstest]
    #[case(&["a"], &["a", "b"], Ordering::Greater)]
    #[case(&["a", "b"], &["a.b"], Ordering::Less)]
    #[case(&["b"], &["a", "z"], Ordering::Greater)]
    #[case(&["x", "y"], &["x", "y"], Ordering::Equal)]
    // "[a, b]" renders identically for both; segments break the tie
    #[case(&["a", "b"], &["a, b"], Ordering::Less)]
    fn cmp_orders_by_rendered_form(
        #[case] left: &[&str],
        #[case] right: &[&str],
        #[case] expected: Ordering,
    ) {
        assert_eq!(
            ComponentKey::from(left).cmp(&ComponentKey::from(right)),
            expected
        );
    }

    #[rstest]
    #[case(&[])]
    #[case(&["a"])]
    #[case(&["core", "lib", "version"])]
    #[case(&["a, b", ""])]
    fn rendered_matches_display(#[case] segments: &[&str]) {
        let key = ComponentKey::from(segments);

        assert_eq!(key.rendered().collect::<String>(), key.to_string());
    }

    #[test]
    fn prepend_inserts_key_at_front() {
        let key = ComponentKey::from(["b"]).prepend("a");

        assert_eq!(key.segments(), ["a".to_string(), "b".to_string()]);
    }
}
