//! Composer constraint building and release version parsing.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static MAJOR_MINOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+").expect("major.minor regex is valid"));

static MAJOR_MINOR_PATCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)").expect("major.minor.patch regex is valid")
});

static CARET_MAJOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\^([0-9]+)").expect("caret regex is valid"));

static LEADING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+").expect("leading digits regex is valid"));

/// Composer version constraint as offered to the user.
///
/// Built from a release version; the raw string is what ends up in the
/// `require` section of a `composer.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionConstraint {
    raw: String,
}

impl VersionConstraint {
    /// Build the constraint for a version string.
    ///
    /// Development constraints pin the exact version with `@dev` stability,
    /// stable ones allow any update within `major.minor`. Input without a
    /// leading `major.minor` yields the empty constraint.
    #[must_use]
    pub fn for_version(version: &str, development: bool) -> Self {
        let raw = if development {
            format!("^{version}@dev")
        } else if let Some(m) = MAJOR_MINOR.find(version) {
            format!("^{}", m.as_str())
        } else {
            String::new()
        };
        Self { raw }
    }

    /// Wrap an already-built constraint string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Any version.
    #[must_use]
    pub fn any() -> Self {
        Self::new("*")
    }

    /// Get raw constraint string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether no constraint is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether this constraint targets development stability.
    #[must_use]
    pub fn is_development(&self) -> bool {
        self.raw.ends_with("@dev")
    }

    /// Consume into the raw string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.raw
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Build a Composer constraint string for `version`.
#[must_use]
pub fn composer_constraint(version: &str, development: bool) -> String {
    VersionConstraint::for_version(version, development).into_string()
}

/// Leading `major.minor.patch` of a release version string.
///
/// Anything after the patch number (pre-release suffixes and the like) is
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseVersion {
    /// Major number.
    pub major: u64,
    /// Minor number.
    pub minor: u64,
    /// Patch number.
    pub patch: u64,
}

impl ReleaseVersion {
    /// Parse the leading `major.minor.patch` triple.
    #[must_use]
    pub fn parse(version: &str) -> Option<Self> {
        let caps = MAJOR_MINOR_PATCH.captures(version)?;
        Some(Self {
            major: caps[1].parse().ok()?,
            minor: caps[2].parse().ok()?,
            patch: caps[3].parse().ok()?,
        })
    }

    /// The following minor release, e.g. `12.5` for `12.4.3`.
    #[must_use]
    pub fn next_minor(&self) -> String {
        format!("{}.{}", self.major, self.minor.saturating_add(1))
    }

    /// The following patch release, e.g. `12.4.4` for `12.4.3`.
    #[must_use]
    pub fn next_patch(&self) -> String {
        format!(
            "{}.{}.{}",
            self.major,
            self.minor,
            self.patch.saturating_add(1)
        )
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Major version of a caret constraint such as `^11` or `^12.4`.
#[must_use]
pub fn caret_major(constraint: &str) -> Option<u32> {
    CARET_MAJOR
        .captures(constraint)
        .and_then(|caps| caps[1].parse().ok())
}

/// Leading digits of a release version, e.g. `12` for `12.4.3`.
#[must_use]
pub fn leading_major(version: &str) -> Option<u32> {
    LEADING_DIGITS
        .find(version)
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case("12.4.3", false, "^12.4" ; "stable release keeps major minor")]
    #[test_case("11.5", false, "^11.5" ; "stable major minor")]
    #[test_case("10.4.37-dev", false, "^10.4" ; "suffix ignored")]
    #[test_case("12.5", true, "^12.5@dev" ; "next minor development")]
    #[test_case("12.4.4", true, "^12.4.4@dev" ; "next patch development")]
    #[test_case("12", false, "" ; "major only is not enough")]
    #[test_case("", false, "" ; "empty input")]
    #[test_case("v12.4.3", false, "" ; "prefixed version")]
    fn test_composer_constraint(version: &str, development: bool, expected: &str) {
        assert_eq!(composer_constraint(version, development), expected);
    }

    #[test]
    fn development_wraps_anything() {
        // The development branch does not inspect its input.
        assert_eq!(composer_constraint("garbage", true), "^garbage@dev");
    }

    #[test]
    fn constraint_flags() {
        let dev = VersionConstraint::for_version("12.4.4", true);
        assert!(dev.is_development());
        assert!(!dev.is_empty());

        let none = VersionConstraint::for_version("latest", false);
        assert!(none.is_empty());
        assert_eq!(VersionConstraint::any().as_str(), "*");
    }

    #[test]
    fn next_versions() {
        let v = ReleaseVersion::parse("12.4.3").unwrap();
        assert_eq!(v.next_minor(), "12.5");
        assert_eq!(v.next_patch(), "12.4.4");
        assert_eq!(v.to_string(), "12.4.3");
    }

    #[test]
    fn parse_requires_three_components() {
        assert!(ReleaseVersion::parse("12.4").is_none());
        assert!(ReleaseVersion::parse("dev-main").is_none());
        assert_eq!(
            ReleaseVersion::parse("13.0.0-RC1"),
            Some(ReleaseVersion {
                major: 13,
                minor: 0,
                patch: 0
            })
        );
    }

    #[test]
    fn release_versions_order_numerically() {
        let a = ReleaseVersion::parse("12.4.10").unwrap();
        let b = ReleaseVersion::parse("12.4.9").unwrap();
        assert!(a > b);
    }

    #[test_case("^11", Some(11))]
    #[test_case("^12.4", Some(12))]
    #[test_case("^12.4.4@dev", Some(12))]
    #[test_case("12.4", None)]
    #[test_case("*", None)]
    #[test_case("", None)]
    fn test_caret_major(constraint: &str, expected: Option<u32>) {
        assert_eq!(caret_major(constraint), expected);
    }

    #[test]
    fn test_leading_major() {
        assert_eq!(leading_major("12.4.3"), Some(12));
        assert_eq!(leading_major("8"), Some(8));
        assert_eq!(leading_major("x8"), None);
    }

    proptest! {
        #[test]
        fn stable_major_minor(major in 0u32..1000, minor in 0u32..1000) {
            prop_assert_eq!(
                composer_constraint(&format!("{major}.{minor}"), false),
                format!("^{major}.{minor}")
            );
        }

        #[test]
        fn development_full_version(major in 0u32..1000, minor in 0u32..1000, patch in 0u32..1000) {
            let version = format!("{major}.{minor}.{patch}");
            prop_assert_eq!(composer_constraint(&version, true), format!("^{version}@dev"));
        }

        #[test]
        fn no_leading_digits_is_empty(s in "[a-zA-Z ._~^*-][a-zA-Z0-9 ._~^*-]{0,16}") {
            prop_assert_eq!(composer_constraint(&s, false), "");
        }
    }
}
