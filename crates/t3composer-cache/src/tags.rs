//! Cache tag names.

/// Tag shared by every major version page.
pub const MAJOR_VERSION: &str = "major-version";

/// Tag shared by every release page.
pub const RELEASE: &str = "release";

/// Tag of a single major version.
#[must_use]
pub fn major_version(version: &str) -> String {
    format!("{MAJOR_VERSION}-{version}")
}

/// Tag of the requirements page of a major version.
#[must_use]
pub fn requirements(version: &str) -> String {
    format!("requirements-{version}")
}

/// Tag of the release list of a major version.
#[must_use]
pub fn releases(version: &str) -> String {
    format!("releases-{version}")
}

/// Tags dropped when a major version changes.
#[must_use]
pub fn for_major_version(version: &str) -> Vec<String> {
    vec![
        major_version(version),
        MAJOR_VERSION.to_string(),
        requirements(version),
        releases(version),
        RELEASE.to_string(),
    ]
}

/// Tags dropped when the releases of a major version change.
#[must_use]
pub fn for_major_version_releases(version: &str) -> Vec<String> {
    vec![releases(version), RELEASE.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn major_version_tags() {
        assert_eq!(
            for_major_version("12"),
            vec![
                "major-version-12",
                "major-version",
                "requirements-12",
                "releases-12",
                "release"
            ]
        );
    }

    #[test]
    fn release_tags() {
        assert_eq!(for_major_version_releases("6.2"), vec!["releases-6.2", "release"]);
    }

    #[test]
    fn version_is_used_verbatim() {
        assert_eq!(major_version(""), "major-version-");
        assert_eq!(requirements("13 LTS"), "requirements-13 LTS");
    }
}
