//! Builds the version selector and package checkboxes from release data.

use crate::catalog::{CMS_VERSIONS_GROUP, PACKAGES, SPECIAL_VERSIONS, SPECIAL_VERSIONS_GROUP};
use crate::form::{Attributes, CheckboxField, ChoiceField, FormBuilder, VersionChoices};
use crate::release::{MajorVersion, MajorVersionRepository};
use crate::version::composer_constraint;
use crate::{Error, Result};
use tracing::{debug, warn};

/// Identifier of the version choice field.
pub const VERSION_FIELD: &str = "typo3_version";

const CHANGE_HANDLER: &str = "checkboxChangeEvent()";

/// Assembles the helper form against a major version repository.
#[derive(Debug)]
pub struct FormAssembler<'r, R: ?Sized> {
    repository: &'r R,
}

impl<'r, R> FormAssembler<'r, R>
where
    R: MajorVersionRepository + ?Sized,
{
    /// Create an assembler reading from `repository`.
    #[must_use]
    pub fn new(repository: &'r R) -> Self {
        Self { repository }
    }

    /// Add every field to `builder` and return the finished form.
    pub fn build<B: FormBuilder>(&self, mut builder: B) -> Result<B::Form> {
        builder.add_choice(self.version_field()?);
        for field in self.package_fields() {
            builder.add_checkbox(field);
        }
        Ok(builder.finish())
    }

    /// The `typo3_version` field, preselecting the latest LTS release.
    pub fn version_field(&self) -> Result<ChoiceField> {
        let lts = self
            .repository
            .find_latest_lts_composer_supported()
            .ok_or_else(Error::no_lts_major_version)?;
        let release = lts
            .latest_release()
            .ok_or_else(|| Error::no_release(lts.title()))?;
        debug!(major = lts.version(), release = release.version(), "default version");

        Ok(ChoiceField {
            name: VERSION_FIELD.to_string(),
            label: "TYPO3 Version".to_string(),
            label_attr: Attributes::from([("class".to_string(), "version-label".to_string())]),
            attr: Attributes::from([
                (
                    "data-composer-helper-version".to_string(),
                    "true".to_string(),
                ),
                ("onChange".to_string(), CHANGE_HANDLER.to_string()),
            ]),
            required: true,
            data: composer_constraint(release.version(), false),
            choices: self.version_choices(),
        })
    }

    /// Released versions, special selectors and upcoming-release suggestions.
    pub fn version_choices(&self) -> VersionChoices {
        let majors = self.repository.find_all_composer_supported();
        let mut choices = VersionChoices::default();

        for major in &majors {
            if let Some(release) = major.latest_release() {
                choices.insert(
                    CMS_VERSIONS_GROUP,
                    major.title(),
                    composer_constraint(release.version(), false),
                );
            }
        }

        for special in SPECIAL_VERSIONS {
            choices.insert(SPECIAL_VERSIONS_GROUP, special.name, special.value);
        }

        for major in &majors {
            add_upcoming(&mut choices, major);
        }

        choices
    }

    /// One checkbox per catalog package.
    pub fn package_fields(&self) -> Vec<CheckboxField> {
        PACKAGES
            .iter()
            .map(|package| CheckboxField {
                name: package.field_name(),
                value: package.name.to_string(),
                label: package.name.to_string(),
                help: package.description.to_string(),
                attr: Attributes::from([
                    (
                        "data-composer-helper-package".to_string(),
                        "true".to_string(),
                    ),
                    ("onChange".to_string(), CHANGE_HANDLER.to_string()),
                ]),
                required: false,
            })
            .collect()
    }
}

/// Next-minor (non-LTS lines only) and next-patch development selectors.
fn add_upcoming(choices: &mut VersionChoices, major: &MajorVersion) {
    let next_patch = match major.latest_release().and_then(|r| r.parsed()) {
        Some(parsed) => {
            if !major.is_lts() {
                let next_minor = parsed.next_minor();
                choices.insert(
                    SPECIAL_VERSIONS_GROUP,
                    format!("{} - next minor release ({next_minor})", major.title()),
                    composer_constraint(&next_minor, true),
                );
            }
            parsed.next_patch()
        }
        None => {
            // Uses the whole version string of the line: "6.2" becomes "6.2.0.0".
            warn!(
                major = major.version(),
                "latest release missing or not major.minor.patch, suggesting first patch"
            );
            format!("{}.0.0", major.version())
        }
    };

    choices.insert(
        SPECIAL_VERSIONS_GROUP,
        format!("{} - next patch release ({next_patch})", major.title()),
        composer_constraint(&next_patch, true),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormDefinition;
    use crate::release::InMemoryMajorVersions;
    use pretty_assertions::assert_eq;

    fn repository() -> InMemoryMajorVersions {
        InMemoryMajorVersions::new(vec![
            MajorVersion::new("13").with_release("13.1.0"),
            MajorVersion::new("12")
                .with_lts("12.4")
                .with_release("12.4.2")
                .with_release("12.4.3"),
            MajorVersion::new("11").with_lts("11.5").with_release("11.5.30"),
            MajorVersion::new("14"),
        ])
    }

    fn labels(choices: &VersionChoices, group: &str) -> Vec<String> {
        choices
            .group(group)
            .map(|g| g.choices.iter().map(|c| c.label.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn default_is_latest_lts_release() {
        let repository = repository();
        let field = FormAssembler::new(&repository).version_field().unwrap();
        assert_eq!(field.data, "^12.4");
        assert!(field.required);
        assert_eq!(field.name, VERSION_FIELD);
        assert_eq!(field.label_attr["class"], "version-label");
        assert_eq!(field.attr["onChange"], "checkboxChangeEvent()");
    }

    #[test]
    fn cms_group_lists_majors_with_releases() {
        let repository = repository();
        let choices = FormAssembler::new(&repository).version_choices();
        assert_eq!(
            labels(&choices, CMS_VERSIONS_GROUP),
            vec!["TYPO3 13", "TYPO3 12", "TYPO3 11"]
        );
        let cms = choices.group(CMS_VERSIONS_GROUP).unwrap();
        assert_eq!(cms.get("TYPO3 13"), Some("^13.1"));
        assert_eq!(cms.get("TYPO3 11"), Some("^11.5"));
        assert_eq!(choices.groups()[0].label, CMS_VERSIONS_GROUP);
    }

    #[test]
    fn special_group_contents() {
        let repository = repository();
        let choices = FormAssembler::new(&repository).version_choices();
        assert_eq!(
            labels(&choices, SPECIAL_VERSIONS_GROUP),
            vec![
                "No version specified (installs latest version)",
                "Any version `*` (installs latest compatible version, not recommended, use with caution)",
                "TYPO3 14 - next patch release (14.0.0)",
                "TYPO3 13 - next minor release (13.2)",
                "TYPO3 13 - next patch release (13.1.1)",
                "TYPO3 12 - next patch release (12.4.4)",
                "TYPO3 11 - next patch release (11.5.31)",
            ]
        );
        let special = choices.group(SPECIAL_VERSIONS_GROUP).unwrap();
        assert_eq!(special.get("TYPO3 13 - next minor release (13.2)"), Some("^13.2@dev"));
        assert_eq!(
            special.get("TYPO3 12 - next patch release (12.4.4)"),
            Some("^12.4.4@dev")
        );
        assert_eq!(
            special.get("TYPO3 14 - next patch release (14.0.0)"),
            Some("^14.0.0@dev")
        );
    }

    #[test]
    fn unparseable_release_uses_whole_version_string() {
        let repository = InMemoryMajorVersions::new(vec![
            MajorVersion::new("12").with_lts("12.4").with_release("12.4.3"),
            MajorVersion::new("6.2").with_lts("6.2").with_release("6.2"),
        ]);
        let choices = FormAssembler::new(&repository).version_choices();
        let special = choices.group(SPECIAL_VERSIONS_GROUP).unwrap();
        assert_eq!(
            special.get("TYPO3 6.2 - next patch release (6.2.0.0)"),
            Some("^6.2.0.0@dev")
        );
    }

    #[test]
    fn fails_without_lts() {
        let repository =
            InMemoryMajorVersions::new(vec![MajorVersion::new("13").with_release("13.1.0")]);
        let err = FormAssembler::new(&repository)
            .build(FormDefinition::default())
            .unwrap_err();
        assert_eq!(err.code(), crate::ErrorCode::E0201);
    }

    #[test]
    fn fails_when_lts_has_no_release() {
        let repository = InMemoryMajorVersions::new(vec![MajorVersion::new("12").with_lts("12.4")]);
        let err = FormAssembler::new(&repository).version_field().unwrap_err();
        assert_eq!(err.code(), crate::ErrorCode::E0202);
    }

    #[test]
    fn builds_one_checkbox_per_package() {
        let repository = repository();
        let form = FormAssembler::new(&repository)
            .build(FormDefinition::default())
            .unwrap();
        assert_eq!(form.fields().len(), PACKAGES.len() + 1);
        assert_eq!(form.fields()[0].name(), VERSION_FIELD);

        let core = form
            .checkboxes()
            .find(|c| c.name == "typo3-cms-core")
            .unwrap();
        assert_eq!(core.value, "typo3/cms-core");
        assert_eq!(core.label, "typo3/cms-core");
        assert_eq!(core.help, "The core library of TYPO3.");
        assert_eq!(core.attr["data-composer-helper-package"], "true");
        assert!(!core.required);
    }
}
