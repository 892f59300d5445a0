//! Turns a cleaned submission into Composer requirements.

use crate::assembler::VERSION_FIELD;
use crate::catalog::PACKAGES;
use crate::json;
use crate::submission::{FieldValue, Submission};
use crate::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// A package paired with the constraint it is required with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requirement {
    /// Composer package name.
    pub name: &'static str,
    /// Version constraint.
    pub constraint: String,
}

#[derive(Serialize)]
struct RequireSection<'a> {
    require: BTreeMap<&'static str, &'a str>,
}

/// Checked packages of a submission, all sharing the submitted constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementSet {
    requirements: Vec<Requirement>,
}

impl RequirementSet {
    /// Collect checked catalog packages in catalog order.
    ///
    /// An empty or missing version selects `*`.
    #[must_use]
    pub fn from_submission(submission: &Submission) -> Self {
        let constraint = submission
            .get(VERSION_FIELD)
            .and_then(FieldValue::as_text)
            .filter(|v| !v.is_empty())
            .unwrap_or("*");

        let requirements = PACKAGES
            .iter()
            .filter(|package| {
                submission
                    .get(package.name)
                    .or_else(|| submission.get(&package.field_name()))
                    .is_some_and(FieldValue::is_checked)
            })
            .map(|package| Requirement {
                name: package.name,
                constraint: constraint.to_string(),
            })
            .collect();

        Self { requirements }
    }

    /// Requirements in catalog order.
    #[must_use]
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Number of required packages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Whether no package was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// `{"require": {...}}` fragment for a `composer.json`, packages sorted.
    pub fn to_composer_json(&self) -> Result<String> {
        let section = RequireSection {
            require: self
                .requirements
                .iter()
                .map(|r| (r.name, r.constraint.as_str()))
                .collect(),
        };
        json::to_json_pretty(&section)
    }

    /// `composer require` invocation, or an empty string without packages.
    #[must_use]
    pub fn to_command_line(&self) -> String {
        if self.requirements.is_empty() {
            return String::new();
        }
        let mut line = String::from("composer require");
        for requirement in &self.requirements {
            line.push_str(&format!(" \"{}:{}\"", requirement.name, requirement.constraint));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn collects_checked_packages_in_catalog_order() {
        let submission = Submission::new()
            .with("typo3_version", "^12.4")
            .with("typo3-cms-seo", "1")
            .with("typo3/cms-core", "typo3/cms-core")
            .with("typo3-cms-form", "0")
            .with("unrelated", "1");

        let set = RequirementSet::from_submission(&submission);

        let names: Vec<_> = set.requirements().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["typo3/cms-core", "typo3/cms-seo"]);
        assert!(set.requirements().iter().all(|r| r.constraint == "^12.4"));
    }

    #[test]
    fn empty_version_means_any() {
        let submission = Submission::new()
            .with("typo3_version", "")
            .with("typo3-minimal", true);
        let set = RequirementSet::from_submission(&submission);
        assert_eq!(set.to_command_line(), r#"composer require "typo3/minimal:*""#);
    }

    #[test]
    fn command_line() {
        let submission = Submission::new()
            .with("typo3_version", "^13.2@dev")
            .with("typo3-cms-core", "1")
            .with("typo3-cms-backend", "1");
        assert_eq!(
            RequirementSet::from_submission(&submission).to_command_line(),
            r#"composer require "typo3/cms-backend:^13.2@dev" "typo3/cms-core:^13.2@dev""#
        );
    }

    #[test]
    fn nothing_selected() {
        let set = RequirementSet::from_submission(&Submission::new().with("typo3_version", "^12.4"));
        assert!(set.is_empty());
        assert_eq!(set.to_command_line(), "");
        let json = set.to_composer_json().unwrap();
        assert!(json.contains("\"require\""));
    }

    #[test]
    fn composer_json_fragment() {
        let submission = Submission::new()
            .with("typo3_version", "^12.4")
            .with("typo3-cms-core", "1");
        let json = RequirementSet::from_submission(&submission)
            .to_composer_json()
            .unwrap();
        assert!(json.contains(r#""typo3/cms-core": "^12.4""#), "{json}");
    }
}
