//! Pre-built release data and submissions.
//!
//! The release data mirrors a small slice of the real TYPO3 history: two
//! LTS lines plus a sprint release line without LTS designation.

use serde_json::{Value, json};
use t3composer_core::{InMemoryMajorVersions, MajorVersion, Submission, VERSION_FIELD};

/// Collection of pre-built test fixtures.
#[derive(Debug)]
pub struct Fixtures;

impl Fixtures {
    /// Latest release of the newest LTS line in [`Self::config_json`].
    pub const LATEST_LTS_RELEASE: &'static str = "12.4.8";

    /// Constraint preselected by the form built from [`Self::config_json`].
    pub const DEFAULT_CONSTRAINT: &'static str = "^12.4";

    /// `t3composer.json` with 13 (sprint), 12 LTS, 11 LTS and a legacy line.
    #[must_use]
    pub fn config_json() -> Value {
        json!({
            "major-versions": [
                {
                    "version": "13",
                    "releases": ["13.0.0", "13.1.0"]
                },
                {
                    "version": "12",
                    "lts": "12.4",
                    "releases": ["12.4.0", "12.4.8"]
                },
                {
                    "version": "11",
                    "lts": "11.5",
                    "releases": ["11.5.0", "11.5.33"]
                },
                {
                    "version": "6.2",
                    "composer": false,
                    "releases": ["6.2.31"]
                }
            ],
            "cache": {
                "ttl": 600,
                "capacity": 100
            }
        })
    }

    /// Configuration without any LTS line, so no form can be built.
    #[must_use]
    pub fn config_without_lts_json() -> Value {
        json!({
            "major-versions": [
                {
                    "version": "13",
                    "releases": ["13.0.0"]
                }
            ]
        })
    }

    /// Configuration the validator rejects.
    #[must_use]
    pub fn invalid_config_json() -> Value {
        json!({
            "major-versions": [
                { "version": "12", "lts": "12.4", "releases": ["12.4.0"] },
                { "version": "12", "releases": [] }
            ],
            "cache": { "ttl": 60, "capacity": 0 }
        })
    }

    /// The release data of [`Self::config_json`] as a repository.
    #[must_use]
    pub fn repository() -> InMemoryMajorVersions {
        InMemoryMajorVersions::new(vec![
            MajorVersion::new("13")
                .with_release("13.0.0")
                .with_release("13.1.0"),
            MajorVersion::new("12")
                .with_lts("12.4")
                .with_release("12.4.0")
                .with_release("12.4.8"),
            MajorVersion::new("11")
                .with_lts("11.5")
                .with_release("11.5.0")
                .with_release("11.5.33"),
            MajorVersion::new("6.2")
                .with_composer_support(false)
                .with_release("6.2.31"),
        ])
    }

    /// Submission for TYPO3 11 with one package that only exists up to 10.
    #[must_use]
    pub fn legacy_submission() -> Submission {
        Submission::new()
            .with(VERSION_FIELD, "^11")
            .with("typo3-cms-about", "1")
            .with("typo3-cms-core", "1")
    }

    /// Submission for TYPO3 12 selecting core and backend.
    #[must_use]
    pub fn core_submission() -> Submission {
        Submission::new()
            .with(VERSION_FIELD, Self::DEFAULT_CONSTRAINT)
            .with("typo3-cms-core", "1")
            .with("typo3-cms-backend", "1")
    }

    /// [`Self::legacy_submission`] as a JSON object.
    #[must_use]
    pub fn legacy_submission_json() -> Value {
        json!({
            "typo3_version": "^11",
            "typo3-cms-about": "1",
            "typo3-cms-core": "1"
        })
    }
}
