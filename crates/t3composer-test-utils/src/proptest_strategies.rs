//! Proptest strategies for helper types.

use proptest::prelude::*;
use t3composer_core::catalog::PACKAGES;
use t3composer_core::{Submission, VERSION_FIELD};

/// Strategy for `major.minor.patch` release versions.
pub fn release_version_strategy() -> impl Strategy<Value = String> {
    (0u32..20, 0u32..10, 0u32..100)
        .prop_map(|(major, minor, patch)| format!("{major}.{minor}.{patch}"))
}

/// Strategy for caret constraints as found in the version selector.
pub fn caret_constraint_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (6u32..14).prop_map(|major| format!("^{major}")),
        (6u32..14, 0u32..10).prop_map(|(major, minor)| format!("^{major}.{minor}")),
        (6u32..14, 0u32..10).prop_map(|(major, minor)| format!("^{major}.{minor}@dev")),
    ]
}

/// Strategy for any value a user could submit as `typo3_version`.
pub fn submitted_version_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => caret_constraint_strategy(),
        1 => Just(String::new()),
        1 => Just("*".to_string()),
        1 => "[a-z0-9.~^@-]{0,12}",
    ]
}

/// Strategy for a catalog package name.
pub fn package_name_strategy() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(PACKAGES.iter().map(|p| p.name).collect::<Vec<_>>())
}

/// Strategy for submissions: a version plus checked catalog packages.
///
/// Packages are submitted by field identifier or Composer name at random.
pub fn submission_strategy() -> impl Strategy<Value = Submission> {
    (
        submitted_version_strategy(),
        proptest::collection::vec((package_name_strategy(), any::<bool>()), 0..12),
    )
        .prop_map(|(version, packages)| {
            let mut submission = Submission::new().with(VERSION_FIELD, version);
            for (name, by_field) in packages {
                if by_field {
                    submission.insert(name.replace('/', "-"), "1");
                } else {
                    submission.insert(name, "1");
                }
            }
            submission
        })
}
