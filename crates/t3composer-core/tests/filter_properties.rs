//! Property tests for submission filtering.

use proptest::prelude::*;
use t3composer_core::catalog::find_package;
use t3composer_core::version::caret_major;
use t3composer_core::{PackageFilter, Submission, VERSION_FIELD, composer_constraint};
use t3composer_test_utils::fixtures::Fixtures;
use t3composer_test_utils::proptest_strategies::{
    caret_constraint_strategy, release_version_strategy, submission_strategy,
};

/// Insert a free-form field after every submitted one.
fn with_extra_fields(submission: &Submission) -> Submission {
    let mut mixed = Submission::new();
    for (index, (name, value)) in submission.iter().enumerate() {
        mixed.insert(name, value.clone());
        mixed.insert(format!("note-{index}"), "kept");
    }
    mixed
}

fn other_fields(submission: &Submission) -> Vec<String> {
    submission
        .names()
        .filter(|name| find_package(name).is_none())
        .map(str::to_string)
        .collect()
}

proptest! {
    /// Every package left after cleaning exists for the resolved major.
    #[test]
    fn kept_packages_support_resolved_major(submission in submission_strategy()) {
        let repository = Fixtures::repository();
        let filter = PackageFilter::new(&repository);
        let major = filter.resolve_major(&submission).unwrap();

        let cleaned = filter.clean(submission).unwrap();
        for name in cleaned.names() {
            if let Some(package) = find_package(name) {
                prop_assert!(
                    package.supports(major),
                    "{} kept for major {}", package.name, major
                );
            }
        }
    }

    /// Fields that are not packages survive cleaning in their order.
    #[test]
    fn other_fields_keep_their_order(submission in submission_strategy()) {
        let repository = Fixtures::repository();
        let mixed = with_extra_fields(&submission);
        let before = other_fields(&mixed);

        let cleaned = PackageFilter::new(&repository).clean(mixed).unwrap();

        prop_assert_eq!(other_fields(&cleaned), before);
        prop_assert!(cleaned.contains(VERSION_FIELD));
    }

    /// A caret constraint names the major directly.
    #[test]
    fn caret_constraint_names_major(constraint in caret_constraint_strategy()) {
        let repository = Fixtures::repository();
        let submission = Submission::new().with(VERSION_FIELD, constraint.as_str());

        let major = PackageFilter::new(&repository).resolve_major(&submission).unwrap();

        prop_assert_eq!(Some(major), caret_major(&constraint));
        let digits: String = constraint[1..].chars().take_while(char::is_ascii_digit).collect();
        prop_assert_eq!(major.to_string(), digits);
    }

    /// Stable constraints allow updates within `major.minor`.
    #[test]
    fn release_constraint_keeps_major_minor(version in release_version_strategy()) {
        let mut parts = version.split('.');
        let expected = format!("^{}.{}", parts.next().unwrap(), parts.next().unwrap());

        prop_assert_eq!(composer_constraint(&version, false), expected);
        prop_assert_eq!(composer_constraint(&version, true), format!("^{version}@dev"));
    }
}
