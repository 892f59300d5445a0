#![no_main]

use libfuzzer_sys::fuzz_target;
use t3composer_core::{ReleaseVersion, VersionConstraint};
use t3composer_core::version::{caret_major, leading_major};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let stable = VersionConstraint::for_version(s, false);
        let dev = VersionConstraint::for_version(s, true);

        // Stable constraints are empty or a caret over major.minor
        if !stable.is_empty() {
            assert!(stable.as_str().starts_with('^'));
            assert!(s.starts_with(&stable.as_str()[1..]));
        }
        assert_eq!(dev.as_str(), format!("^{s}@dev"));

        if let Some(parsed) = ReleaseVersion::parse(s) {
            let _ = parsed.next_minor();
            let _ = parsed.next_patch();
            assert!(!stable.is_empty());
        }

        let _ = caret_major(s);
        let _ = leading_major(s);
        let _ = stable.to_string();
    }
});
