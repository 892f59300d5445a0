#![no_main]

use libfuzzer_sys::fuzz_target;
use t3composer_core::{
    InMemoryMajorVersions, MajorVersion, PackageFilter, RequirementSet, Submission, from_json,
    to_json,
};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let repository = InMemoryMajorVersions::new(vec![
        MajorVersion::new("12").with_lts("12.4").with_release("12.4.8"),
        MajorVersion::new("11").with_lts("11.5").with_release("11.5.33"),
    ]);
    let filter = PackageFilter::new(&repository);

    let mut candidates = Vec::new();
    if let Ok(submission) = from_json::<Submission>(s) {
        // Field order survives a roundtrip
        if let Ok(json) = to_json(&submission) {
            if let Ok(reparsed) = from_json::<Submission>(&json) {
                assert!(submission.names().eq(reparsed.names()));
            }
        }
        candidates.push(submission);
    }
    if let Ok(submission) = Submission::from_pairs(s.lines()) {
        candidates.push(submission);
    }

    for submission in candidates {
        let before = submission.len();
        if let Ok(cleaned) = filter.clean(submission) {
            assert!(cleaned.len() <= before);
            let requirements = RequirementSet::from_submission(&cleaned);
            let _ = requirements.to_command_line();
            let _ = requirements.to_composer_json();
        }
    }
});
