//! Facade bundling catalog queries, form assembly and submission cleanup.

use crate::assembler::FormAssembler;
use crate::catalog;
use crate::filter::PackageFilter;
use crate::form::FormBuilder;
use crate::release::MajorVersionRepository;
use crate::requirements::RequirementSet;
use crate::submission::Submission;
use crate::Result;

/// Entry point used by the hosting application.
#[derive(Debug, Clone)]
pub struct ComposerPackagesService<R> {
    majors: R,
}

impl<R: MajorVersionRepository> ComposerPackagesService<R> {
    /// Create a service over a major version repository.
    #[must_use]
    pub fn new(majors: R) -> Self {
        Self { majors }
    }

    /// The underlying repository.
    #[must_use]
    pub fn repository(&self) -> &R {
        &self.majors
    }

    /// Build the helper form with the host's builder.
    pub fn build_form<B: FormBuilder>(&self, builder: B) -> Result<B::Form> {
        FormAssembler::new(&self.majors).build(builder)
    }

    /// Bundle name mapped to its JSON encoded field identifiers.
    pub fn bundles(&self) -> Result<Vec<(&'static str, String)>> {
        catalog::bundles()
    }

    /// Remove packages the submitted version cannot install.
    pub fn clean_packages_for_versions(&self, submission: Submission) -> Result<Submission> {
        PackageFilter::new(&self.majors).clean(submission)
    }

    /// Clean a submission and collect its requirements.
    pub fn requirements(&self, submission: Submission) -> Result<RequirementSet> {
        let cleaned = self.clean_packages_for_versions(submission)?;
        Ok(RequirementSet::from_submission(&cleaned))
    }

    /// Every package name in catalog order.
    #[must_use]
    pub fn core_packages(&self) -> Vec<&'static str> {
        catalog::core_packages()
    }
}
