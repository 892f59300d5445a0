//! Core types for the TYPO3 Composer helper.
//!
//! This crate provides:
//! - The static package catalog, bundles and special version selectors
//! - Composer constraint building from release versions
//! - Major version / release data behind a repository trait
//! - Form assembly through a builder seam
//! - Submission filtering and requirement rendering
//! - Error types

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod assembler;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod form;
mod json;
pub mod release;
pub mod requirements;
mod service;
pub mod submission;
pub mod version;

pub use assembler::{FormAssembler, VERSION_FIELD};
pub use catalog::{Bundle, Package, SpecialVersion, field_name};
pub use error::{Error, ErrorCode, Result};
pub use filter::PackageFilter;
pub use form::{
    Attributes, CheckboxField, ChoiceField, ChoiceGroup, FormBuilder, FormDefinition, FormField,
    VersionChoice, VersionChoices,
};
pub use json::{from_json, to_json, to_json_pretty};
pub use release::{InMemoryMajorVersions, MajorVersion, MajorVersionRepository, Release};
pub use requirements::{Requirement, RequirementSet};
pub use service::ComposerPackagesService;
pub use submission::{FieldValue, Submission};
pub use version::{ReleaseVersion, VersionConstraint, composer_constraint};
