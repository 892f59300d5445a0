//! Testing utilities for the TYPO3 Composer helper.
//!
//! # Modules
//!
//! - [`fixtures`]: Release data, configuration files and submissions
//! - [`proptest_strategies`]: Proptest strategies for versions and submissions
//! - [`temp_project`]: Temporary working directories holding a `t3composer.json`
//!
//! # Example
//!
//! ```rust
//! use t3composer_test_utils::fixtures::Fixtures;
//! use t3composer_test_utils::temp_project::TempProject;
//!
//! let project = TempProject::new()
//!     .with_config(Fixtures::config_json())
//!     .build()
//!     .unwrap();
//! assert!(project.config_path().is_file());
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod fixtures;
pub mod proptest_strategies;
pub mod temp_project;

/// Re-export commonly used testing utilities.
pub mod prelude {
    pub use crate::fixtures::Fixtures;
    pub use crate::proptest_strategies::*;
    pub use crate::temp_project::TempProject;

    pub use pretty_assertions::{assert_eq, assert_ne};
    pub use proptest::prelude::*;
}
