//! Static catalog of TYPO3 system packages and curated bundles.
//!
//! The tables are fixed at build time. Package names are unique and every
//! bundle only references names present in [`PACKAGES`]; both properties are
//! covered by the tests at the bottom of this module.

use crate::{Error, Result, json};
use serde::Serialize;

/// Choice group holding one entry per Composer-supported major version.
pub const CMS_VERSIONS_GROUP: &str = "TYPO3 CMS Versions";

/// Choice group holding the special and upcoming version selectors.
pub const SPECIAL_VERSIONS_GROUP: &str = "Special Version Selectors";

/// A Composer package the helper can add to a requirement set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Package {
    /// Composer name in `vendor/name` form.
    pub name: &'static str,
    /// Human readable description, shown as help text.
    pub description: &'static str,
    /// Major versions the package is available for, newest first.
    pub versions: &'static [u32],
}

impl Package {
    const fn new(name: &'static str, description: &'static str, versions: &'static [u32]) -> Self {
        Self {
            name,
            description,
            versions,
        }
    }

    /// Whether the package exists for the given major version.
    #[must_use]
    pub fn supports(&self, major: u32) -> bool {
        self.versions.contains(&major)
    }

    /// Form field identifier for this package.
    #[must_use]
    pub fn field_name(&self) -> String {
        field_name(self.name)
    }
}

/// A named, curated subset of packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bundle {
    /// Bundle name.
    pub name: &'static str,
    /// Package names in display order.
    pub packages: &'static [&'static str],
}

impl Bundle {
    /// Package names converted to form field identifiers.
    #[must_use]
    pub fn field_names(&self) -> Vec<String> {
        self.packages.iter().map(|name| field_name(name)).collect()
    }

    /// JSON list of field identifiers, used as front-end bundle selector.
    pub fn to_json(&self) -> Result<String> {
        json::to_json(&self.field_names())
    }
}

/// A version selector that is not tied to a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpecialVersion {
    /// Label shown to the user.
    pub name: &'static str,
    /// Constraint value submitted.
    pub value: &'static str,
}

/// Version selectors offered regardless of release data.
pub static SPECIAL_VERSIONS: &[SpecialVersion] = &[
    SpecialVersion {
        name: "No version specified (installs latest version)",
        value: "",
    },
    SpecialVersion {
        name: "Any version `*` (installs latest compatible version, not recommended, use with caution)",
        value: "*",
    },
];

/// All packages known to the helper.
pub static PACKAGES: &[Package] = &[
    Package::new(
        "typo3/cms-about",
        "Shows info about TYPO3, installed extensions and a separate module for available modules.",
        &[10, 9, 8],
    ),
    Package::new(
        "typo3/cms-adminpanel",
        "The TYPO3 admin panel provides a panel with additional functionality in the frontend (Debugging, Caching, Preview...)",
        &[12, 11, 10, 9],
    ),
    Package::new(
        "typo3/cms-backend",
        "Classes for the TYPO3 backend.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-belog",
        "Displays backend log, both per page and system wide. Available as the module Tools>Log (system wide overview) and Web>Info/Log (page relative overview).",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-beuser",
        "Backend user administration and overview. Allows you to compare the settings of users and verify their permissions and see who is online.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-context-help",
        "Provides context sensitive help to tables, fields and modules in the system languages.",
        &[8],
    ),
    Package::new(
        "typo3/cms-core",
        "The core library of TYPO3.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-cshmanual",
        "Shows TYPO3 inline user manual.",
        &[8],
    ),
    Package::new(
        "typo3/cms-css-styled-content",
        "Contains configuration for CSS content-rendering of the table \"tt_content\". This is meant as a modern substitute for the classic \"content (default)\" template which was based more on <font>-tags, while this is pure CSS.",
        &[8],
    ),
    Package::new(
        "typo3/cms-dashboard",
        "Dashboard for TYPO3.",
        &[12, 11, 10],
    ),
    Package::new(
        "typo3/cms-documentation",
        "Backend module for TYPO3 to list and show documentation of loaded extensions as well as custom documents.",
        &[8],
    ),
    Package::new(
        "typo3/cms-extbase",
        "A framework to build extensions for TYPO3 CMS.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-extensionmanager",
        "TYPO3 Extension Manager.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-feedit",
        "Frontend editing for TYPO3.",
        &[9, 8],
    ),
    Package::new(
        "typo3/cms-felogin",
        "A template-based plugin to log in Website Users in the Frontend.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-filelist",
        "Listing of files in the directory.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-filemetadata",
        "Add advanced metadata to File.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-fluid",
        "Fluid is a next-generation templating engine which makes the life of extension authors a lot easier!",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-fluid-styled-content",
        "A set of common content elements based on Fluid for Frontend output.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-form",
        "Form Library, Plugin and Editor.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-frontend",
        "Classes for the frontend of TYPO3.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-func",
        "Advanced functions.",
        &[8],
    ),
    Package::new(
        "typo3/cms-impexp",
        "Import and Export of records from TYPO3 in a custom serialized format (.T3D) for data exchange with other TYPO3 systems.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-indexed-search",
        "Indexed Search Engine for TYPO3 pages, PDF-files, Word-files, HTML and text files. Provides a backend module for statistics of the indexer and a frontend plugin. Documentation can be found in the extension \"doc_indexed_search\".",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-info",
        "Shows various infos.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-info-pagetsconfig",
        "Displays the compiled Page TSconfig values relative to a page.",
        &[8],
    ),
    Package::new(
        "typo3/cms-install",
        "The Install Tool mounted as the module Tools>Install in TYPO3.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-lang",
        "Contains all the core language labels in a set of files mostly of the \"locallang\" format. This extension is always required in a TYPO3 install.",
        &[8],
    ),
    Package::new(
        "typo3/cms-linkvalidator",
        "Link Validator checks the links in your website for validity. It can validate all kinds of links: internal, external and file links. Scheduler is supported to run Link Validator via Cron including the option to send status mails, if broken links were detected.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-lowlevel",
        "Enables the 'Config' and 'DB Check' modules for technical analysis of the system. This includes raw database search, checking relations, counting pages and records etc.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-opendocs",
        "Shows opened documents by the user.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-reactions",
        "Handle incoming Webhooks for TYPO3.",
        &[12],
    ),
    Package::new(
        "typo3/cms-recordlist",
        "List of database-records.",
        &[11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-recycler",
        "The recycler offers the possibility to restore deleted records or remove them from the database permanently. These actions can be applied to a single record, multiple records, and recursively to child records (ex. restoring a page can restore all content elements on that page). Filtering by page and by table provides a quick overview of deleted records before taking action on them.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-redirects",
        "Custom redirects in TYPO3.",
        &[12, 11, 10, 9],
    ),
    Package::new(
        "typo3/cms-reports",
        "The reports module groups several system reports.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-rsaauth",
        "Contains a service to authenticate TYPO3 BE and FE users using private/public key encryption of passwords.",
        &[9, 8],
    ),
    Package::new(
        "typo3/cms-rte-ckeditor",
        "Integration of CKEditor as Rich Text Editor.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-saltedpasswords",
        "Uses a password hashing framework for storing passwords. Integrates into the system extension \"felogin\". Use SSL or rsaauth to secure datatransfer! Please read the manual first!",
        &[8],
    ),
    Package::new(
        "typo3/cms-scheduler",
        "The TYPO3 Scheduler let's you register tasks to happen at a specific time.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-seo",
        "SEO features for TYPO3.",
        &[12, 11, 10, 9],
    ),
    Package::new(
        "typo3/cms-setup",
        "Allows users to edit a limited set of options for their user profile, eg. preferred language and their name and email address.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-sv",
        "The core/default services. This includes the default authentication services for now.",
        &[8],
    ),
    Package::new(
        "typo3/cms-sys-action",
        "Actions are 'programmed' admin tasks which can be performed by selected regular users from the Task Center. An action could be creation of backend users, fixed SQL SELECT queries, listing of records, direct edit access to selected records etc.",
        &[9, 8],
    ),
    Package::new(
        "typo3/cms-sys-note",
        "Records with messages which can be placed on any page and contain instructions or other information related to a page or section.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-t3editor",
        "JavaScript-driven editor with syntax highlighting and codecompletion. Based on CodeMirror.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-taskcenter",
        "The Task Center is the framework for a host of other extensions.",
        &[9, 8],
    ),
    Package::new(
        "typo3/cms-tstemplate",
        "Framework for management of TypoScript template records for the CMS frontend.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-version",
        "Backend Interface for management of the versioning API.",
        &[8],
    ),
    Package::new(
        "typo3/cms-viewpage",
        "Shows the frontend webpage inside the backend frameset.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/cms-wizard-crpages",
        "A little utility to create many empty pages in one batch. Great for making a quick page structure.",
        &[8],
    ),
    Package::new(
        "typo3/cms-wizard-sortpages",
        "A little utility to rearrange the sorting order of pages in the backend.",
        &[8],
    ),
    Package::new(
        "typo3/cms-workspaces",
        "Adds workspaces functionality with custom stages to TYPO3.",
        &[12, 11, 10, 9, 8],
    ),
    Package::new(
        "typo3/minimal",
        "Provides Composer requirements to the minimal set of system extensions that is required to run TYPO3.",
        &[12, 11, 10, 9, 8],
    ),
];

/// Curated bundles.
pub static BUNDLES: &[Bundle] = &[
    Bundle {
        name: "typo3/full",
        packages: &[
        "typo3/cms-about",
        "typo3/cms-adminpanel",
        "typo3/cms-backend",
        "typo3/cms-belog",
        "typo3/cms-beuser",
        "typo3/cms-context-help",
        "typo3/cms-core",
        "typo3/cms-cshmanual",
        "typo3/cms-css-styled-content",
        "typo3/cms-documentation",
        "typo3/cms-dashboard",
        "typo3/cms-extbase",
        "typo3/cms-extensionmanager",
        "typo3/cms-feedit",
        "typo3/cms-felogin",
        "typo3/cms-filelist",
        "typo3/cms-filemetadata",
        "typo3/cms-fluid",
        "typo3/cms-fluid-styled-content",
        "typo3/cms-form",
        "typo3/cms-frontend",
        "typo3/cms-func",
        "typo3/cms-impexp",
        "typo3/cms-indexed-search",
        "typo3/cms-info",
        "typo3/cms-info-pagetsconfig",
        "typo3/cms-install",
        "typo3/cms-lang",
        "typo3/cms-linkvalidator",
        "typo3/cms-lowlevel",
        "typo3/cms-opendocs",
        "typo3/cms-reactions",
        "typo3/cms-recordlist",
        "typo3/cms-recycler",
        "typo3/cms-redirects",
        "typo3/cms-reports",
        "typo3/cms-rsaauth",
        "typo3/cms-rte-ckeditor",
        "typo3/cms-saltedpasswords",
        "typo3/cms-scheduler",
        "typo3/cms-seo",
        "typo3/cms-setup",
        "typo3/cms-sv",
        "typo3/cms-sys-action",
        "typo3/cms-sys-note",
        "typo3/cms-t3editor",
        "typo3/cms-taskcenter",
        "typo3/cms-tstemplate",
        "typo3/cms-version",
        "typo3/cms-viewpage",
        "typo3/cms-wizard-crpages",
        "typo3/cms-wizard-sortpages",
        "typo3/cms-workspaces",
        "typo3/minimal",
        ],
    },
    Bundle {
        name: "typo3/minimal",
        packages: &[
        "typo3/cms-backend",
        "typo3/cms-core",
        "typo3/cms-extbase",
        "typo3/cms-extensionmanager",
        "typo3/cms-filelist",
        "typo3/cms-fluid",
        "typo3/cms-frontend",
        "typo3/cms-install",
        "typo3/cms-recordlist",
        "typo3/minimal",
        ],
    },
    Bundle {
        name: "typo3/default",
        packages: &[
        "typo3/cms-about",
        "typo3/cms-adminpanel",
        "typo3/cms-backend",
        "typo3/cms-belog",
        "typo3/cms-beuser",
        "typo3/cms-core",
        "typo3/cms-dashboard",
        "typo3/cms-extbase",
        "typo3/cms-extensionmanager",
        "typo3/cms-filelist",
        "typo3/cms-fluid",
        "typo3/cms-fluid-styled-content",
        "typo3/cms-form",
        "typo3/cms-frontend",
        "typo3/cms-impexp",
        "typo3/cms-info",
        "typo3/cms-install",
        "typo3/cms-lowlevel",
        "typo3/cms-opendocs",
        "typo3/cms-recordlist",
        "typo3/cms-recycler",
        "typo3/cms-redirects",
        "typo3/cms-reports",
        "typo3/cms-rte-ckeditor",
        "typo3/cms-scheduler",
        "typo3/cms-seo",
        "typo3/cms-setup",
        "typo3/cms-tstemplate",
        "typo3/cms-viewpage",
        "typo3/minimal",
        ],
    },
];

/// Convert a package name into a form field identifier.
#[must_use]
pub fn field_name(name: &str) -> String {
    name.replace('/', "-")
}

/// Look up a package by Composer name or by field identifier.
#[must_use]
pub fn find_package(name: &str) -> Option<&'static Package> {
    PACKAGES
        .iter()
        .find(|p| p.name == name || p.field_name() == name)
}

/// Look up a package, failing with [`Error::UnknownPackage`] on a miss.
pub fn package(name: &str) -> Result<&'static Package> {
    find_package(name).ok_or_else(|| Error::unknown_package(name))
}

/// Look up a bundle by name.
pub fn find_bundle(name: &str) -> Result<&'static Bundle> {
    BUNDLES
        .iter()
        .find(|b| b.name == name)
        .ok_or_else(|| Error::unknown_bundle(name))
}

/// Every package name, in catalog order.
#[must_use]
pub fn core_packages() -> Vec<&'static str> {
    PACKAGES.iter().map(|p| p.name).collect()
}

/// Packages available for a major version.
pub fn packages_for_major(major: u32) -> impl Iterator<Item = &'static Package> {
    PACKAGES.iter().filter(move |p| p.supports(major))
}

/// Bundle name mapped to the JSON encoded list of its field identifiers.
pub fn bundles() -> Result<Vec<(&'static str, String)>> {
    BUNDLES
        .iter()
        .map(|bundle| Ok((bundle.name, bundle.to_json()?)))
        .collect()
}
