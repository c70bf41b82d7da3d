//! Project classification: framework, package manager, runtime and commands.
//!
//! Identifiers ([`FrameworkId`], [`PackageManagerId`]) are closed sets. Each
//! classifier is an ordered rule table evaluated until the first match, so
//! precedence is explicit and every rule can be tested on its own.
//!
//! # Example
//!
//! ```
//! use nodepack::stack::{detect_framework, detect_package_manager, FileSet, FrameworkId, PackageManagerId};
//!
//! let files = FileSet::from_paths(["next.config.js", "yarn.lock"]);
//! assert_eq!(detect_framework(&files, None), FrameworkId::Next);
//! assert_eq!(detect_package_manager(&files), PackageManagerId::Yarn);
//! ```

#[macro_use]
pub mod id_enum_macro;

pub mod commands;
pub mod file_set;
pub mod framework;
pub mod framework_id;
pub mod manifest;
pub mod package_manager;
pub mod package_manager_id;
pub mod runtime;

pub use commands::BuildCommands;
pub use file_set::FileSet;
pub use framework::{detect_framework, FrameworkRule, FrameworkSignal, FRAMEWORK_RULES};
pub use framework_id::FrameworkId;
pub use manifest::{Manifest, ManifestLoad, MANIFEST_FILE};
pub use package_manager::{detect_package_manager, LOCKFILE_RULES};
pub use package_manager_id::PackageManagerId;
pub use runtime::{NodeRuntime, VersionSource, DEFAULT_NODE_VERSION, VERSION_PIN_FILES};
