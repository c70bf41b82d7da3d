//! Package manager classification by lockfile

use super::{FileSet, PackageManagerId};

/// Checked in order; a tree with several lockfiles resolves to the first hit.
pub static LOCKFILE_RULES: &[PackageManagerId] = &[
    PackageManagerId::Pnpm,
    PackageManagerId::Yarn,
    PackageManagerId::Npm,
];

pub fn detect_package_manager(files: &FileSet) -> PackageManagerId {
    LOCKFILE_RULES
        .iter()
        .copied()
        .find(|pm| files.contains(pm.lockfile()))
        .unwrap_or_default()
}
