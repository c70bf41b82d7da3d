crate::define_id_enum! {
    /// Package manager governing a project
    PackageManagerId {
        Pnpm => "pnpm" : "pnpm",
        Yarn => "yarn" : "Yarn",
        Npm => "npm" : "npm",
    }
}

impl PackageManagerId {
    /// Lockfile whose presence identifies this package manager
    pub fn lockfile(&self) -> &'static str {
        match self {
            PackageManagerId::Pnpm => "pnpm-lock.yaml",
            PackageManagerId::Yarn => "yarn.lock",
            PackageManagerId::Npm => "package-lock.json",
        }
    }

    /// Dependency install command for the generated Dockerfile
    pub fn install_command(&self) -> &'static str {
        match self {
            PackageManagerId::Npm => "npm install",
            PackageManagerId::Yarn => "yarn install --frozen-lockfile",
            PackageManagerId::Pnpm => "pnpm install --frozen-lockfile",
        }
    }
}

impl Default for PackageManagerId {
    fn default() -> Self {
        PackageManagerId::Npm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_manager_serialization() {
        assert_eq!(
            serde_json::to_string(&PackageManagerId::Pnpm).unwrap(),
            "\"pnpm\""
        );
        let id: PackageManagerId = serde_json::from_str("\"yarn\"").unwrap();
        assert_eq!(id, PackageManagerId::Yarn);
    }

    #[test]
    fn test_install_commands() {
        assert_eq!(PackageManagerId::Npm.install_command(), "npm install");
        assert_eq!(
            PackageManagerId::Yarn.install_command(),
            "yarn install --frozen-lockfile"
        );
        assert_eq!(
            PackageManagerId::Pnpm.install_command(),
            "pnpm install --frozen-lockfile"
        );
    }

    #[test]
    fn test_lockfiles() {
        assert_eq!(PackageManagerId::Pnpm.lockfile(), "pnpm-lock.yaml");
        assert_eq!(PackageManagerId::Yarn.lockfile(), "yarn.lock");
        assert_eq!(PackageManagerId::Npm.lockfile(), "package-lock.json");
    }

    #[test]
    fn test_default_is_npm() {
        assert_eq!(PackageManagerId::default(), PackageManagerId::Npm);
    }
}
