use std::fmt;

use serde::Serialize;

/// Build metadata embedded by `build.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub hash: &'static str,
    pub status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            hash: env!("RENTBOOK_BUILD_HASH"),
            status: env!("RENTBOOK_BUILD_STATUS"),
            timestamp: env!("RENTBOOK_BUILD_TIMESTAMP"),
            target: env!("RENTBOOK_BUILD_TARGET"),
            profile: env!("RENTBOOK_BUILD_PROFILE"),
            rustc: env!("RENTBOOK_BUILD_RUSTC"),
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rentbook {} ({} {})", self.version, self.hash, self.status)?;
        writeln!(f, "built:   {}", self.timestamp)?;
        writeln!(f, "target:  {} [{}]", self.target, self.profile)?;
        write!(f, "rustc:   {}", self.rustc)
    }
}

#[cfg(test)]
mod tests {
    use super::BuildInfo;

    #[test]
    fn build_info_reports_package_version() {
        let info = BuildInfo::current();
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.to_string().starts_with("rentbook "));
        assert!(matches!(info.status, "clean" | "dirty" | "unknown"));
    }
}
