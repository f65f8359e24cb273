use crate::config::GuardConfig;
use crate::error::{Result, VersionGuardError};
use crate::version::Version;

/// Outcome of a version check that did not abort startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionStatus {
    Supported,
    /// Unparseable or older than the minimum; a warning has been logged
    Unsupported,
}

/// Check the storage engine's reported version against `config`
///
/// Versions that cannot be parsed or are below the minimum only log a
/// warning. A version inside one of the known-buggy ranges is an error.
pub fn check_database_version(version: &str, config: &GuardConfig) -> Result<VersionStatus> {
    let parsed = match Version::parse(version) {
        Ok(parsed) if parsed >= config.minimum_version => parsed,
        _ => {
            tracing::warn!(
                engine = %config.engine,
                version,
                minimum = %config.minimum_version,
                "Storage engine version is below the minimum supported version. \
                 Running against an older version is not supported."
            );
            return Ok(VersionStatus::Unsupported);
        }
    };

    if let Some(range) = config.buggy_ranges.iter().find(|r| r.contains(&parsed)) {
        return Err(VersionGuardError::KnownBuggyVersion {
            engine: config.engine.clone(),
            version: version.to_string(),
            range: range.clone(),
            reason: range.reason.clone(),
        });
    }

    tracing::debug!(engine = %config.engine, version, "Storage engine version accepted");
    Ok(VersionStatus::Supported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_versions() {
        let config = GuardConfig::default();
        for version in ["9.2", "9.4.26", "9.5.2", "9.6", "13.4"] {
            assert_eq!(
                check_database_version(version, &config).unwrap(),
                VersionStatus::Supported,
                "{version}"
            );
        }
    }

    #[test]
    fn test_old_or_unparseable_versions_only_warn() {
        let config = GuardConfig::default();
        for version in ["9.1", "8.4.22", "9.6beta1", "", "PostgreSQL 9.6"] {
            assert_eq!(
                check_database_version(version, &config).unwrap(),
                VersionStatus::Unsupported,
                "{version}"
            );
        }
    }

    #[test]
    fn test_buggy_versions_are_errors() {
        let config = GuardConfig::default();
        for version in ["9.5", "9.5.0", "9.5.1"] {
            let err = check_database_version(version, &config).unwrap_err();
            assert!(
                matches!(err, VersionGuardError::KnownBuggyVersion { .. }),
                "{version}: {err}"
            );
        }
    }

    #[test]
    fn test_buggy_version_message() {
        let err = check_database_version("9.5.1", &GuardConfig::default()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("You are running Postgres 9.5.1."));
        assert!(msg.contains("known bug"));
        assert!(msg.ends_with("Please update your Postgres distribution."));
    }
}
