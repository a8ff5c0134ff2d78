//! Toolchain download location resolution.
//!
//! Maps a requested runtime version and host family onto the disco API
//! query serving Temurin packages. URI construction only; nothing here
//! talks to the network.

use crate::domain::error::DomainError;
use crate::domain::value_objects::{OperatingSystem, RuntimeVersion};

const DISCO_PACKAGES_ENDPOINT: &str = "https://api.foojay.io/disco/v3.0/packages";

/// Build the package-listing URI for `version` on `os`.
///
/// macOS queries use `darwin`; other families use their lowercase name.
/// Unsupported families are rejected rather than interpolated.
pub fn download_uri(version: RuntimeVersion, os: OperatingSystem) -> Result<String, DomainError> {
    let os_name = os
        .toolchain_name()
        .ok_or_else(|| DomainError::UnsupportedOperatingSystem {
            detected: os.as_str().to_string(),
        })?;

    Ok(format!(
        "{DISCO_PACKAGES_ENDPOINT}?jdk_version={}&distro=temurin&operating_system={os_name}",
        version.major()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linux_uri_uses_lowercase_family_name() {
        let uri = download_uri(RuntimeVersion::new(17), OperatingSystem::Linux).unwrap();
        assert_eq!(
            uri,
            "https://api.foojay.io/disco/v3.0/packages?jdk_version=17&distro=temurin&operating_system=linux"
        );
    }

    #[test]
    fn macos_maps_to_darwin() {
        let uri = download_uri(RuntimeVersion::new(21), OperatingSystem::MacOs).unwrap();
        assert!(uri.contains("operating_system=darwin"));
        assert!(uri.contains("jdk_version=21"));
    }

    #[test]
    fn windows_uses_its_own_name() {
        let uri = download_uri(RuntimeVersion::new(17), OperatingSystem::Windows).unwrap();
        assert!(uri.ends_with("operating_system=windows"));
    }

    #[test]
    fn unsupported_family_is_rejected() {
        let result = download_uri(RuntimeVersion::new(17), OperatingSystem::Unsupported);
        assert!(matches!(
            result,
            Err(DomainError::UnsupportedOperatingSystem { .. })
        ));
    }
}
