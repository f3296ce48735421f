//! Admin API version selection.
//!
//! The version is baked into every versioned request path
//! (`/admin/api/{version}/...`).

use crate::error::ConfigError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A REST Admin API version.
///
/// Stable versions are released quarterly. Anything else that still looks
/// like `YYYY-MM` on a release month parses as [`ApiVersion::Custom`].
///
/// # Example
///
/// ```rust
/// use shopify_rest::ApiVersion;
///
/// let version: ApiVersion = "2024-10".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2024_10);
/// assert_eq!(version.to_string(), "2024-10");
/// assert!(ApiVersion::latest().is_stable());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// 2024-01
    V2024_01,
    /// 2024-04
    V2024_04,
    /// 2024-07
    V2024_07,
    /// 2024-10
    V2024_10,
    /// 2025-01
    V2025_01,
    /// 2025-04
    V2025_04,
    /// 2025-07
    V2025_07,
    /// 2025-10
    V2025_10,
    /// The unstable preview version.
    Unstable,
    /// A version this crate does not know by name.
    Custom(String),
}

const STABLE: [(ApiVersion, &str); 8] = [
    (ApiVersion::V2024_01, "2024-01"),
    (ApiVersion::V2024_04, "2024-04"),
    (ApiVersion::V2024_07, "2024-07"),
    (ApiVersion::V2024_10, "2024-10"),
    (ApiVersion::V2025_01, "2025-01"),
    (ApiVersion::V2025_04, "2025-04"),
    (ApiVersion::V2025_07, "2025-07"),
    (ApiVersion::V2025_10, "2025-10"),
];

impl ApiVersion {
    /// Returns the newest stable version known to this crate.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2025_10
    }

    /// Returns `true` for named quarterly releases.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Unstable | Self::Custom(_))
    }

    fn rank(&self) -> usize {
        match self {
            Self::Unstable => STABLE.len(),
            Self::Custom(_) => STABLE.len() + 1,
            stable => STABLE
                .iter()
                .position(|(v, _)| v == stable)
                .unwrap_or_default(),
        }
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unstable => f.write_str("unstable"),
            Self::Custom(s) => f.write_str(s),
            stable => {
                let name = STABLE
                    .iter()
                    .find(|(v, _)| v == stable)
                    .map_or("", |(_, name)| name);
                f.write_str(name)
            }
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        if s == "unstable" {
            return Ok(Self::Unstable);
        }
        if let Some((version, _)) = STABLE.iter().find(|(_, name)| *name == s) {
            return Ok(version.clone());
        }
        if is_release_month(&s) {
            return Ok(Self::Custom(s));
        }
        Err(ConfigError::InvalidApiVersion { version: s })
    }
}

fn is_release_month(s: &str) -> bool {
    let Some((year, month)) = s.split_once('-') else {
        return false;
    };
    year.len() == 4
        && year.chars().all(|c| c.is_ascii_digit())
        && matches!(month, "01" | "04" | "07" | "10")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_known_versions() {
        assert_eq!("2024-01".parse::<ApiVersion>().unwrap(), ApiVersion::V2024_01);
        assert_eq!("2025-10".parse::<ApiVersion>().unwrap(), ApiVersion::V2025_10);
        assert_eq!(" Unstable ".parse::<ApiVersion>().unwrap(), ApiVersion::Unstable);
    }

    #[test]
    fn test_display_matches_path_segment() {
        assert_eq!(ApiVersion::V2024_07.to_string(), "2024-07");
        assert_eq!(ApiVersion::Unstable.to_string(), "unstable");
        assert_eq!(ApiVersion::Custom("2026-01".to_string()).to_string(), "2026-01");
    }

    #[test]
    fn test_future_versions_parse_as_custom() {
        let version: ApiVersion = "2026-04".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("2026-04".to_string()));
        assert!(!version.is_stable());
    }

    #[test]
    fn test_rejects_invalid_versions() {
        assert!("invalid".parse::<ApiVersion>().is_err());
        assert!("2024".parse::<ApiVersion>().is_err());
        assert!("2024-1".parse::<ApiVersion>().is_err());
        assert!("2024-02".parse::<ApiVersion>().is_err());
        assert!("24-01".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(ApiVersion::V2024_01 < ApiVersion::V2024_04);
        assert!(ApiVersion::V2024_10 < ApiVersion::V2025_01);
        assert!(ApiVersion::latest() < ApiVersion::Unstable);
        assert!(ApiVersion::Unstable < ApiVersion::Custom("2026-01".to_string()));
        assert!(
            ApiVersion::Custom("2026-01".to_string()) < ApiVersion::Custom("2026-04".to_string())
        );
    }
}
