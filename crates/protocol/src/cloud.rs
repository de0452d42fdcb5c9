//! Hosting metadata returned by the cloud-info endpoint.
//!
//! The backend reports which cloud provider and region it runs in. The
//! lookup is purely cosmetic: the client shows a small badge when the
//! provider is known and hides it otherwise.

use serde::{Deserialize, Serialize};

/// Value used by the backend for an unknown provider or region.
pub const UNKNOWN: &str = "unknown";

fn unknown() -> String {
    UNKNOWN.to_string()
}

/// Cloud hosting information, as returned by `GET /api/cloud-info`.
///
/// Missing fields deserialize to `"unknown"`.
///
/// # Examples
///
/// ```
/// use idea_board_protocol::{CloudInfo, CloudProvider};
///
/// let info: CloudInfo = serde_json::from_str(r#"{"cloud_provider": "aws", "region": "eu-west-1"}"#).unwrap();
/// assert_eq!(info.provider(), CloudProvider::Aws);
///
/// let info = CloudInfo::default();
/// assert_eq!(info.provider(), CloudProvider::Unknown);
/// assert_eq!(info.region, "unknown");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudInfo {
    /// Provider code: `aws`, `azure`, `gcp` or `unknown`.
    #[serde(default = "unknown")]
    pub cloud_provider: String,
    /// Region identifier, or `unknown` when not applicable.
    #[serde(default = "unknown")]
    pub region: String,
}

impl Default for CloudInfo {
    fn default() -> Self {
        Self {
            cloud_provider: unknown(),
            region: unknown(),
        }
    }
}

impl CloudInfo {
    /// Creates cloud info from a provider code and a region.
    #[must_use]
    pub fn new(cloud_provider: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            cloud_provider: cloud_provider.into(),
            region: region.into(),
        }
    }

    /// Returns the recognized provider for this info.
    #[must_use]
    pub fn provider(&self) -> CloudProvider {
        CloudProvider::from_code(&self.cloud_provider)
    }

    /// Returns `true` if the provider is recognized and a badge should be shown.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.provider() != CloudProvider::Unknown
    }

    /// Returns the region, or `None` if it is unknown or blank.
    #[must_use]
    pub fn known_region(&self) -> Option<&str> {
        let region = self.region.trim();
        (!region.is_empty() && !region.eq_ignore_ascii_case(UNKNOWN)).then_some(region)
    }
}

/// A recognized cloud provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CloudProvider {
    /// Amazon Web Services.
    Aws,
    /// Microsoft Azure.
    Azure,
    /// Google Cloud Platform.
    Gcp,
    /// Not running on a recognized provider.
    #[default]
    Unknown,
}

impl CloudProvider {
    /// Maps a provider code to a provider, ignoring case.
    ///
    /// Unrecognized codes map to [`CloudProvider::Unknown`].
    ///
    /// # Examples
    ///
    /// ```
    /// use idea_board_protocol::CloudProvider;
    ///
    /// assert_eq!(CloudProvider::from_code("GCP"), CloudProvider::Gcp);
    /// assert_eq!(CloudProvider::from_code("digitalocean"), CloudProvider::Unknown);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "aws" => Self::Aws,
            "azure" => Self::Azure,
            "gcp" => Self::Gcp,
            _ => Self::Unknown,
        }
    }

    /// Returns the human-readable provider name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Aws => "AWS",
            Self::Azure => "Azure",
            Self::Gcp => "Google Cloud",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns the glyph shown next to the provider name.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Aws => "🟧",
            Self::Azure => "🟦",
            Self::Gcp => "🟩",
            Self::Unknown => "❔",
        }
    }
}
