//! Footer branding.
//!
//! The footer reads `powered by <name>`. The name is fixed when the
//! application starts and handed to the UI; nothing changes it afterwards.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Brand shown when none is configured.
pub const DEFAULT_BRAND: &str = "cheetah";

/// Branding shown in the footer.
///
/// # Examples
///
/// ```
/// use idea_board_config::Branding;
///
/// assert_eq!(Branding::default().footer(), "powered by cheetah");
/// assert_eq!(Branding::new("acme").footer(), "powered by acme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branding {
    /// The brand name.
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_name() -> String {
    DEFAULT_BRAND.to_string()
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

impl Branding {
    /// Creates branding for the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the footer line.
    #[must_use]
    pub fn footer(&self) -> String {
        format!("powered by {}", self.name.trim())
    }

    /// Validates the branding.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBranding`] if the name is blank.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyBranding);
        }
        Ok(())
    }
}
