//! Share link configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::DEFAULT_SHARE_BASE_URL;

/// Share link configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ShareConfig {
    /// Page that shared links open
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl ShareConfig {
    /// Validate share configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ValidationError::InvalidShareUrl);
        }
        Ok(())
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_config_defaults_valid() {
        assert!(ShareConfig::default().validate().is_ok());
    }

    #[test]
    fn test_share_config_rejects_non_http() {
        let config = ShareConfig {
            base_url: "ftp://duck".to_string(),
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidShareUrl));
    }
}
