//! Configuration module
//!
//! Settings that feed the AWS provider chain and the report output.

/// CLI configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Shared config profile; `None` lets the provider chain decide
    pub profile: Option<String>,

    /// Region override; `None` lets the provider chain decide
    pub region: Option<String>,

    /// Whether execution statuses are highlighted
    pub color: bool,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.profile.as_deref().is_some_and(|p| p.trim().is_empty()) {
            anyhow::bail!("profile cannot be empty");
        }

        if let Some(region) = self.region.as_deref() {
            if region.trim().is_empty() {
                anyhow::bail!("region cannot be empty");
            }
            if region.chars().any(char::is_whitespace) {
                anyhow::bail!("region `{}` must not contain whitespace", region);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.profile.is_none());
        assert!(config.region.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config {
            profile: Some("ml-prod".to_string()),
            region: Some("us-east-1".to_string()),
            color: true,
        };

        // Valid config should pass
        assert!(config.validate().is_ok());

        // Blank profile should fail
        config.profile = Some("  ".to_string());
        assert!(config.validate().is_err());

        config.profile = None;

        // Malformed region should fail
        config.region = Some("us east 1".to_string());
        assert!(config.validate().is_err());

        config.region = Some(String::new());
        assert!(config.validate().is_err());
    }
}
