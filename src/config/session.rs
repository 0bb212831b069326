//! Session persistence configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::ValidationError;

fn default_state_dir() -> PathBuf {
    PathBuf::from("./data/session")
}

/// Configuration for the session state store.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Directory the file-backed state store writes under.
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
        }
    }
}

impl SessionConfig {
    /// Validates the session section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.state_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyStateDir);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_data_session() {
        let config = SessionConfig::default();
        assert_eq!(config.state_dir, PathBuf::from("./data/session"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_dir_is_invalid() {
        let config = SessionConfig {
            state_dir: PathBuf::new(),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::EmptyStateDir)
        ));
    }
}
