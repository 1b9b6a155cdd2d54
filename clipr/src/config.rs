use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ClipError, ClipResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// How long a copy control shows "Copied!" and stays disabled
    #[serde(with = "humantime_serde")]
    pub feedback_duration: Duration,

    /// Use the OS clipboard; when false, copies go to an in-process buffer
    pub use_system_clipboard: bool,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            feedback_duration: Duration::from_millis(2000),
            use_system_clipboard: true,
        }
    }
}

impl ClipboardConfig {
    pub fn validate(&self) -> ClipResult<()> {
        if self.feedback_duration.is_zero() {
            return Err(ClipError::ConfigError(
                "feedback_duration must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_feedback_is_two_seconds() {
        let config = ClipboardConfig::default();
        assert_eq!(config.feedback_duration, Duration::from_millis(2000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_duration_rejected() {
        let config = ClipboardConfig {
            feedback_duration: Duration::ZERO,
            ..ClipboardConfig::default()
        };
        assert!(matches!(config.validate(), Err(ClipError::ConfigError(_))));
    }
}
