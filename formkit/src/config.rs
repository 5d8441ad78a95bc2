use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {reason}")]
    Invalid { reason: String },
}

/// How declared hook names that are missing from the registry are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HookResolution {
    /// Binding a form that names an unregistered hook fails.
    #[default]
    Strict,
    /// Unregistered names fall back to the default notifications.
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    pub success: String,
    pub failure_modal: String,
    pub failure_alert: String,
    pub transport_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            success: "操作成功！".to_owned(),
            failure_modal: "操作失败，请重试！".to_owned(),
            failure_alert: "操作失败，请重试。".to_owned(),
            transport_error: "请求错误，请重试。响应码：".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControllerConfig {
    pub success_redirect_ms: u64,
    pub failure_redirect_ms: u64,
    pub success_notify_ms: u64,
    pub fallback_notify_ms: u64,
    pub resolution: HookResolution,
    pub messages: Messages,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            success_redirect_ms: 2000,
            failure_redirect_ms: 3000,
            success_notify_ms: 800,
            fallback_notify_ms: 1000,
            resolution: HookResolution::default(),
            messages: Messages::default(),
        }
    }
}

impl ControllerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Invalid {
            reason: e.to_string(),
        })
    }

    pub fn redirect_delay(&self, is_success: bool) -> Duration {
        if is_success {
            Duration::from_millis(self.success_redirect_ms)
        } else {
            Duration::from_millis(self.failure_redirect_ms)
        }
    }

    pub fn success_notify(&self) -> Duration {
        Duration::from_millis(self.success_notify_ms)
    }

    pub fn fallback_notify(&self) -> Duration {
        Duration::from_millis(self.fallback_notify_ms)
    }

    pub fn transport_error_message(&self, status: u16) -> String {
        format!("{}{}", self.messages.transport_error, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ControllerConfig::default();
        assert_eq!(config.redirect_delay(true), Duration::from_millis(2000));
        assert_eq!(config.redirect_delay(false), Duration::from_millis(3000));
        assert_eq!(config.success_notify(), Duration::from_millis(800));
        assert_eq!(config.fallback_notify(), Duration::from_millis(1000));
        assert_eq!(config.resolution, HookResolution::Strict);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ControllerConfig::from_json(
            r#"{"failureRedirectMs": 5000, "resolution": "lenient", "messages": {"success": "Saved"}}"#,
        )
        .unwrap();
        assert_eq!(config.redirect_delay(false), Duration::from_millis(5000));
        assert_eq!(config.redirect_delay(true), Duration::from_millis(2000));
        assert_eq!(config.resolution, HookResolution::Lenient);
        assert_eq!(config.messages.success, "Saved");
        assert_eq!(config.messages.failure_alert, Messages::default().failure_alert);
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            ControllerConfig::from_json(r#"{"resolution": "sloppy"}"#),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn transport_error_message_ends_with_status() {
        let config = ControllerConfig::default();
        assert!(config.transport_error_message(502).ends_with("502"));
    }
}
