use std::str::FromStr;

use formkit::{ConfigError, ControllerConfig};
use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "formkit-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub form_selector: String,
    pub dropdown_selector: String,
    pub item_selector: String,
    pub spinner_selector: String,
    pub log_level: String,
    pub controller: ControllerConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            form_selector: ".ajax-form".to_owned(),
            dropdown_selector: ".dropdown-menu".to_owned(),
            item_selector: ".dropdown-item".to_owned(),
            spinner_selector: ".spinner-grow".to_owned(),
            log_level: "error".to_owned(),
            controller: ControllerConfig::default(),
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Invalid {
            reason: e.to_string(),
        })
    }

    /// Reads the JSON configuration embedded in the page, if any.
    pub fn load() -> Result<Self, ConfigError> {
        match gloo_utils::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|e| e.text_content())
        {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }

    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Error)
    }
}
