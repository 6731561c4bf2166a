//! Viewer tunables, optionally overridden by an inline JSON block in the page.

use serde::{Deserialize, Serialize};

use crate::coords::LatLng;
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Earth imagery date shown at mount.
    pub initial_date: String,
    /// Centre of the "global view" used at mount and on every recentre.
    pub default_center: LatLng,
    pub default_zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub fly_to_zoom: u8,
    pub fly_to_duration_secs: f64,
    /// Multiplicative step of the elevation image scale.
    pub scale_step: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    pub chat: ChatConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            initial_date: "2024-08-15".to_string(),
            default_center: LatLng::new(20.0, 0.0),
            default_zoom: 2,
            min_zoom: 1,
            max_zoom: 9,
            fly_to_zoom: 7,
            fly_to_duration_secs: 1.5,
            scale_step: 1.3,
            min_scale: 0.5,
            max_scale: 5.0,
            chat: ChatConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub endpoint: String,
    pub model: String,
    pub system_prompt: String,
    pub greeting: String,
    pub api_key: Option<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            system_prompt: "You are a helpful and enthusiastic NASA expert. Keep answers concise, factual, and exciting.".to_string(),
            greeting: "👋 Hi! I'm your NASA AI Expert. Ask me anything about planets, stars, or space exploration!".to_string(),
            api_key: None,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: ViewerConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let zooms = self.min_zoom..=self.max_zoom;
        if self.min_zoom > self.max_zoom || !zooms.contains(&self.default_zoom) {
            return Err(ConfigError::Invalid(format!(
                "default_zoom {} outside [{}, {}]",
                self.default_zoom, self.min_zoom, self.max_zoom
            )));
        }
        if !zooms.contains(&self.fly_to_zoom) {
            return Err(ConfigError::Invalid(format!(
                "fly_to_zoom {} outside [{}, {}]",
                self.fly_to_zoom, self.min_zoom, self.max_zoom
            )));
        }
        if !(self.min_scale > 0.0 && self.min_scale <= 1.0 && self.max_scale >= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "scale range [{}, {}] must be positive and contain 1.0",
                self.min_scale, self.max_scale
            )));
        }
        if !(self.scale_step > 1.0) {
            return Err(ConfigError::Invalid(format!("scale_step {} must exceed 1.0", self.scale_step)));
        }
        if !(self.fly_to_duration_secs > 0.0) {
            return Err(ConfigError::Invalid("fly_to_duration_secs must be positive".to_string()));
        }
        if self.initial_date.trim().is_empty() {
            return Err(ConfigError::Invalid("initial_date is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_valid() {
        ViewerConfig::default().validate().unwrap();
    }

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(ViewerConfig::from_json("{}").unwrap(), ViewerConfig::default());
    }

    #[test]
    fn partial_override() {
        let cfg = ViewerConfig::from_json(
            r#"{"initial_date":"2024-09-01","chat":{"api_key":"sk-test"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.initial_date, "2024-09-01");
        assert_eq!(cfg.chat.api_key.as_deref(), Some("sk-test"));
        assert_eq!(cfg.chat.model, ChatConfig::default().model);
        assert_eq!(cfg.max_zoom, 9);
    }

    #[test]
    fn rejects_inconsistent_zoom() {
        let err = ViewerConfig::from_json(r#"{"default_zoom":12}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = ViewerConfig::from_json(r#"{"fly_to_zoom":0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_bad_scale() {
        assert!(ViewerConfig::from_json(r#"{"scale_step":1.0}"#).is_err());
        assert!(ViewerConfig::from_json(r#"{"min_scale":2.0}"#).is_err());
    }

    #[test]
    fn reports_parse_errors() {
        let err = ViewerConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
