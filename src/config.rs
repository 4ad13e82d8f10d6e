use log::{warn, Level};
use serde::Deserialize;

/// Tunables for the motion hooks.
///
/// Defaults can be overridden from `index.html` with a JSON object inside
/// `<script id="motion-config" type="application/json">`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct MotionConfig {
    pub pointer_throttle_ms: u32,
    pub mobile_breakpoint: f64,
    pub scroll_top_threshold: f64,
    pub scroll_throttle_ms: u32,
    pub count_duration_ms: u32,
    pub reveal_duration_ms: u32,
    pub header_scroll_threshold: f64,
    pub search_latency_ms: u32,
    pub slider_interval_ms: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            pointer_throttle_ms: 50,
            mobile_breakpoint: 768.0,
            scroll_top_threshold: 500.0,
            scroll_throttle_ms: 100,
            count_duration_ms: 2000,
            reveal_duration_ms: 600,
            header_scroll_threshold: 20.0,
            search_latency_ms: 1000,
            slider_interval_ms: 5000,
        }
    }
}

impl MotionConfig {
    pub const ELEMENT_ID: &'static str = "motion-config";

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|e| e.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                warn!("Ignoring malformed motion config: {}", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = MotionConfig::from_json(r#"{ "pointer_throttle_ms": 100 }"#).unwrap();
        assert_eq!(config.pointer_throttle_ms, 100);
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert_eq!(config.scroll_top_threshold, 500.0);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(MotionConfig::from_json("{}").unwrap(), MotionConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(MotionConfig::from_json("{ pointer_throttle_ms: }").is_err());
    }
}
