use anyhow::{Context, Result};
use shared::ClientConfig;

use crate::services::logging::Logger;

/// Id of the optional `<script type="application/json">` block in index.html
pub const CONFIG_ELEMENT_ID: &str = "corgi-config";

pub fn parse_config(raw: &str) -> Result<ClientConfig> {
    if raw.trim().is_empty() {
        return Ok(ClientConfig::default());
    }
    serde_json::from_str(raw).context("parsing client config")
}

/// Configuration embedded in the page, defaults for anything missing
pub fn load_config() -> ClientConfig {
    let raw = gloo::utils::document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    let Some(raw) = raw else {
        return ClientConfig::default();
    };
    match parse_config(&raw) {
        Ok(config) => config,
        Err(e) => {
            Logger::warn_with_component("config", &format!("{:#}, using defaults", e));
            ClientConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_parse_config() {
        assert_eq!(parse_config("  ").unwrap(), ClientConfig::default());

        let config = parse_config(r#"{"past_weeks": 8, "enable_debug_logging": true}"#).unwrap();
        assert_eq!(config.past_weeks, 8);
        assert!(config.enable_debug_logging);
        assert_eq!(config.api_base_url, "/api");

        assert!(parse_config("{not json").is_err());
    }
}
