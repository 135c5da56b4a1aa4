use gloo_net::http;
use serde::Deserialize;

/// Panel configuration, served next to the application
/// and fetched once at startup.
#[derive(Clone, Debug, Deserialize)]
pub struct PanelConfig {
    pub title: String,
    pub switches: Vec<SwitchConfig>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SwitchConfig {
    pub name: String,
    pub on_label: String,
    pub off_label: String,
    #[serde(default)]
    pub initial: bool,
    #[serde(default)]
    pub locked: bool,
}

#[derive(thiserror::Error, Clone, Debug)]
#[error("{message}")]
pub struct ConfigError {
    pub message: String,
}

impl PanelConfig {

    pub async fn load() -> Result<Self, ConfigError> {
        let config = http::Request::get("/config.json")
            .send()
            .await
            .map_err(|_| ConfigError { message: String::from("Could not fetch the panel configuration!") })?
            .json::<PanelConfig>()
            .await
            .map_err(|_| ConfigError { message: String::from("Could not parse the panel configuration!") })?;

        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_a_full_switch_entry_deserializes() {
        let config = serde_json::from_str::<PanelConfig>(r#"
            {
                "title": "Device switches",
                "switches": [
                    { "name": "Telemetry", "on_label": "On", "off_label": "Off", "initial": true, "locked": true }
                ]
            }
        "#).unwrap();

        assert_eq!(config.title, "Device switches");
        assert_eq!(config.switches.len(), 1);

        let switch = &config.switches[0];
        assert_eq!(switch.name, "Telemetry");
        assert_eq!(switch.on_label, "On");
        assert_eq!(switch.off_label, "Off");
        assert!(switch.initial);
        assert!(switch.locked);
    }

    #[test]
    fn test_initial_and_locked_default_to_false() {
        let config = serde_json::from_str::<PanelConfig>(r#"
            {
                "title": "Device switches",
                "switches": [
                    { "name": "Telemetry", "on_label": "On", "off_label": "Off" }
                ]
            }
        "#).unwrap();

        let switch = &config.switches[0];
        assert!(!switch.initial);
        assert!(!switch.locked);
    }

    #[test]
    fn test_a_malformed_document_is_rejected() {
        let result = serde_json::from_str::<PanelConfig>(r#"{ "switches": [] }"#);
        assert!(result.is_err());
    }
}
