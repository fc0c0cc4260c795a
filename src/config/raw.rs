use duration_str::deserialize_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("afetmap.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub drawer: Option<Drawer>,
    pub snackbar: Option<Snackbar>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Drawer {
    pub breakpoint: Option<f64>,
    pub panel_width: Option<u32>,
    pub language: Option<String>,
}

impl Default for Drawer {
    fn default() -> Self {
        Config::default().drawer.expect("Drawer configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Snackbar {
    #[serde(deserialize_with = "deserialize_duration")]
    pub auto_hide: Duration,
}

impl Default for Snackbar {
    fn default() -> Self {
        Config::default().snackbar.expect("Snackbar configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        let drawer = cfg.drawer.unwrap();
        assert_eq!(drawer.breakpoint, Some(768.0));
        assert_eq!(drawer.panel_width, Some(400));
        assert_eq!(drawer.language.as_deref(), Some("tr"));
        assert_eq!(cfg.snackbar.unwrap().auto_hide, Duration::from_secs(2));
    }

    #[test]
    fn parse_partial_config() {
        let cfg: Config = toml::from_str(
            r#"
            [drawer]
            language = "en"
            "#,
        )
        .unwrap();
        let drawer = cfg.drawer.unwrap();
        assert!(drawer.breakpoint.is_none());
        assert_eq!(drawer.language.as_deref(), Some("en"));
        assert!(cfg.snackbar.is_none());
    }
}
