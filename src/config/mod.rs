use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path};

use afetmap_core::{labels::Language, DrawerConfig};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "afetmap.toml";

const ENV_NAME_LANGUAGE: &str = "AFETMAP_LANGUAGE";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub drawer: DrawerConfig,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let explicit = file_path.is_some();
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound if !explicit => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    raw::Config::default()
                }
                _ => {
                    return Err(anyhow!(
                        "Unable to read configuration file {}: {err}",
                        file_path.display()
                    ))
                }
            },
        };
        let cfg = Self::try_from(raw_config)?;
        cfg.apply_env(env::var(ENV_NAME_LANGUAGE).ok())
    }

    fn apply_env(mut self, language: Option<String>) -> Result<Self> {
        if let Some(language) = language {
            self.drawer.language = language.parse()?;
        }
        Ok(self)
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { drawer, snackbar } = from;

        let raw::Drawer {
            breakpoint,
            panel_width,
            language,
        } = drawer.unwrap_or_default();

        let defaults = DrawerConfig::default();
        let breakpoint_px = breakpoint.unwrap_or(defaults.breakpoint_px);
        if !breakpoint_px.is_finite() || breakpoint_px < 0.0 {
            return Err(anyhow!("Invalid drawer breakpoint: {breakpoint_px}"));
        }
        let panel_width_px = panel_width.unwrap_or(defaults.panel_width_px);
        if panel_width_px == 0 {
            return Err(anyhow!("Drawer panel width must not be zero"));
        }
        let language = language
            .map(|lang| lang.parse::<Language>())
            .transpose()?
            .unwrap_or(defaults.language);

        let raw::Snackbar { auto_hide } = snackbar.unwrap_or_default();

        Ok(Self {
            drawer: DrawerConfig {
                breakpoint_px,
                panel_width_px,
                snackbar_auto_hide: auto_hide,
                language,
            },
        })
    }
}
