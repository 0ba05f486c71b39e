use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use grid_core::GridInfo;
use serde::Deserialize;
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
/// Overrides the config file location
const CONFIG_PATH_ENV: &str = "GRID_CONFIG";
/// Prefix of per-key overrides, e.g. `GRID_SYSTEM__GRID__ROWS=20`
const ENV_PREFIX: &str = "GRID_SYSTEM";

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub grid: GridInfo,
    #[serde(default)]
    pub view: ViewSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewSettings {
    #[serde(default = "default_pixels_per_unit")]
    pub pixels_per_unit: f32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        ViewSettings {
            pixels_per_unit: default_pixels_per_unit(),
        }
    }
}

fn default_pixels_per_unit() -> f32 {
    48.0
}

fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("grid.rows", 10)?
        .set_default("grid.columns", 10)?
        .set_default("grid.cell_size", 1.0)
}

pub fn load_settings() -> Result<Settings, ConfigError> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    info!("Attempting to load configuration from {}", path);

    let settings = builder()?
        .add_source(File::new(&path, FileFormat::Toml).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true))
        .build()
        .and_then(|config| config.try_deserialize::<Settings>());

    match settings {
        Ok(settings) => {
            info!(grid = %settings.grid, "Successfully loaded configuration");
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
fn settings_from_str(toml: &str) -> Result<Settings, ConfigError> {
    builder()?
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_core::Vect2;

    #[test]
    fn test_full_settings() {
        let settings = settings_from_str(
            r#"
            [grid]
            rows = 3
            columns = 2
            cell_size = 0.5
            origin_position = { x = -1.0, y = 2.0 }

            [view]
            pixels_per_unit = 10.0
            "#,
        )
        .unwrap();
        assert_eq!(settings.grid.rows(), 3);
        assert_eq!(settings.grid.columns(), 2);
        assert_eq!(settings.grid.cell_size(), 0.5);
        assert_eq!(settings.grid.origin_position(), Vect2::new(-1.0, 2.0));
        assert_eq!(settings.view.pixels_per_unit, 10.0);
    }

    #[test]
    fn test_defaults_fill_missing_keys() {
        let settings = settings_from_str("[grid]\nrows = 4\n").unwrap();
        assert_eq!(settings.grid.rows(), 4);
        assert_eq!(settings.grid.columns(), 10);
        assert_eq!(settings.grid.cell_size(), 1.0);
        assert_eq!(settings.grid.origin_position(), Vect2::ZERO);
        assert_eq!(settings.view.pixels_per_unit, 48.0);
    }

    #[test]
    fn test_invalid_grid_is_rejected() {
        assert!(settings_from_str("[grid]\ncell_size = 0.0\n").is_err());
        assert!(settings_from_str("[grid]\nrows = 0\n").is_err());
    }

    #[test]
    fn test_shipped_default_config_is_valid() {
        let settings = settings_from_str(include_str!("../config/default.toml")).unwrap();
        assert_eq!(settings.grid.rows(), 16);
        assert_eq!(settings.grid.columns(), 12);
    }
}
