use std::path::Path;

use serde::{ Deserialize, Serialize };

use crate::engine::components::shapes::MeshKind;
use crate::engine::components::transform::{ DEFAULT_ROTATION_AXIS, DEFAULT_ROTATION_STEP };
use crate::engine::error::ConfigError;

pub const CONFIG_ENV_VAR: &str = "HELLO_CUBE_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            title: "Hello cube!".to_string(),
        }
    }
}

/// Startup configuration. Every field has a default, so `{}` is a valid file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub mesh: MeshKind,
    pub depth_test: bool,
    pub rotation_step_degrees: f64,
    pub rotation_axis: [f32; 3],
    pub clear_color: [f32; 4],
    pub vsync: bool,
    /// `env_logger` filter, e.g. "info" or "hello_cube=debug".
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            mesh: MeshKind::default(),
            depth_test: true,
            rotation_step_degrees: DEFAULT_ROTATION_STEP,
            rotation_axis: DEFAULT_ROTATION_AXIS,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            vsync: true,
            log_filter: None,
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        Self::from_json(&text, &display)
    }

    /// Resolves the config file from the first CLI argument, then
    /// `HELLO_CUBE_CONFIG`. Neither present means defaults.
    pub fn load(cli_path: Option<String>) -> Result<Self, ConfigError> {
        let path = cli_path.or_else(|| std::env::var(CONFIG_ENV_VAR).ok());
        match path {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size {}x{} must be non-zero",
                self.window.width,
                self.window.height
            )));
        }
        if !self.rotation_step_degrees.is_finite() || self.rotation_step_degrees <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "rotation_step_degrees must be a positive number, got {}",
                self.rotation_step_degrees
            )));
        }
        if self.rotation_axis.iter().all(|c| *c == 0.0) {
            return Err(ConfigError::Invalid("rotation_axis must not be zero".to_string()));
        }
        Ok(())
    }
}
