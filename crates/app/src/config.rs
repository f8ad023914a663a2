//! Viewer configuration file.
//!
//! Every section and field is optional; anything left out keeps its default.
//!
//! ```toml
//! [window]
//! width = 1600
//! height = 900
//!
//! [navigation]
//! move_speed = 0.2
//! time_scaled = true
//!
//! [hinge]
//! step = 0.03
//!
//! [camera]
//! eye = [30.0, 10.0, 30.0]
//! angle = 3.14159
//!
//! [projection]
//! fov_y_degrees = 45.0
//!
//! [keys]
//! toggle_gate = ["Space"]
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use campus_core::{Error, Result};
use campus_platform::{KeyBindings, WindowConfig};
use campus_renderer::ViewerConfig;
use campus_scene::{DirectionalLight, HingeConfig, NavigationConfig, ProjectionConfig, StartPose};

/// All user-configurable settings.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub navigation: NavigationConfig,
    pub hinge: HingeConfig,
    pub camera: StartPose,
    pub projection: ProjectionConfig,
    pub keys: KeyBindings,
}

impl AppConfig {
    /// Parse and validate a TOML document.
    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Reject values the viewer cannot run with.
    pub fn validate(&self) -> Result<()> {
        let projection = &self.projection;
        if !(projection.near > 0.0 && projection.far > projection.near) {
            return Err(Error::Config(format!(
                "projection needs 0 < near < far, got near = {}, far = {}",
                projection.near, projection.far
            )));
        }
        if !(projection.fov_y_degrees > 0.0 && projection.fov_y_degrees < 180.0) {
            return Err(Error::Config(format!(
                "fov_y_degrees must be in (0, 180), got {}",
                projection.fov_y_degrees
            )));
        }
        if !self.hinge.step.is_finite() || self.hinge.step == 0.0 {
            return Err(Error::Config(format!(
                "hinge step must be finite and non-zero, got {}",
                self.hinge.step
            )));
        }
        if self.navigation.time_scaled && self.navigation.reference_rate <= 0.0 {
            return Err(Error::Config(format!(
                "reference_rate must be positive, got {}",
                self.navigation.reference_rate
            )));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(Error::Config("window size must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Settings for the per-frame driver.
    pub fn viewer_config(&self) -> ViewerConfig {
        ViewerConfig {
            navigation: self.navigation.clone(),
            hinge: self.hinge.clone(),
            projection: self.projection.clone(),
            light: DirectionalLight::default(),
        }
    }
}
