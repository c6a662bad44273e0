use std::f64::consts::{FRAC_PI_2, FRAC_PI_8};
use std::path::Path;

use anyhow::{Context, Result};

/// Tunables for an actor and its view.
///
/// Every field has a default, so a config file only needs to name what it changes.  Values are applied through the
/// actor's setters, which clamp them into range; nothing is validated here.
#[derive(Clone, Debug, PartialEq, derive_builder::Builder, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// Field of view, in radians.
    #[builder(default = "FRAC_PI_2")]
    pub fov: f64,

    /// How far rays reach, in cells.
    #[builder(default = "5.0")]
    pub view_distance: f64,

    /// Zooming in stops here.
    #[builder(default = "1.0")]
    pub min_view_distance: f64,

    /// Cells per second.
    #[builder(default = "0.25")]
    pub move_speed: f64,

    /// Radians per second.
    #[builder(default = "FRAC_PI_8")]
    pub look_speed: f64,

    /// Applies both to view distance (cells per second) and to the field of view (radians per second).
    #[builder(default = "0.5")]
    pub zoom_speed: f64,

    /// Side length of the actor's square collider.
    #[builder(default = "0.5")]
    pub actor_size: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            fov: FRAC_PI_2,
            view_distance: 5.0,
            min_view_distance: 1.0,
            move_speed: 0.25,
            look_speed: FRAC_PI_8,
            zoom_speed: 0.5,
            actor_size: 0.5,
        }
    }
}

impl ViewConfig {
    pub fn from_json_str(input: &str) -> Result<ViewConfig> {
        serde_json::from_str(input).context("Unable to parse view config")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<ViewConfig> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read view config {}", path.display()))?;
        let config = ViewConfig::from_json_str(&contents)
            .with_context(|| format!("While loading {}", path.display()))?;
        log::info!("Loaded view config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use pretty_assertions::assert_eq;

    #[test]
    fn builder_defaults_match() {
        let built = ViewConfigBuilder::default().build().unwrap();
        assert_eq!(built, ViewConfig::default());

        let built = ViewConfigBuilder::default()
            .view_distance(8.0)
            .fov(1.0)
            .build()
            .unwrap();
        assert_eq!(built.view_distance, 8.0);
        assert_eq!(built.fov, 1.0);
        assert_eq!(built.move_speed, 0.25);
    }

    #[test]
    fn partial_json() {
        let config = ViewConfig::from_json_str(r#"{"move_speed": 2.0}"#).unwrap();
        assert_eq!(
            config,
            ViewConfig {
                move_speed: 2.0,
                ..Default::default()
            }
        );
        assert_eq!(
            ViewConfig::from_json_str("{}").unwrap(),
            ViewConfig::default()
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(ViewConfig::from_json_str(r#"{"move_sped": 2.0}"#).is_err());
        assert!(ViewConfig::from_json_str("[]").is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"fov": 1.5, "actor_size": 0.25}}"#).unwrap();
        let config = ViewConfig::load(file.path()).unwrap();
        assert_eq!(config.fov, 1.5);
        assert_eq!(config.actor_size, 0.25);

        let err = ViewConfig::load("/nonexistent/view.json").unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/view.json"));
    }
}
