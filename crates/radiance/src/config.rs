//! Configuration loading for the radiance binary.
//!
//! Settings live in `.radiance.json` or `radiance.json` in the working
//! directory; every field falls back to a default so a partial file or
//! no file at all both work.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::intake::{DEFAULT_SUBMIT_DELAY_MS, SUBMIT_DELAY_ENV};
use crate::layout::RadarGeometry;
use crate::model::{MATURITY_LEVELS, SECTOR_LABELS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadianceConfig {
  /// Radar canvas dimensions.
  #[serde(default)]
  pub radar: RadarConfig,
  /// Artificial delivery delay in milliseconds.
  #[serde(default = "default_submit_delay_ms")]
  pub submit_delay_ms: u64,
  /// Whether radar markers carry their name captions.
  #[serde(default = "default_marker_captions")]
  pub marker_captions: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarConfig {
  #[serde(default = "default_width")]
  pub width: f64,
  #[serde(default = "default_height")]
  pub height: f64,
  #[serde(default = "default_radius")]
  pub radius: f64,
  #[serde(default = "default_margin")]
  pub margin: f64,
}

fn default_width() -> f64 {
  900.0
}
fn default_height() -> f64 {
  520.0
}
fn default_radius() -> f64 {
  350.0
}
fn default_margin() -> f64 {
  10.0
}
fn default_submit_delay_ms() -> u64 {
  DEFAULT_SUBMIT_DELAY_MS
}
fn default_marker_captions() -> bool {
  true
}

impl Default for RadarConfig {
  fn default() -> Self {
    Self {
      width: default_width(),
      height: default_height(),
      radius: default_radius(),
      margin: default_margin(),
    }
  }
}

impl Default for RadianceConfig {
  fn default() -> Self {
    Self {
      radar: RadarConfig::default(),
      submit_delay_ms: default_submit_delay_ms(),
      marker_captions: default_marker_captions(),
    }
  }
}

impl RadianceConfig {
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
      .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: RadianceConfig = serde_json::from_str(&content)
      .with_context(|| format!("failed to parse config file {}", path.display()))?;
    Ok(config)
  }

  /// Loads from the working directory, or defaults when no file exists.
  pub fn load() -> Result<Self> {
    let config_paths = [".radiance.json", "radiance.json"];

    for path in &config_paths {
      if Path::new(path).exists() {
        return Self::load_from_file(path);
      }
    }

    Ok(RadianceConfig::default())
  }

  /// Geometry for the layout engine. Sector and ring counts follow the
  /// fixed vocabularies, not the config file.
  pub fn geometry(&self) -> RadarGeometry {
    RadarGeometry {
      width: self.radar.width,
      height: self.radar.height,
      radius: self.radar.radius,
      margin: self.radar.margin,
      sectors: SECTOR_LABELS.len(),
      rings: MATURITY_LEVELS.len(),
    }
  }

  /// Delivery delay: the environment override wins over the file.
  pub fn submit_delay(&self) -> Duration {
    let millis = std::env::var(SUBMIT_DELAY_ENV)
      .ok()
      .and_then(|value| value.parse::<u64>().ok())
      .unwrap_or(self.submit_delay_ms);
    Duration::from_millis(millis)
  }
}
