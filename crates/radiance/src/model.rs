//! Core record type and the fixed vocabularies shared by every view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single AI use case, either curated or submitted during the session.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UseCaseRecord {
  pub id: i64,
  pub name: String,
  pub category: String,
  pub technology: String,
  pub description: String,
  /// Maturity in [0, 1]; 0 is an idea, 1 is an industry lighthouse.
  pub maturity: f64,
  /// Adoption in [0, 1].
  pub adoption: f64,
  pub tags: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub company: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub website: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub submitted_at: Option<DateTime<Utc>>,
}

/// Radar sector labels, clockwise across the upper semicircle.
///
/// These are the only categories the radar can place. Records carrying any
/// other category still live in the catalog and the value chain view.
pub const SECTOR_LABELS: [&str; 8] = [
  "Grid Management & Smart Grid",
  "Renewable Energy",
  "Energy Trading & Markets",
  "Energy Storage",
  "Energy Efficiency",
  "Oil & Gas Operations",
  "Nuclear Energy",
  "Energy Analytics & IoT",
];

/// Maturity band names from the center of the radar outward.
pub const MATURITY_LEVELS: [&str; 5] = ["Idea", "Development", "Pilot", "Productive", "Lighthouse"];

/// Display color per technology, `#RRGGBB`.
pub const TECHNOLOGY_COLORS: [(&str, &str); 8] = [
  ("Machine Learning", "#FF6B6B"),
  ("Predictive Analytics", "#4ECDC4"),
  ("Expert Systems", "#45B7D1"),
  ("Computer Vision", "#96CEB4"),
  ("Natural Language Processing", "#FFEAA7"),
  ("Robotic Process Automation", "#DDA0DD"),
  ("Chatbots", "#98D8C8"),
  ("Blockchain", "#F7DC6F"),
];

/// Color used for technologies outside [`TECHNOLOGY_COLORS`].
pub const FALLBACK_COLOR: &str = "#666";

/// Index of `category` among the radar sectors, if it has one.
pub fn sector_index(category: &str) -> Option<usize> {
  SECTOR_LABELS.iter().position(|label| *label == category)
}

/// Hex color for a technology, falling back to [`FALLBACK_COLOR`].
pub fn technology_color(technology: &str) -> &'static str {
  TECHNOLOGY_COLORS
    .iter()
    .find(|(name, _)| *name == technology)
    .map(|(_, color)| *color)
    .unwrap_or(FALLBACK_COLOR)
}

/// Parses `#RGB` or `#RRGGBB` into an RGB triple.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
  let digits = hex.strip_prefix('#')?;
  let expanded = match digits.len() {
    3 => digits
      .chars()
      .flat_map(|c| [c, c])
      .collect::<String>(),
    6 => digits.to_string(),
    _ => return None,
  };
  let r = u8::from_str_radix(&expanded[0..2], 16).ok()?;
  let g = u8::from_str_radix(&expanded[2..4], 16).ok()?;
  let b = u8::from_str_radix(&expanded[4..6], 16).ok()?;
  Some((r, g, b))
}

/// RGB triple for a technology, for terminal swatches.
pub fn technology_rgb(technology: &str) -> (u8, u8, u8) {
  hex_to_rgb(technology_color(technology)).unwrap_or((102, 102, 102))
}

/// Human label for a maturity fraction, e.g. `0.72` is "Productive".
pub fn maturity_label(maturity: f64) -> &'static str {
  let bands = MATURITY_LEVELS.len();
  let index = ((maturity * bands as f64).floor() as usize).min(bands - 1);
  MATURITY_LEVELS[index]
}
