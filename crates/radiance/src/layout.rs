//! Polar layout for the radar: a semicircle of sectors crossed by
//! maturity rings, with deterministic jitter so stacked markers stay
//! readable.

use std::f64::consts::PI;

use serde::Serialize;

use crate::model::{sector_index, technology_color, UseCaseRecord, MATURITY_LEVELS, SECTOR_LABELS};

/// Canvas and grid dimensions of the radar.
#[derive(Debug, Clone)]
pub struct RadarGeometry {
  pub width: f64,
  pub height: f64,
  pub radius: f64,
  pub margin: f64,
  pub sectors: usize,
  pub rings: usize,
}

impl Default for RadarGeometry {
  fn default() -> Self {
    Self {
      width: 900.0,
      height: 520.0,
      radius: 350.0,
      margin: 10.0,
      sectors: SECTOR_LABELS.len(),
      rings: MATURITY_LEVELS.len(),
    }
  }
}

impl RadarGeometry {
  pub fn center_x(&self) -> f64 {
    self.width / 2.0
  }

  pub fn center_y(&self) -> f64 {
    self.radius + self.margin
  }

  /// Mid-sector angle in radians. Sector 0 opens the semicircle on the
  /// left (near pi), the last sector closes it on the right (near 0).
  pub fn sector_angle(&self, sector: usize) -> f64 {
    PI - (sector as f64 + 0.5) * PI / self.sectors as f64
  }

  /// Angle of boundary ray `index`, for `index` in `0..=sectors`.
  pub fn boundary_angle(&self, index: usize) -> f64 {
    PI - index as f64 * PI / self.sectors as f64
  }

  /// Outer radius of ring `ring`, counted from the center.
  pub fn ring_radius(&self, ring: usize) -> f64 {
    (ring as f64 + 1.0) * self.radius / self.rings as f64
  }

  /// Screen point at polar `(angle, r)`. Screen y grows downward, so the
  /// semicircle opens upward from the baseline.
  pub fn point_at(&self, angle: f64, r: f64) -> (f64, f64) {
    (self.center_x() + r * angle.cos(), self.center_y() - r * angle.sin())
  }

  /// Maturity band for a fraction in [0, 1]; the rim belongs to the last
  /// band.
  pub fn band_index(&self, maturity: f64) -> usize {
    ((maturity * self.rings as f64).floor() as usize).min(self.rings - 1)
  }
}

/// A record resolved to a screen position on the radar.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedMarker {
  pub id: i64,
  pub name: String,
  pub technology: String,
  pub color: &'static str,
  pub x: f64,
  pub y: f64,
  pub sector: usize,
  pub band: usize,
}

/// Perpendicular nudge for the marker at `index`, in pixels.
///
/// The sine of a stride through an irrational-looking constant spreads
/// neighbouring markers apart while staying reproducible across runs.
pub fn jitter_offset(index: usize) -> f64 {
  (index as f64 * 123.456).sin() * 10.0
}

/// Rounds to two decimal places, matching the precision markers are
/// published at.
pub fn round2(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}

/// Places records on the radar, dropping those whose category has no
/// sector.
///
/// The jitter index follows the position in the incoming list, so a
/// record keeps its exact position whether or not off-radar neighbours
/// surround it in the same list.
pub fn place_markers<'a, I>(geometry: &RadarGeometry, records: I) -> Vec<PlacedMarker>
where
  I: IntoIterator<Item = &'a UseCaseRecord>,
{
  records
    .into_iter()
    .enumerate()
    .filter_map(|(index, record)| {
      let sector = sector_index(&record.category)?;
      let angle = geometry.sector_angle(sector);
      let r = record.maturity * geometry.radius;
      let (x, y) = geometry.point_at(angle, r);

      let offset = jitter_offset(index);
      let jittered_x = x + offset * (angle + PI / 2.0).cos();
      let jittered_y = y + offset * (angle + PI / 2.0).sin();

      Some(PlacedMarker {
        id: record.id,
        name: record.name.clone(),
        technology: record.technology.clone(),
        color: technology_color(&record.technology),
        x: round2(jittered_x),
        y: round2(jittered_y),
        sector,
        band: geometry.band_index(record.maturity),
      })
    })
    .collect()
}
