//! SVG export of the radar view.
//!
//! The document mirrors the terminal radar exactly: same geometry, same
//! marker coordinates, so the two can be cross-checked.

use crate::layout::{round2, PlacedMarker, RadarGeometry};
use crate::model::{MATURITY_LEVELS, SECTOR_LABELS};

/// Semicircle arc of radius `r` over the baseline.
fn arc_path(geometry: &RadarGeometry, r: f64) -> String {
  let start_x = geometry.center_x() - r;
  let end_x = geometry.center_x() + r;
  let y = geometry.center_y();
  format!("M {start_x} {y} A {r} {r} 0 0 1 {end_x} {y}")
}

fn rings(geometry: &RadarGeometry) -> String {
  let mut out = String::new();
  for ring in 0..geometry.rings {
    let r = geometry.ring_radius(ring);
    out.push_str(&format!(
      r##"  <path d="{}" fill="none" stroke="#E0E0E0" stroke-width="1" opacity="0.5"/>
"##,
      arc_path(geometry, r)
    ));
  }
  out
}

fn sector_lines(geometry: &RadarGeometry) -> String {
  let center_x = geometry.center_x();
  let center_y = geometry.center_y();
  let mut out = String::new();
  for index in 0..=geometry.sectors {
    let (x, y) = geometry.point_at(geometry.boundary_angle(index), geometry.radius);
    out.push_str(&format!(
      r##"  <line x1="{center_x}" y1="{center_y}" x2="{x}" y2="{y}" stroke="#E0E0E0" stroke-width="1" opacity="0.5"/>
"##
    ));
  }
  out
}

fn sector_labels(geometry: &RadarGeometry) -> String {
  let center_x = geometry.center_x();
  let center_y = geometry.center_y();
  let mut out = String::new();
  for (index, label) in SECTOR_LABELS.iter().enumerate() {
    if index == 0 || index == SECTOR_LABELS.len() - 1 {
      // Edge sectors get large labels rotated along the sides.
      let side: f64 = if index == 0 { -1.0 } else { 1.0 };
      let x = center_x + side * (geometry.radius + 60.0);
      let y = center_y - geometry.radius / 2.0;
      let rotation = side * 90.0;
      out.push_str(&format!(
        r##"  <text x="{x}" y="{y}" text-anchor="middle" dominant-baseline="middle" font-size="22" fill="#1996a3" font-weight="bold" letter-spacing="0.02em" transform="rotate({rotation} {x} {y})">{label}</text>
"##
      ));
    } else {
      let (x, y) = geometry.point_at(geometry.sector_angle(index), geometry.radius + 40.0);
      let x = round2(x);
      let y = round2(y);
      out.push_str(&format!(
        r##"  <text x="{x}" y="{y}" text-anchor="middle" dominant-baseline="middle" font-size="13" fill="#b0b8c1" font-weight="600" opacity="0.7">{label}</text>
"##
      ));
    }
  }
  out
}

fn maturity_labels(geometry: &RadarGeometry) -> String {
  let mut out = String::new();
  for (index, label) in MATURITY_LEVELS.iter().enumerate() {
    let r_inner = index as f64 * geometry.radius / geometry.rings as f64;
    let r_outer = (index as f64 + 1.0) * geometry.radius / geometry.rings as f64;
    let r_center = (r_inner + r_outer) / 2.0;
    let x = round2(geometry.center_x() - geometry.radius + r_center);
    let y = round2(geometry.center_y() + 38.0);
    out.push_str(&format!(
      r##"  <text x="{x}" y="{y}" text-anchor="middle" dominant-baseline="hanging" font-size="18" fill="#7a869a" font-weight="bold" letter-spacing="0.01em">{label}</text>
"##
    ));
  }
  out
}

fn data_points(markers: &[PlacedMarker], captions: bool) -> String {
  let mut out = String::new();
  for marker in markers {
    out.push_str(&format!(
      r##"  <circle cx="{}" cy="{}" r="6" fill="{}" stroke="white" stroke-width="2"/>
"##,
      marker.x, marker.y, marker.color
    ));
    if captions {
      let caption_y = marker.y + 20.0;
      out.push_str(&format!(
        r##"  <text x="{}" y="{caption_y}" text-anchor="middle" font-size="10" fill="#666">{}</text>
"##,
        marker.x, marker.name
      ));
    }
  }
  out
}

/// Builds the standalone SVG document for placed markers.
pub fn radar_svg(geometry: &RadarGeometry, markers: &[PlacedMarker], captions: bool) -> String {
  format!(
    r##"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">
  <rect width="{}" height="{}" fill="white"/>
{}{}{}{}{}</svg>
"##,
    geometry.width,
    geometry.height,
    geometry.width,
    geometry.height,
    rings(geometry),
    sector_lines(geometry),
    sector_labels(geometry),
    maturity_labels(geometry),
    data_points(markers, captions),
  )
}
