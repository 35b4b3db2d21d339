//! Radar view: quick stats, active filters, and the sector-by-sector
//! listing of placed markers.

use colored::Colorize;

use crate::layout::{place_markers, PlacedMarker, RadarGeometry};
use crate::model::{maturity_label, technology_rgb, UseCaseRecord, MATURITY_LEVELS, SECTOR_LABELS};
use crate::session::Session;

pub const TITLE: &str = "AI Energy Radar";

pub const SUBTITLE: &str = "Explore AI applications across the energy sector";

/// Renders the radar view for the session's visible records.
pub fn render(session: &Session, geometry: &RadarGeometry) -> String {
  let visible = session.visible();
  let markers = place_markers(geometry, visible);
  let stats = session.quick_stats();

  let mut out = String::new();
  out.push_str(TITLE);
  out.push('\n');
  out.push_str(SUBTITLE);
  out.push('\n');
  out.push('\n');

  out.push_str(&lumen::headline("Quick Stats"));
  out.push('\n');
  out.push_str(&format!(
    "  {:<20} {}\n",
    "Total Applications",
    stats.total_applications.to_string().bold()
  ));
  out.push_str(&format!("  {:<20} {}\n", "Energy Sectors", stats.sectors.to_string().bold()));
  out.push_str(&format!("  {:<20} {}\n", "Technologies", stats.technologies.to_string().bold()));
  out.push('\n');

  out.push_str(&filter_summary(session));
  out.push('\n');

  for (sector, label) in SECTOR_LABELS.iter().enumerate() {
    out.push_str(&lumen::headline(label));
    out.push('\n');

    let in_sector: Vec<&PlacedMarker> =
      markers.iter().filter(|marker| marker.sector == sector).collect();
    if in_sector.is_empty() {
      out.push_str("  (no applications)\n");
    }
    for marker in in_sector {
      out.push_str(&format!(
        "  {} [{}] ({}, {})\n",
        lumen::swatch(technology_rgb(&marker.technology), &marker.name),
        MATURITY_LEVELS[marker.band],
        marker.x,
        marker.y
      ));
    }
    out.push('\n');
  }

  out
}

fn filter_summary(session: &Session) -> String {
  if session.filter.is_empty() {
    return "Filters: none\n".to_string();
  }

  let mut parts = Vec::new();
  if !session.filter.categories.is_empty() {
    parts.push(format!("categories: {}", session.filter.categories.join(", ")));
  }
  if !session.filter.technologies.is_empty() {
    parts.push(format!("technologies: {}", session.filter.technologies.join(", ")));
  }
  format!("Filters: {}\n", parts.join("; "))
}

/// Renders the detail card for a single record, wrapped to `width`.
pub fn render_detail(record: &UseCaseRecord, width: usize) -> String {
  let mut out = String::new();

  out.push_str(&lumen::headline(&record.name));
  out.push('\n');
  out.push_str(&record.category);
  out.push('\n');
  out.push('\n');

  for line in lumen::wrap_text(&record.description, width) {
    out.push_str(&line);
    out.push('\n');
  }
  out.push('\n');

  out.push_str("Technology\n");
  out.push_str(&format!(
    "  {}\n",
    lumen::swatch(technology_rgb(&record.technology), &record.technology)
  ));
  out.push('\n');

  out.push_str("Tags\n");
  if record.tags.is_empty() {
    out.push_str("  (none)\n");
  } else {
    let tags: Vec<String> = record.tags.iter().map(|tag| format!("[{tag}]")).collect();
    out.push_str(&format!("  {}\n", tags.join(" ")));
  }
  out.push('\n');

  out.push_str(&format!(
    "Maturity  {} ({})\n",
    lumen::meter(record.maturity, 20),
    maturity_label(record.maturity)
  ));
  out.push_str(&format!("Adoption  {}\n", lumen::meter(record.adoption, 20)));

  if let Some(company) = &record.company {
    out.push_str(&format!("Company   {company}\n"));
  }
  if let Some(website) = &record.website {
    out.push_str(&format!("Website   {website}\n"));
  }

  out
}
