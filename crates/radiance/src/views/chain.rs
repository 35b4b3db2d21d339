//! Value-chain view: stage chips, category groups, and the technology
//! legend.

use crate::chain::{group_by_category, stage_color, VALUE_CHAIN_STAGES};
use crate::facets::distinct_in_order;
use crate::model::{hex_to_rgb, technology_rgb, UseCaseRecord};

pub const TITLE: &str = "Energy Value Chain";

pub const SUBTITLE: &str = "AI applications across the energy value chain";

/// Renders the value-chain view for `records`, wrapped to `width`.
pub fn render<'a, I>(records: I, width: usize) -> String
where
  I: IntoIterator<Item = &'a UseCaseRecord>,
{
  let records: Vec<&UseCaseRecord> = records.into_iter().collect();

  let mut out = String::new();
  out.push_str(TITLE);
  out.push('\n');
  out.push_str(SUBTITLE);
  out.push('\n');
  out.push('\n');

  out.push_str(&stage_chips());
  out.push('\n');

  for group in group_by_category(records.iter().copied()) {
    out.push_str(&lumen::headline(group.category));
    out.push('\n');
    let count = group.records.len();
    out.push_str(&format!("{} application{}\n", count, if count == 1 { "" } else { "s" }));
    out.push('\n');

    for record in &group.records {
      out.push_str(&item_card(record, width));
      out.push('\n');
    }
  }

  out.push_str(&technology_legend(&records));
  out
}

/// One chip per stage, colored dot plus the stage name.
fn stage_chips() -> String {
  let chips: Vec<String> = VALUE_CHAIN_STAGES
    .iter()
    .map(|stage| {
      let rgb = hex_to_rgb(stage_color(stage)).unwrap_or((102, 102, 102));
      lumen::swatch(rgb, stage)
    })
    .collect();
  format!("{}\n", chips.join("  "))
}

/// A compact card: name with technology dot, a two-line description,
/// the first two tags, and the maturity/adoption percentages.
fn item_card(record: &UseCaseRecord, width: usize) -> String {
  let mut out = String::new();
  out.push_str(&format!("  {}\n", lumen::swatch(technology_rgb(&record.technology), &record.name)));

  let body_width = width.saturating_sub(4).max(20);
  let lines = lumen::wrap_text(&record.description, body_width);
  for (index, line) in lines.iter().take(2).enumerate() {
    let truncated = lines.len() > 2 && index == 1;
    out.push_str(&format!("    {}{}\n", line, if truncated { "..." } else { "" }));
  }

  if !record.tags.is_empty() {
    let tags: Vec<String> =
      record.tags.iter().take(2).map(|tag| format!("[{tag}]")).collect();
    out.push_str(&format!("    {}\n", tags.join(" ")));
  }

  out.push_str(&format!(
    "    M: {}  A: {}\n",
    lumen::percent(record.maturity),
    lumen::percent(record.adoption)
  ));
  out
}

/// Legend of the distinct technologies among the rendered records.
fn technology_legend(records: &[&UseCaseRecord]) -> String {
  let mut out = String::new();
  out.push_str(&lumen::headline("Technology Types"));
  out.push('\n');
  for technology in distinct_in_order(records.iter().map(|record| record.technology.as_str())) {
    out.push_str(&format!("  {}\n", lumen::swatch(technology_rgb(&technology), &technology)));
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::curated_catalog;

  #[test]
  fn test_render_names_every_stage() {
    let catalog = curated_catalog();
    let screen = render(&catalog, 80);
    for stage in VALUE_CHAIN_STAGES {
      assert!(screen.contains(stage), "missing stage {stage}");
    }
  }

  #[test]
  fn test_render_counts_group_members() {
    let catalog = curated_catalog();
    let screen = render(&catalog, 80);
    assert_eq!(screen.matches("3 applications").count(), 8);
  }

  #[test]
  fn test_render_singular_count_for_one_record() {
    let catalog = curated_catalog();
    let screen = render(std::iter::once(&catalog[0]), 80);
    assert!(screen.contains("1 application\n"));
  }

  #[test]
  fn test_item_cards_show_first_two_tags_and_percentages() {
    let catalog = curated_catalog();
    let screen = render(std::iter::once(&catalog[0]), 80);
    assert!(screen.contains("[load forecasting] [grid optimization]"));
    assert!(!screen.contains("[demand prediction]"));
    assert!(screen.contains("M: 90%  A: 80%"));
  }

  #[test]
  fn test_legend_lists_only_rendered_technologies() {
    let catalog = curated_catalog();
    let screen = render(std::iter::once(&catalog[0]), 80);
    assert!(screen.contains("Technology Types"));
    assert!(screen.contains("Machine Learning"));
    assert!(!screen.contains("Predictive Analytics"));
  }

  #[test]
  fn test_off_radar_category_still_renders() {
    let catalog = curated_catalog();
    let screen = render(&catalog, 80);
    assert!(screen.contains("Carbon Capture & Storage"));
    assert!(screen.contains("Carbon Accounting"));
  }
}
