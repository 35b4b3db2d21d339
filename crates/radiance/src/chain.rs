//! Grouping of use cases along the energy value chain.

use serde::Serialize;

use crate::model::UseCaseRecord;

/// Stages of the energy value chain, upstream to downstream.
pub const VALUE_CHAIN_STAGES: [&str; 6] =
  ["Generation", "Transmission", "Distribution", "Storage", "Consumption", "Trading"];

/// Display color per stage, `#RRGGBB`.
pub const STAGE_COLORS: [(&str, &str); 6] = [
  ("Generation", "#FF6B6B"),
  ("Transmission", "#4ECDC4"),
  ("Distribution", "#45B7D1"),
  ("Storage", "#96CEB4"),
  ("Consumption", "#FFEAA7"),
  ("Trading", "#DDA0DD"),
];

/// Hex color for a stage, `#666` for anything unknown.
pub fn stage_color(stage: &str) -> &'static str {
  STAGE_COLORS
    .iter()
    .find(|(name, _)| *name == stage)
    .map(|(_, color)| *color)
    .unwrap_or("#666")
}

/// Records sharing a category, in their original order.
#[derive(Debug, Serialize)]
pub struct CategoryGroup<'a> {
  pub category: &'a str,
  pub records: Vec<&'a UseCaseRecord>,
}

/// Groups records by category, keeping first-occurrence order of the
/// categories and record order within each group.
pub fn group_by_category<'a, I>(records: I) -> Vec<CategoryGroup<'a>>
where
  I: IntoIterator<Item = &'a UseCaseRecord>,
{
  let mut groups: Vec<CategoryGroup<'a>> = Vec::new();
  for record in records {
    match groups.iter_mut().find(|group| group.category == record.category) {
      Some(group) => group.records.push(record),
      None => groups.push(CategoryGroup { category: &record.category, records: vec![record] }),
    }
  }
  groups
}
