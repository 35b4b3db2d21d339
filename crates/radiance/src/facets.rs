//! Filter facets derived from the catalog.

use std::collections::HashSet;

use crate::model::UseCaseRecord;

/// Deduplicates while keeping first-occurrence order.
pub(crate) fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
  let mut seen = HashSet::new();
  let mut ordered = Vec::new();
  for value in values {
    if seen.insert(value) {
      ordered.push(value.to_string());
    }
  }
  ordered
}

/// Distinct categories in first-occurrence order.
///
/// Facets always come from the full catalog, so the filter panel keeps
/// offering every value even while a selection narrows the records shown.
pub fn category_facets(records: &[UseCaseRecord]) -> Vec<String> {
  distinct_in_order(records.iter().map(|record| record.category.as_str()))
}

/// Distinct technologies in first-occurrence order.
pub fn technology_facets(records: &[UseCaseRecord]) -> Vec<String> {
  distinct_in_order(records.iter().map(|record| record.technology.as_str()))
}
