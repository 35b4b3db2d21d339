//! Category and technology filtering over use-case records.

use crate::model::UseCaseRecord;

/// Active filter selections.
///
/// Within one dimension the selected values widen the result (any match
/// passes); across dimensions both must pass. Empty selections match
/// everything, so a fresh state shows the whole catalog.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
  pub categories: Vec<String>,
  pub technologies: Vec<String>,
}

fn toggle(selections: &mut Vec<String>, value: &str) {
  match selections.iter().position(|selected| selected == value) {
    Some(index) => {
      selections.remove(index);
    }
    None => selections.push(value.to_string()),
  }
}

impl FilterState {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds the category when absent, removes it when present.
  pub fn toggle_category(&mut self, category: &str) {
    toggle(&mut self.categories, category);
  }

  /// Adds the technology when absent, removes it when present.
  pub fn toggle_technology(&mut self, technology: &str) {
    toggle(&mut self.technologies, technology);
  }

  pub fn clear(&mut self) {
    self.categories.clear();
    self.technologies.clear();
  }

  pub fn is_empty(&self) -> bool {
    self.categories.is_empty() && self.technologies.is_empty()
  }

  pub fn matches(&self, record: &UseCaseRecord) -> bool {
    let category_ok =
      self.categories.is_empty() || self.categories.iter().any(|c| *c == record.category);
    let technology_ok =
      self.technologies.is_empty() || self.technologies.iter().any(|t| *t == record.technology);
    category_ok && technology_ok
  }

  /// Returns the records passing the filter, in their original order.
  pub fn apply<'a>(&self, records: &'a [UseCaseRecord]) -> Vec<&'a UseCaseRecord> {
    records.iter().filter(|record| self.matches(record)).collect()
  }
}
