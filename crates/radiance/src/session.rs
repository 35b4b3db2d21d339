//! Session state: the current view, active filters, and records
//! submitted since startup.

use chrono::Utc;
use serde::Serialize;

use crate::catalog::curated_catalog;
use crate::facets::technology_facets;
use crate::filter::FilterState;
use crate::intake::{IntakeForm, SubmissionGateway, SubmitError};
use crate::model::{UseCaseRecord, SECTOR_LABELS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
  Entry,
  Radar,
  ValueChain,
  UseCases,
}

/// Headline numbers shown beside the radar.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickStats {
  pub total_applications: usize,
  pub sectors: usize,
  pub technologies: usize,
}

/// Owns everything that changes during a run. The catalog itself never
/// does; submissions only append.
pub struct Session {
  catalog: Vec<UseCaseRecord>,
  submissions: Vec<UseCaseRecord>,
  pub filter: FilterState,
  pub form: IntakeForm,
  view: View,
  last_submission_id: i64,
}

impl Session {
  pub fn new() -> Self {
    Self {
      catalog: curated_catalog(),
      submissions: Vec::new(),
      filter: FilterState::new(),
      form: IntakeForm::new(),
      view: View::Entry,
      last_submission_id: 0,
    }
  }

  pub fn view(&self) -> View {
    self.view
  }

  pub fn set_view(&mut self, view: View) {
    self.view = view;
  }

  pub fn catalog(&self) -> &[UseCaseRecord] {
    &self.catalog
  }

  pub fn submissions(&self) -> &[UseCaseRecord] {
    &self.submissions
  }

  /// Catalog records passing the active filters, in catalog order.
  /// Filters narrow the catalog views only; submissions always show in
  /// the use-case list.
  pub fn visible(&self) -> Vec<&UseCaseRecord> {
    self.filter.apply(&self.catalog)
  }

  pub fn toggle_category(&mut self, category: &str) {
    self.filter.toggle_category(category);
  }

  pub fn toggle_technology(&mut self, technology: &str) {
    self.filter.toggle_technology(technology);
  }

  /// Counts over everything the session knows, submissions included.
  pub fn quick_stats(&self) -> QuickStats {
    let combined: Vec<UseCaseRecord> =
      self.catalog.iter().chain(self.submissions.iter()).cloned().collect();
    QuickStats {
      total_applications: combined.len(),
      sectors: SECTOR_LABELS.len(),
      technologies: technology_facets(&combined).len(),
    }
  }

  /// Appends a submission, bumping its id when it would not be strictly
  /// greater than the last one issued. Returns the id actually stored.
  pub fn append_submission(&mut self, mut record: UseCaseRecord) -> i64 {
    if record.id <= self.last_submission_id {
      record.id = self.last_submission_id + 1;
    }
    self.last_submission_id = record.id;
    let id = record.id;
    self.submissions.push(record);
    id
  }

  /// Runs the form's submission through the gateway and stores the
  /// finalized record. Ids derive from the landing time in epoch
  /// milliseconds.
  pub async fn submit_draft<G: SubmissionGateway>(
    &mut self,
    gateway: &G,
  ) -> Result<i64, SubmitError> {
    let record = self
      .form
      .submit(gateway, || {
        let now = Utc::now();
        (now.timestamp_millis(), now)
      })
      .await?;
    Ok(self.append_submission(record))
  }
}

impl Default for Session {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::intake::{Field, SimulatedGateway};
  use std::time::Duration;

  fn fill_form(session: &mut Session, title: &str) {
    session.form.edit(Field::Name, "Grace Hopper");
    session.form.edit(Field::Email, "grace@example.com");
    session.form.edit(Field::UseCaseTitle, title);
    session.form.edit(Field::Description, "Compiles grid telemetry into anomaly reports nightly.");
    session.form.edit(Field::Category, "Grid Management & Smart Grid");
    session.form.edit(Field::Technology, "Machine Learning");
  }

  #[test]
  fn test_new_session_starts_at_the_entry_view() {
    let session = Session::new();
    assert_eq!(session.view(), View::Entry);
    assert_eq!(session.visible().len(), 24);
    assert!(session.submissions().is_empty());
  }

  #[test]
  fn test_quick_stats_reflect_the_catalog() {
    let stats = Session::new().quick_stats();
    assert_eq!(stats.total_applications, 24);
    assert_eq!(stats.sectors, 8);
    assert_eq!(stats.technologies, 3);
  }

  #[test]
  fn test_toggles_narrow_and_restore_the_visible_set() {
    let mut session = Session::new();
    session.toggle_category("Nuclear Energy");
    assert_eq!(session.visible().len(), 3);

    session.toggle_category("Nuclear Energy");
    assert_eq!(session.visible().len(), 24);
  }

  #[test]
  fn test_append_bumps_colliding_ids() {
    let mut session = Session::new();
    let mut record = curated_catalog().remove(0);
    record.id = 5000;

    assert_eq!(session.append_submission(record.clone()), 5000);
    assert_eq!(session.append_submission(record.clone()), 5001);
    record.id = 4000;
    assert_eq!(session.append_submission(record), 5002);
  }

  #[tokio::test]
  async fn test_submit_draft_stores_the_finalized_record() {
    let mut session = Session::new();
    fill_form(&mut session, "Telemetry Compiler");

    let gateway = SimulatedGateway::new(Duration::from_millis(0));
    let id = session.submit_draft(&gateway).await.unwrap();

    assert_eq!(session.submissions().len(), 1);
    assert_eq!(session.submissions()[0].id, id);
    assert_eq!(session.submissions()[0].name, "Telemetry Compiler");
    assert_eq!(session.quick_stats().total_applications, 25);
    // Filters only narrow the catalog views.
    assert_eq!(session.visible().len(), 24);
  }

  #[tokio::test]
  async fn test_back_to_back_submissions_get_distinct_increasing_ids() {
    let mut session = Session::new();
    let gateway = SimulatedGateway::new(Duration::from_millis(0));

    fill_form(&mut session, "First");
    let first = session.submit_draft(&gateway).await.unwrap();

    session.form.reset();
    fill_form(&mut session, "Second");
    let second = session.submit_draft(&gateway).await.unwrap();

    assert!(second > first);
    assert_eq!(session.submissions().len(), 2);
  }

  #[tokio::test]
  async fn test_quick_stats_count_new_technologies() {
    let mut session = Session::new();
    fill_form(&mut session, "Outage Chatline");
    session.form.edit(Field::Technology, "Chatbots");

    let gateway = SimulatedGateway::new(Duration::from_millis(0));
    session.submit_draft(&gateway).await.unwrap();

    assert_eq!(session.quick_stats().technologies, 4);
  }
}
