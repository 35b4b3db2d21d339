//! Submission intake: draft fields, validation, and delivery.
//!
//! The form walks Editing -> Submitting -> Submitted. Field errors are
//! set when a field loses focus and cleared as soon as it is edited
//! again, so stale messages never linger while the user types.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use regex::Regex;
use thiserror::Error;

use crate::model::UseCaseRecord;

/// Technologies offered by the form; the catalog palette plus an
/// escape hatch.
pub const FORM_TECHNOLOGIES: [&str; 9] = [
  "Machine Learning",
  "Predictive Analytics",
  "Expert Systems",
  "Computer Vision",
  "Natural Language Processing",
  "Robotic Process Automation",
  "Chatbots",
  "Blockchain",
  "Other",
];

/// Environment override for the simulated delivery delay.
pub const SUBMIT_DELAY_ENV: &str = "RADIANCE_SUBMIT_DELAY_MS";

/// Delivery delay used when [`SUBMIT_DELAY_ENV`] is absent.
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
  Name,
  Email,
  UseCaseTitle,
  Description,
  Category,
  Technology,
  Maturity,
  Adoption,
  Tags,
  Company,
  Website,
}

impl Field {
  /// Every field, in display order.
  pub const ALL: [Field; 11] = [
    Field::Name,
    Field::Email,
    Field::UseCaseTitle,
    Field::Description,
    Field::Category,
    Field::Technology,
    Field::Maturity,
    Field::Adoption,
    Field::Tags,
    Field::Company,
    Field::Website,
  ];

  /// Fields that must be filled before the form can submit.
  pub const REQUIRED: [Field; 6] = [
    Field::Name,
    Field::Email,
    Field::UseCaseTitle,
    Field::Description,
    Field::Category,
    Field::Technology,
  ];

  pub fn label(&self) -> &'static str {
    match self {
      Field::Name => "Name",
      Field::Email => "Email",
      Field::UseCaseTitle => "Use Case Title",
      Field::Description => "Description",
      Field::Category => "Category",
      Field::Technology => "Technology",
      Field::Maturity => "Maturity Level (%)",
      Field::Adoption => "Adoption Level (%)",
      Field::Tags => "Tags",
      Field::Company => "Company",
      Field::Website => "Website",
    }
  }
}

/// Raw field values as entered, before any normalization.
#[derive(Debug, Clone, Default)]
pub struct DraftSubmission {
  pub name: String,
  pub email: String,
  pub use_case_title: String,
  pub description: String,
  pub category: String,
  pub technology: String,
  pub maturity: String,
  pub adoption: String,
  pub tags: String,
  pub company: String,
  pub website: String,
}

impl DraftSubmission {
  pub fn value(&self, field: Field) -> &str {
    match field {
      Field::Name => &self.name,
      Field::Email => &self.email,
      Field::UseCaseTitle => &self.use_case_title,
      Field::Description => &self.description,
      Field::Category => &self.category,
      Field::Technology => &self.technology,
      Field::Maturity => &self.maturity,
      Field::Adoption => &self.adoption,
      Field::Tags => &self.tags,
      Field::Company => &self.company,
      Field::Website => &self.website,
    }
  }

  fn set_value(&mut self, field: Field, value: &str) {
    let slot = match field {
      Field::Name => &mut self.name,
      Field::Email => &mut self.email,
      Field::UseCaseTitle => &mut self.use_case_title,
      Field::Description => &mut self.description,
      Field::Category => &mut self.category,
      Field::Technology => &mut self.technology,
      Field::Maturity => &mut self.maturity,
      Field::Adoption => &mut self.adoption,
      Field::Tags => &mut self.tags,
      Field::Company => &mut self.company,
      Field::Website => &mut self.website,
    };
    *slot = value.to_string();
  }
}

/// Validates a single field value, returning the message to show.
pub fn validate_field(field: Field, value: &str) -> Option<String> {
  match field {
    Field::Name => {
      if value.trim().is_empty() {
        return Some("Name is required".to_string());
      }
      None
    }
    Field::Email => {
      if value.trim().is_empty() {
        return Some("Email is required".to_string());
      }
      let email_regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
      if !email_regex.is_match(value) {
        return Some("Please enter a valid email address".to_string());
      }
      None
    }
    Field::UseCaseTitle => {
      if value.trim().is_empty() {
        return Some("Use case title is required".to_string());
      }
      None
    }
    Field::Description => {
      let trimmed = value.trim();
      if trimmed.is_empty() {
        return Some("Description is required".to_string());
      }
      if trimmed.chars().count() < 20 {
        return Some("Description must be at least 20 characters".to_string());
      }
      None
    }
    Field::Category => {
      if value.is_empty() {
        return Some("Category is required".to_string());
      }
      None
    }
    Field::Technology => {
      if value.is_empty() {
        return Some("Technology is required".to_string());
      }
      None
    }
    Field::Maturity => percent_error(value, "Maturity must be between 0 and 100"),
    Field::Adoption => percent_error(value, "Adoption must be between 0 and 100"),
    Field::Tags | Field::Company | Field::Website => None,
  }
}

/// Blank is fine; anything else must parse as a number in [0, 100].
fn percent_error(value: &str, message: &str) -> Option<String> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return None;
  }
  match trimmed.parse::<f64>() {
    Ok(parsed) if (0.0..=100.0).contains(&parsed) => None,
    _ => Some(message.to_string()),
  }
}

/// Turns a percent field into a fraction, defaulting blank or unreadable
/// input to 0.5 and clamping the rest into [0, 1].
pub fn percent_fraction(value: &str) -> f64 {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return 0.5;
  }
  match trimmed.parse::<f64>() {
    Ok(parsed) if parsed.is_finite() => (parsed / 100.0).clamp(0.0, 1.0),
    _ => 0.5,
  }
}

/// Splits a comma-separated tag list, trimming entries and dropping
/// empty ones.
pub fn split_tags(raw: &str) -> Vec<String> {
  raw
    .split(',')
    .map(str::trim)
    .filter(|tag| !tag.is_empty())
    .map(str::to_string)
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
  #[default]
  Editing,
  Submitting,
  Submitted,
}

#[derive(Debug, Error)]
pub enum SubmitError {
  #[error("the form has missing or empty required fields")]
  NotReady,
  #[error("a submission is already in flight")]
  InFlight,
  #[error("the form was already submitted; reset it to submit again")]
  AlreadySubmitted,
  #[error("delivery failed: {reason}")]
  DeliveryFailed { reason: String },
}

impl SubmitError {
  pub fn delivery_failed(reason: impl Into<String>) -> Self {
    SubmitError::DeliveryFailed { reason: reason.into() }
  }
}

/// Trait for submission delivery to enable dependency injection and
/// testing without waiting out the simulated network.
pub trait SubmissionGateway {
  fn deliver(
    &self,
    draft: &DraftSubmission,
  ) -> impl std::future::Future<Output = Result<(), SubmitError>>;
}

/// Production gateway: sleeps for the configured delay and accepts.
pub struct SimulatedGateway {
  delay: Duration,
}

impl SimulatedGateway {
  pub fn new(delay: Duration) -> Self {
    Self { delay }
  }
}

impl SubmissionGateway for SimulatedGateway {
  async fn deliver(&self, _draft: &DraftSubmission) -> Result<(), SubmitError> {
    tokio::time::sleep(self.delay).await;
    Ok(())
  }
}

/// The submission form and its validation state.
#[derive(Debug, Default)]
pub struct IntakeForm {
  pub draft: DraftSubmission,
  errors: HashMap<Field, String>,
  submit_failure: Option<String>,
  phase: FormPhase,
}

impl IntakeForm {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn phase(&self) -> FormPhase {
    self.phase
  }

  /// Updates a field and clears any error it was showing.
  pub fn edit(&mut self, field: Field, value: &str) {
    self.draft.set_value(field, value);
    self.errors.remove(&field);
  }

  /// Validates a field as it loses focus.
  pub fn blur(&mut self, field: Field) {
    match validate_field(field, self.draft.value(field)) {
      Some(message) => {
        self.errors.insert(field, message);
      }
      None => {
        self.errors.remove(&field);
      }
    }
  }

  pub fn field_error(&self, field: Field) -> Option<&str> {
    self.errors.get(&field).map(String::as_str)
  }

  /// Message recorded when a delivery attempt failed.
  pub fn submit_failure(&self) -> Option<&str> {
    self.submit_failure.as_deref()
  }

  /// Current errors in display order.
  pub fn errors_in_order(&self) -> Vec<(Field, &str)> {
    Field::ALL
      .iter()
      .filter_map(|field| self.errors.get(field).map(|message| (*field, message.as_str())))
      .collect()
  }

  /// Whether the required fields are filled. Errors on the optional
  /// percent fields do not hold a submission back.
  pub fn is_valid(&self) -> bool {
    Field::REQUIRED.iter().all(|field| {
      let value = self.draft.value(*field);
      match field {
        Field::Category | Field::Technology => !value.is_empty(),
        _ => !value.trim().is_empty(),
      }
    })
  }

  /// Validates every field at once, as the one-shot CLI path does.
  /// Returns true when no field reports an error.
  pub fn validate_all(&mut self) -> bool {
    for field in Field::ALL {
      self.blur(field);
    }
    self.errors.is_empty()
  }

  /// Builds the record a successful submission publishes.
  ///
  /// The record carries the use case itself; the submitter's name and
  /// email gate validation but are not published with it.
  pub fn finalize(&self, id: i64, submitted_at: DateTime<Utc>) -> UseCaseRecord {
    let optional = |value: &str| {
      let trimmed = value.trim();
      if trimmed.is_empty() {
        None
      } else {
        Some(trimmed.to_string())
      }
    };

    UseCaseRecord {
      id,
      name: self.draft.use_case_title.clone(),
      category: self.draft.category.clone(),
      technology: self.draft.technology.clone(),
      description: self.draft.description.clone(),
      maturity: percent_fraction(&self.draft.maturity),
      adoption: percent_fraction(&self.draft.adoption),
      tags: split_tags(&self.draft.tags),
      company: optional(&self.draft.company),
      website: optional(&self.draft.website),
      submitted_at: Some(submitted_at),
    }
  }

  /// Delivers the draft through the gateway and finalizes it.
  ///
  /// The clock runs only after delivery succeeds, so the id and
  /// timestamp reflect when the submission landed. A failed delivery
  /// returns the form to editing with a retry message.
  pub async fn submit<G, C>(&mut self, gateway: &G, clock: C) -> Result<UseCaseRecord, SubmitError>
  where
    G: SubmissionGateway,
    C: FnOnce() -> (i64, DateTime<Utc>),
  {
    match self.phase {
      FormPhase::Submitting => return Err(SubmitError::InFlight),
      FormPhase::Submitted => return Err(SubmitError::AlreadySubmitted),
      FormPhase::Editing => {}
    }
    if !self.is_valid() {
      return Err(SubmitError::NotReady);
    }

    self.submit_failure = None;
    self.phase = FormPhase::Submitting;

    match gateway.deliver(&self.draft).await {
      Ok(()) => {
        let (id, submitted_at) = clock();
        let record = self.finalize(id, submitted_at);
        self.phase = FormPhase::Submitted;
        Ok(record)
      }
      Err(err) => {
        self.phase = FormPhase::Editing;
        self.submit_failure = Some("Failed to submit use case. Please try again.".to_string());
        Err(err)
      }
    }
  }

  /// Clears everything for another submission.
  pub fn reset(&mut self) {
    self.draft = DraftSubmission::default();
    self.errors.clear();
    self.submit_failure = None;
    self.phase = FormPhase::Editing;
  }
}
