//! End-to-end flows through the session, layout, and view layers.

use std::time::Duration;

use radiance::config::RadianceConfig;
use radiance::intake::{DraftSubmission, Field, FormPhase, SimulatedGateway, SubmissionGateway, SubmitError};
use radiance::layout::place_markers;
use radiance::model::SECTOR_LABELS;
use radiance::session::{Session, View};
use radiance::svg::radar_svg;
use radiance::views::{chain, radar, use_cases};

struct FailingGateway;

impl SubmissionGateway for FailingGateway {
  fn deliver(
    &self,
    _draft: &DraftSubmission,
  ) -> impl std::future::Future<Output = Result<(), SubmitError>> {
    std::future::ready(Err(SubmitError::delivery_failed("relay unavailable")))
  }
}

fn fill_draft(session: &mut Session) {
  let entries = [
    (Field::Name, "Alex Chen"),
    (Field::Email, "alex@example.com"),
    (Field::UseCaseTitle, "Turbine Wake Steering"),
    (Field::Description, "Closed-loop wake steering control for offshore wind farms"),
    (Field::Category, "Renewable Energy"),
    (Field::Technology, "Computer Vision"),
    (Field::Maturity, "40"),
    (Field::Adoption, "25"),
    (Field::Tags, "wind, wake, control"),
  ];
  for (field, value) in entries {
    session.form.edit(field, value);
    session.form.blur(field);
  }
}

#[tokio::test]
async fn test_explore_then_submit_journey() {
  let mut session = Session::new();
  assert_eq!(session.view(), View::Entry);

  // Explore the radar with a category filter on.
  session.set_view(View::Radar);
  session.toggle_category("Renewable Energy");
  assert_eq!(session.visible().len(), 3);

  let geometry = RadianceConfig::default().geometry();
  let markers = place_markers(&geometry, session.visible());
  assert_eq!(markers.len(), 3);
  assert!(markers.iter().all(|marker| marker.sector == 1));

  let screen = radar::render(&session, &geometry);
  assert!(screen.contains("Solar Power Forecasting"));
  assert!(screen.contains("categories: Renewable Energy"));

  // The value chain shows the same narrowed records.
  session.set_view(View::ValueChain);
  let chain_screen = chain::render(session.visible(), 80);
  assert!(chain_screen.contains("Renewable Energy"));
  assert!(!chain_screen.contains("Nuclear Energy"));

  // Submit a use case.
  session.set_view(View::UseCases);
  fill_draft(&mut session);
  assert!(session.form.is_valid());

  let gateway = SimulatedGateway::new(Duration::ZERO);
  let id = session.submit_draft(&gateway).await.unwrap();
  assert!(id > 0);
  assert_eq!(session.form.phase(), FormPhase::Submitted);

  // The submission shows up in the use-case view and the stats.
  let listing = use_cases::render(&session, 80);
  assert!(listing.contains("Turbine Wake Steering"));

  let stats = session.quick_stats();
  assert_eq!(stats.total_applications, 25);
  assert_eq!(stats.technologies, 4);

  // Filters still narrow only the curated catalog.
  assert_eq!(session.visible().len(), 3);

  session.form.reset();
  assert_eq!(session.form.phase(), FormPhase::Editing);
}

#[tokio::test]
async fn test_failed_delivery_keeps_the_draft() {
  let mut session = Session::new();
  session.set_view(View::UseCases);
  fill_draft(&mut session);

  let error = session.submit_draft(&FailingGateway).await.unwrap_err();
  assert!(matches!(error, SubmitError::DeliveryFailed { .. }));
  assert_eq!(session.form.phase(), FormPhase::Editing);
  assert_eq!(session.form.submit_failure(), Some("Failed to submit use case. Please try again."));
  assert!(session.submissions().is_empty());
  assert_eq!(session.form.draft.use_case_title, "Turbine Wake Steering");

  // A successful retry clears the failure slot.
  let id = session.submit_draft(&SimulatedGateway::new(Duration::ZERO)).await.unwrap();
  assert!(id > 0);
  assert!(session.form.submit_failure().is_none());
  assert_eq!(session.submissions().len(), 1);
}

#[tokio::test]
async fn test_back_to_back_submissions_get_increasing_ids() {
  let mut session = Session::new();
  let gateway = SimulatedGateway::new(Duration::ZERO);

  fill_draft(&mut session);
  let first = session.submit_draft(&gateway).await.unwrap();

  session.form.reset();
  fill_draft(&mut session);
  let second = session.submit_draft(&gateway).await.unwrap();

  assert!(second > first);
  assert_eq!(session.submissions().len(), 2);
}

#[test]
fn test_radar_svg_covers_the_full_catalog() {
  let config = RadianceConfig::default();
  let geometry = config.geometry();
  let session = Session::new();

  let markers = place_markers(&geometry, session.visible());
  let document = radar_svg(&geometry, &markers, config.marker_captions);

  assert_eq!(document.matches("<circle").count(), 21);
  for label in SECTOR_LABELS {
    assert!(document.contains(label), "missing sector label {label}");
  }
}
