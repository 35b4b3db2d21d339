//! Use-case view: the submission form wrapper plus the success screen.

use colored::Colorize;

use crate::session::Session;

pub const TITLE: &str = "Submit Use Case";

pub const SUBTITLE: &str = "Share your AI energy application with the community";

pub const SUCCESS_TITLE: &str = "Use Case Submitted Successfully!";

pub const SUCCESS_BODY: &str = "Thank you for contributing to the AI Energy Radar. \
  Your use case has been submitted and will be reviewed by our team.";

pub const OPTION_SUBMIT_ANOTHER: &str = "Submit Another Use Case";

/// Renders the view header and the session's submissions so far.
pub fn render(session: &Session, width: usize) -> String {
  let mut out = String::new();
  out.push_str(TITLE);
  out.push('\n');
  for line in lumen::wrap_text(SUBTITLE, width) {
    out.push_str(&line);
    out.push('\n');
  }
  out.push('\n');

  out.push_str(&lumen::headline("Session Submissions"));
  out.push('\n');
  if session.submissions().is_empty() {
    out.push_str("  (none yet)\n");
  }
  for record in session.submissions() {
    out.push_str(&format!("  #{} {} ({})\n", record.id, record.name, record.category));
  }
  out.push('\n');

  out
}

/// Renders the success screen shown after a completed submission.
pub fn render_success(width: usize) -> String {
  let mut out = String::new();
  out.push_str(&lumen::banner_line(width, '='));
  out.push('\n');
  out.push_str(&SUCCESS_TITLE.green().bold().to_string());
  out.push('\n');
  out.push_str(&lumen::banner_line(width, '='));
  out.push('\n');
  out.push('\n');
  for line in lumen::wrap_text(SUCCESS_BODY, width) {
    out.push_str(&line);
    out.push('\n');
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::curated_catalog;

  #[test]
  fn test_render_hints_when_no_submissions_exist() {
    let session = Session::new();
    let screen = render(&session, 80);
    assert!(screen.contains(TITLE));
    assert!(screen.contains("(none yet)"));
  }

  #[test]
  fn test_render_lists_session_submissions() {
    let mut session = Session::new();
    let mut record = curated_catalog().remove(0);
    record.name = "Turbine Wake Steering".to_string();
    let id = session.append_submission(record);

    let screen = render(&session, 80);
    assert!(screen.contains(&format!("#{id} Turbine Wake Steering")));
    assert!(!screen.contains("(none yet)"));
  }

  #[test]
  fn test_success_screen_carries_the_thanks_copy() {
    let screen = render_success(80);
    assert!(screen.contains(SUCCESS_TITLE));
    assert!(screen.contains("reviewed by our team"));
  }
}
