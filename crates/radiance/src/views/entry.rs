//! Entry screen shown when an interactive session starts.

pub const TITLE: &str = "AI Energy Radar";

pub const TAGLINE: &str = "Explore and visualize AI applications across the energy sector. \
  Discover innovative use cases, track technology maturity, and map the energy value chain.";

pub const QUESTION: &str = "Do you have a use case you'd like to submit?";

pub const QUESTION_HINT: &str =
  "Share your AI energy applications or explore existing ones in our interactive radar";

pub const OPTION_SUBMIT: &str = "Yes, submit a use case";

pub const OPTION_EXPLORE: &str = "No, explore the app";

pub const FOOTER: &str = "Interactive visualization of AI applications across the energy sector";

/// Renders the entry screen body, wrapped to `width` columns.
pub fn render(width: usize) -> String {
  let mut out = String::new();

  out.push_str(&lumen::banner_line(width, '='));
  out.push('\n');
  out.push_str(TITLE);
  out.push('\n');
  out.push_str(&lumen::banner_line(width, '='));
  out.push('\n');
  out.push('\n');

  for line in lumen::wrap_text(TAGLINE, width) {
    out.push_str(&line);
    out.push('\n');
  }
  out.push('\n');

  for line in lumen::wrap_text(QUESTION, width) {
    out.push_str(&line);
    out.push('\n');
  }
  for line in lumen::wrap_text(QUESTION_HINT, width) {
    out.push_str(&line);
    out.push('\n');
  }
  out.push('\n');

  for line in lumen::wrap_text(FOOTER, width) {
    out.push_str(&line);
    out.push('\n');
  }

  out
}
