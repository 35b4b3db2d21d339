//! ## Features
//!
//! - Standard logging levels (verbose, info, warn, error, success)
//! - Multi-line message support with consistent formatting
//! - Banner displays for view headings
//! - String-building helpers for view bodies (wrapping, meters, swatches)
//!
//! Logging goes to stderr so view output on stdout stays pipeable.

use colored::*;

/// Core logging function that handles the actual output
pub fn log(message: &str) {
  for line in message.lines() {
    eprintln!("{line}");
  }
}

/// Format a colored prefix for log messages
fn format_prefix(color: Color, prefix: &str) -> String {
  format!("[{}]{:<width$}", prefix.color(color).bold(), "", width = 7 - prefix.len() - 2)
}

pub fn verbose(message: &str) {
  let prefix = format_prefix(Color::Cyan, "verb");
  for line in message.lines() {
    log(&format!("{prefix} {line}"));
  }
}

/// Info level logging - general information
pub fn info(message: &str) {
  let prefix = format_prefix(Color::Blue, "info");
  for line in message.lines() {
    log(&format!("{prefix} {line}"));
  }
}

/// Warning level logging - something needs attention
pub fn warn(message: &str) {
  let prefix = format_prefix(Color::Yellow, "warn");
  for line in message.lines() {
    log(&format!("{prefix} {line}"));
  }
}

/// Error level logging - something went wrong
pub fn error(message: &str) {
  let prefix = format_prefix(Color::Red, "error");
  for line in message.lines() {
    log(&format!("{prefix} {line}"));
  }
}

/// Success level logging - something completed successfully
pub fn success(message: &str) {
  let prefix = format_prefix(Color::Green, "sccs");
  for line in message.lines() {
    log(&format!("{prefix} {line}"));
  }
}

/// Create a banner line of the specified length and character
pub fn banner_line(length: usize, char: char) -> String {
  char.to_string().repeat(length)
}

/// Display a message with a banner around it
pub fn as_banner<F>(log_fn: F, message: &str, width: Option<usize>, border_char: Option<char>)
where
  F: Fn(&str),
{
  let width = width.unwrap_or(50);
  let border_char = border_char.unwrap_or('=');

  let banner = banner_line(width, border_char);

  log_fn(&banner);
  log_fn(message);
  log_fn(&banner);
}

/// Section heading for view output, `=== title ===` style
pub fn headline(title: &str) -> String {
  format!("=== {} ===", title.bold())
}

/// Width available for view output, capped so wrapped text stays readable
pub fn view_width() -> usize {
  let (_, cols) = console::Term::stdout().size();
  (cols as usize).clamp(40, 100)
}

/// Wrap text to fit within a specified width
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();

  for paragraph in text.split('\n') {
    if paragraph.trim().is_empty() {
      lines.push(String::new());
      continue;
    }

    let words: Vec<&str> = paragraph.split_whitespace().collect();
    let mut current_line = String::new();

    for word in words {
      if current_line.is_empty() {
        current_line = word.to_string();
      } else if current_line.len() + 1 + word.len() <= width {
        current_line.push(' ');
        current_line.push_str(word);
      } else {
        lines.push(current_line);
        current_line = word.to_string();
      }
    }

    if !current_line.is_empty() {
      lines.push(current_line);
    }
  }

  lines
}

/// Render a normalized [0,1] value as a filled meter, `████░░░░░░ 40%` style
pub fn meter(fraction: f64, width: usize) -> String {
  let clamped = fraction.clamp(0.0, 1.0);
  let filled = (clamped * width as f64).round() as usize;
  let filled = filled.min(width);
  format!("{}{} {}", "█".repeat(filled), "░".repeat(width - filled), percent(clamped))
}

/// Format a normalized [0,1] value as a rounded percentage
pub fn percent(fraction: f64) -> String {
  format!("{}%", (fraction * 100.0).round() as i64)
}

/// A colored dot followed by its label, for legend rows and marker listings
pub fn swatch(rgb: (u8, u8, u8), label: &str) -> String {
  let (r, g, b) = rgb;
  format!("{} {}", "●".truecolor(r, g, b), label)
}
