use lumen::*;

fn main() {
  println!("Lumen output demo\n");

  // Standard logging functions
  verbose("This is a verbose message");
  info("This is an info message");
  warn("This is a warning message");
  error("This is an error message");
  success("This is a success message");

  println!(); // spacing

  println!("{}", headline("Formatting helpers"));
  for line in wrap_text("A longer paragraph that wraps to the configured width so view bodies stay readable in narrow terminals.", 40) {
    println!("{line}");
  }

  println!();
  println!("maturity  {}", meter(0.7, 20));
  println!("adoption  {}", meter(0.35, 20));
  println!("{}", swatch((255, 107, 107), "Machine Learning"));

  // Multi-line message test
  let multiline = "This is a multiline message\nwith several lines\nto demonstrate formatting";
  info(multiline);
}
