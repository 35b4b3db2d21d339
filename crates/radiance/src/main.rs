//! Radiance CLI
//!
//! Interactive radar of AI use cases across the energy sector, with
//! one-shot subcommands for scripted output.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use radiance::chain::group_by_category;
use radiance::config::RadianceConfig;
use radiance::intake::{Field, SimulatedGateway};
use radiance::layout::place_markers;
use radiance::session::Session;
use radiance::svg::radar_svg;
use radiance::views;

#[derive(Parser)]
#[command(name = "radiance")]
#[command(
  about = "Radiance - AI Energy Radar\nUse-case catalog, radar layout, and submission intake for AI in the energy sector"
)]
#[command(version)]
struct Cli {
  /// Enable verbose logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Option<Commands>,
}

/// Category and technology narrowing shared by the view subcommands
#[derive(Args)]
struct FilterArgs {
  /// Only show use cases in these categories
  #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
  categories: Vec<String>,

  /// Only show use cases built on these technologies
  #[arg(short = 't', long = "technology", value_name = "TECHNOLOGY")]
  technologies: Vec<String>,
}

#[derive(Args)]
struct SubmitArgs {
  /// Your name (not stored with the use case)
  #[arg(long)]
  name: String,

  /// Your email (not stored with the use case)
  #[arg(long)]
  email: String,

  /// Use case title
  #[arg(long)]
  title: String,

  /// Description, at least 20 characters
  #[arg(long)]
  description: String,

  /// Energy sector category
  #[arg(long)]
  category: String,

  /// Technology family
  #[arg(long)]
  technology: String,

  /// Maturity level in percent, 0-100
  #[arg(long)]
  maturity: Option<String>,

  /// Adoption level in percent, 0-100
  #[arg(long)]
  adoption: Option<String>,

  /// Comma-separated tags
  #[arg(long)]
  tags: Option<String>,

  /// Company name
  #[arg(long)]
  company: Option<String>,

  /// Website URL
  #[arg(long)]
  website: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
  /// Render the radar view once
  Radar {
    #[command(flatten)]
    filters: FilterArgs,
    /// Emit placed markers as JSON instead of the text view
    #[arg(long)]
    json: bool,
    /// Write the radar as an SVG document to this path
    #[arg(long, value_name = "PATH")]
    svg: Option<PathBuf>,
  },
  /// Render the value-chain view once
  Chain {
    #[command(flatten)]
    filters: FilterArgs,
    /// Emit category groups as JSON instead of the text view
    #[arg(long)]
    json: bool,
  },
  /// Print quick stats for the catalog
  Stats {
    /// Emit the stats as JSON
    #[arg(long)]
    json: bool,
  },
  /// Submit a use case without the interactive form
  Submit {
    #[command(flatten)]
    draft: SubmitArgs,
    /// Emit the recorded use case as JSON
    #[arg(long)]
    json: bool,
  },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  let filter = if cli.verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
  };
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(filter)
    .init();

  let config = RadianceConfig::load()?;
  tracing::debug!(submit_delay_ms = config.submit_delay_ms, "configuration loaded");

  match cli.command {
    None => views::run(&config).await?,
    Some(Commands::Radar { filters, json, svg }) => run_radar(&config, filters, json, svg)?,
    Some(Commands::Chain { filters, json }) => run_chain(filters, json)?,
    Some(Commands::Stats { json }) => run_stats(json)?,
    Some(Commands::Submit { draft, json }) => run_submit(&config, draft, json).await?,
  }

  Ok(())
}

fn filtered_session(filters: FilterArgs) -> Session {
  let mut session = Session::new();
  session.filter.categories = filters.categories;
  session.filter.technologies = filters.technologies;
  session
}

fn run_radar(
  config: &RadianceConfig,
  filters: FilterArgs,
  json: bool,
  svg: Option<PathBuf>,
) -> Result<()> {
  let session = filtered_session(filters);
  let geometry = config.geometry();

  if let Some(path) = &svg {
    let markers = place_markers(&geometry, session.visible());
    let document = radar_svg(&geometry, &markers, config.marker_captions);
    fs::write(path, document)
      .with_context(|| format!("failed to write SVG to {}", path.display()))?;
    lumen::success(&format!("radar written to {}", path.display()));
  }

  if json {
    let markers = place_markers(&geometry, session.visible());
    println!("{}", serde_json::to_string_pretty(&markers)?);
  } else if svg.is_none() {
    views::show(&views::radar::render(&session, &geometry));
  }
  Ok(())
}

fn run_chain(filters: FilterArgs, json: bool) -> Result<()> {
  let session = filtered_session(filters);
  let visible = session.visible();

  if json {
    let groups = group_by_category(visible);
    println!("{}", serde_json::to_string_pretty(&groups)?);
  } else {
    views::show(&views::chain::render(visible, lumen::view_width()));
  }
  Ok(())
}

fn run_stats(json: bool) -> Result<()> {
  let session = Session::new();
  let stats = session.quick_stats();

  if json {
    println!("{}", serde_json::to_string_pretty(&stats)?);
  } else {
    println!("{:<20} {}", "Total Applications", stats.total_applications);
    println!("{:<20} {}", "Energy Sectors", stats.sectors);
    println!("{:<20} {}", "Technologies", stats.technologies);
  }
  Ok(())
}

async fn run_submit(config: &RadianceConfig, draft: SubmitArgs, json: bool) -> Result<()> {
  let mut session = Session::new();
  session.form.edit(Field::Name, &draft.name);
  session.form.edit(Field::Email, &draft.email);
  session.form.edit(Field::UseCaseTitle, &draft.title);
  session.form.edit(Field::Description, &draft.description);
  session.form.edit(Field::Category, &draft.category);
  session.form.edit(Field::Technology, &draft.technology);
  session.form.edit(Field::Maturity, draft.maturity.as_deref().unwrap_or(""));
  session.form.edit(Field::Adoption, draft.adoption.as_deref().unwrap_or(""));
  session.form.edit(Field::Tags, draft.tags.as_deref().unwrap_or(""));
  session.form.edit(Field::Company, draft.company.as_deref().unwrap_or(""));
  session.form.edit(Field::Website, draft.website.as_deref().unwrap_or(""));

  if !session.form.validate_all() {
    for (field, message) in session.form.errors_in_order() {
      lumen::error(&format!("{}: {message}", field.label()));
    }
    std::process::exit(2);
  }

  let gateway = SimulatedGateway::new(config.submit_delay());
  let id = session.submit_draft(&gateway).await?;

  let record = session
    .submissions()
    .iter()
    .find(|record| record.id == id)
    .context("recorded use case not found")?;
  if json {
    println!("{}", serde_json::to_string_pretty(record)?);
  } else {
    lumen::success(views::use_cases::SUCCESS_TITLE);
    println!("#{} {} ({})", record.id, record.name, record.category);
  }
  Ok(())
}
