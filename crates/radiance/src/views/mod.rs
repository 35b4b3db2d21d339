//! Terminal views and the interactive session driver.
//!
//! Each view module renders to a `String` so output can be asserted in
//! tests; printing and prompting happen only here.

pub mod chain;
pub mod entry;
pub mod radar;
pub mod use_cases;

use anyhow::Result;
use dialoguer::{Input, Select};

use crate::config::RadianceConfig;
use crate::facets::{category_facets, technology_facets};
use crate::intake::{Field, IntakeForm, SimulatedGateway, FORM_TECHNOLOGIES};
use crate::layout::RadarGeometry;
use crate::model::SECTOR_LABELS;
use crate::session::{Session, View};

/// Prints a rendered view to stdout.
pub fn show(view: &str) {
  println!("{view}");
}

/// Runs the interactive session until the user quits.
pub async fn run(config: &RadianceConfig) -> Result<()> {
  let mut session = Session::new();
  let gateway = SimulatedGateway::new(config.submit_delay());
  let geometry = config.geometry();
  let width = lumen::view_width();

  loop {
    let keep_going = match session.view() {
      View::Entry => entry_screen(&mut session, width)?,
      View::Radar => radar_screen(&mut session, &geometry, width)?,
      View::ValueChain => chain_screen(&mut session, width)?,
      View::UseCases => use_cases_screen(&mut session, &gateway, width).await?,
    };
    if !keep_going {
      return Ok(());
    }
  }
}

fn entry_screen(session: &mut Session, width: usize) -> Result<bool> {
  show(&entry::render(width));
  let choice = Select::new()
    .items(&[entry::OPTION_SUBMIT, entry::OPTION_EXPLORE])
    .default(1)
    .interact()?;
  session.set_view(if choice == 0 { View::UseCases } else { View::Radar });
  Ok(true)
}

fn radar_screen(session: &mut Session, geometry: &RadarGeometry, width: usize) -> Result<bool> {
  show(&radar::render(session, geometry));
  let choice = Select::new()
    .items(&[
      "View a use case",
      "Toggle category filter",
      "Toggle technology filter",
      "Clear filters",
      "Energy value chain",
      "Submit a use case",
      "Quit",
    ])
    .default(0)
    .interact()?;

  match choice {
    0 => {
      let visible = session.visible();
      if visible.is_empty() {
        lumen::warn("no use cases match the active filters");
      } else {
        let names: Vec<&str> = visible.iter().map(|record| record.name.as_str()).collect();
        let picked = Select::new().with_prompt("Use case").items(&names).interact()?;
        show(&radar::render_detail(visible[picked], width));
      }
    }
    1 => {
      let options = category_facets(session.catalog());
      let picked = Select::new().with_prompt("Category").items(&options).interact()?;
      session.toggle_category(&options[picked]);
    }
    2 => {
      let options = technology_facets(session.catalog());
      let picked = Select::new().with_prompt("Technology").items(&options).interact()?;
      session.toggle_technology(&options[picked]);
    }
    3 => session.filter.clear(),
    4 => session.set_view(View::ValueChain),
    5 => session.set_view(View::UseCases),
    _ => return Ok(false),
  }
  Ok(true)
}

fn chain_screen(session: &mut Session, width: usize) -> Result<bool> {
  show(&chain::render(session.visible(), width));
  let choice = Select::new()
    .items(&["Back to radar", "Submit a use case", "Quit"])
    .default(0)
    .interact()?;

  match choice {
    0 => session.set_view(View::Radar),
    1 => session.set_view(View::UseCases),
    _ => return Ok(false),
  }
  Ok(true)
}

async fn use_cases_screen(
  session: &mut Session,
  gateway: &SimulatedGateway,
  width: usize,
) -> Result<bool> {
  show(&use_cases::render(session, width));
  fill_form(session)?;

  lumen::info("submitting use case...");
  match session.submit_draft(gateway).await {
    Ok(id) => {
      show(&use_cases::render_success(width));
      lumen::success(&format!("recorded as use case #{id}"));
      session.form.reset();

      let choice = Select::new()
        .items(&[use_cases::OPTION_SUBMIT_ANOTHER, entry::OPTION_EXPLORE, "Quit"])
        .default(1)
        .interact()?;
      match choice {
        0 => {}
        1 => session.set_view(View::Radar),
        _ => return Ok(false),
      }
    }
    Err(error) => {
      if let Some(failure) = session.form.submit_failure() {
        lumen::error(failure);
      }
      lumen::error(&format!("submission failed: {error}"));

      let choice = Select::new()
        .with_prompt("Try again?")
        .items(&["Yes", entry::OPTION_EXPLORE])
        .default(0)
        .interact()?;
      if choice == 1 {
        session.form.reset();
        session.set_view(View::Radar);
      }
    }
  }
  Ok(true)
}

/// Walks every form field in order, re-prompting until each one passes
/// validation.
fn fill_form(session: &mut Session) -> Result<()> {
  for field in Field::ALL {
    match field {
      Field::Category => prompt_choice(&mut session.form, field, &SECTOR_LABELS)?,
      Field::Technology => prompt_choice(&mut session.form, field, &FORM_TECHNOLOGIES)?,
      _ => prompt_text(&mut session.form, field)?,
    }
  }
  Ok(())
}

fn prompt_choice(form: &mut IntakeForm, field: Field, options: &[&str]) -> Result<()> {
  let picked = Select::new().with_prompt(field.label()).items(options).interact()?;
  form.edit(field, options[picked]);
  form.blur(field);
  Ok(())
}

fn prompt_text(form: &mut IntakeForm, field: Field) -> Result<()> {
  loop {
    let value: String = Input::new()
      .with_prompt(field.label())
      .with_initial_text(form.draft.value(field))
      .allow_empty(true)
      .interact_text()?;
    form.edit(field, &value);
    form.blur(field);
    match form.field_error(field) {
      Some(message) => lumen::warn(message),
      None => return Ok(()),
    }
  }
}
