//! Filter command: apply a category filter to a scene and print the
//! settled result.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Result};
use clap::Args;

use crate::cli::report::{build_report, print_report};
use crate::constants::SHOW_SETTLE;
use crate::engine::Engine;
use crate::scene::Scene;

/// Apply a category filter to a scene and print the settled layout
#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// Path to scene JSON file
    #[arg(value_name = "SCENE")]
    pub scene: PathBuf,

    /// Filter tag to activate (use "*" to show everything)
    #[arg(short, long, value_name = "TAG")]
    pub filter: String,

    /// Override the scene's viewport width in pixels
    #[arg(long, value_name = "PX")]
    pub width: Option<f32>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl FilterArgs {
    /// Execute the filter command
    ///
    /// Activates the first trigger whose tag matches, then advances virtual
    /// time past both settle windows so the printed state is the settled
    /// one.
    pub fn execute(&self) -> Result<()> {
        let scene = Scene::load(&self.scene)?;
        let mut doc = scene.build_document();
        if let Some(width) = self.width {
            doc.set_viewport_width(width);
        }

        let mut engine = Engine::new();
        engine.scan(&mut doc);

        let Some(trigger) = engine.find_trigger(&doc, &self.filter) else {
            bail!("no filter trigger with tag '{}' in this scene", self.filter);
        };

        let start = Instant::now();
        engine.activate_trigger(&mut doc, trigger, start);
        engine.tick(&mut doc, start + SHOW_SETTLE);

        let report = build_report(&engine, &doc);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("Filter: {}", self.filter);
            print_report(&report);
        }
        Ok(())
    }
}
