//! Layout command: compute and print a scene's masonry placement.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::cli::report::{build_report, print_report};
use crate::engine::Engine;
use crate::scene::Scene;

/// Compute the masonry layout for a scene and print the placements
#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    /// Path to scene JSON file
    #[arg(value_name = "SCENE")]
    pub scene: PathBuf,

    /// Override the scene's viewport width in pixels
    #[arg(long, value_name = "PX")]
    pub width: Option<f32>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl LayoutArgs {
    /// Execute the layout command
    pub fn execute(&self) -> Result<()> {
        let scene = Scene::load(&self.scene)?;
        let mut doc = scene.build_document();
        if let Some(width) = self.width {
            doc.set_viewport_width(width);
        }

        let mut engine = Engine::new();
        engine.scan(&mut doc);

        let report = build_report(&engine, &doc);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report);
        }
        Ok(())
    }
}
