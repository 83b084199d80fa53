//! Demo command: interactive terminal viewer.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::scene::Scene;
use crate::tui;

/// Launch the interactive terminal demo for a scene
#[derive(Debug, Clone, Args)]
pub struct DemoArgs {
    /// Path to scene JSON file
    #[arg(value_name = "SCENE")]
    pub scene: PathBuf,
}

impl DemoArgs {
    /// Execute the demo command
    pub fn execute(&self) -> Result<()> {
        let scene = Scene::load(&self.scene)?;
        tui::run_demo(&scene)
    }
}
