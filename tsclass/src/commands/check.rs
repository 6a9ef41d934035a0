use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tsclass_manifest::Manifest;

use super::UnwrapOrExit;
use crate::{
    ops::{self, Project},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to tsclass.toml (defaults to ./tsclass.toml)
    #[arg(short, long, default_value = "tsclass.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let project = Project::load(manifest)?;

        let report = ops::check(&project)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
