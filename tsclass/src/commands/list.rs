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
pub struct ListCommand {
    /// Path to tsclass.toml (defaults to ./tsclass.toml)
    #[arg(short, long, default_value = "tsclass.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    /// Run the list command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let project = Project::load(manifest)?;

        ops::list(&project).render(&mut TerminalOutput::new());

        Ok(())
    }
}
