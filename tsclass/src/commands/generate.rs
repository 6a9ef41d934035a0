use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tsclass_manifest::Manifest;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions, Project},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to tsclass.toml (defaults to ./tsclass.toml)
    #[arg(short, long, default_value = "tsclass.toml")]
    pub config: PathBuf,

    /// Output file (overrides the path in tsclass.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the generated file instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let project = Project::load(manifest)?;

        let report = ops::generate(
            &project,
            GenerateOptions {
                output: self.output.as_deref(),
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
