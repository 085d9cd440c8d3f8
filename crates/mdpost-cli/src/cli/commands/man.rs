//! Man page rendering.

use anyhow::Result;
use clap::CommandFactory;

pub fn run_man() -> Result<()> {
    let man = clap_mangen::Man::new(crate::cli::Cli::command());
    man.render(&mut std::io::stdout())?;
    Ok(())
}
